//! Running a transpose under the simulator.

use super::Cache;
use crate::matrix::memory::{Dense, TransposeMemory};

/// Bytes per element.
pub const ELEM_BYTES: u64 = std::mem::size_of::<i32>() as u64;

/// Simulated addresses of A and B.
///
/// The default mirrors the evaluation harness, where A and B are two static
/// 256×256 `i32` arrays declared back to back: B starts 0x40000 bytes after
/// A. That distance is a multiple of any cache up to 256KB, so A[k] and
/// B[k] always land in the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub base_a: u64,
    pub base_b: u64,
}

impl Layout {
    /// Largest dimension the harness arrays can hold.
    pub const MAX_DIM: usize = 256;

    const DEFAULT_BASE_A: u64 = 0x0060_2100;

    pub fn new(base_a: u64, base_b: u64) -> Self {
        Self { base_a, base_b }
    }
}

impl Default for Layout {
    fn default() -> Self {
        let span = (Self::MAX_DIM * Self::MAX_DIM) as u64 * ELEM_BYTES;
        Self {
            base_a: Self::DEFAULT_BASE_A,
            base_b: Self::DEFAULT_BASE_A + span,
        }
    }
}

/// [`TransposeMemory`] that reports every load and store to a [`Cache`].
pub struct Traced<'a> {
    inner: Dense<'a>,
    cache: &'a mut Cache,
    layout: Layout,
}

impl<'a> Traced<'a> {
    pub fn new(inner: Dense<'a>, cache: &'a mut Cache, layout: Layout) -> Self {
        Self {
            inner,
            cache,
            layout,
        }
    }

    #[inline]
    fn touch_a(&mut self, row: usize, col: usize) {
        let offset = self.inner.offset_a(row, col) as u64;
        self.cache.access(self.layout.base_a + offset * ELEM_BYTES);
    }

    #[inline]
    fn touch_b(&mut self, row: usize, col: usize) {
        let offset = self.inner.offset_b(row, col) as u64;
        self.cache.access(self.layout.base_b + offset * ELEM_BYTES);
    }
}

impl TransposeMemory for Traced<'_> {
    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn load_a(&mut self, row: usize, col: usize) -> i32 {
        self.touch_a(row, col);
        self.inner.load_a(row, col)
    }

    fn load_b(&mut self, row: usize, col: usize) -> i32 {
        self.touch_b(row, col);
        self.inner.load_b(row, col)
    }

    fn store_b(&mut self, row: usize, col: usize, value: i32) {
        self.touch_b(row, col);
        self.inner.store_b(row, col, value);
    }
}
