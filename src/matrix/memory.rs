//! Element access used by every transpose kernel.

use crate::error::{Result, check_len};

/// The pair of matrices a transpose works on.
///
/// A is `rows() × cols()` (N × M) and B is `cols() × rows()` (M × N), both
/// row-major. Kernels only ever touch memory through these methods, so the
/// same loop nest runs on plain slices or under the cache simulator.
///
/// Loads take `&mut self` because an instrumented implementation records
/// every access.
pub trait TransposeMemory {
    /// Columns of A, rows of B (M).
    fn cols(&self) -> usize;

    /// Rows of A, columns of B (N).
    fn rows(&self) -> usize;

    fn load_a(&mut self, row: usize, col: usize) -> i32;

    fn load_b(&mut self, row: usize, col: usize) -> i32;

    fn store_b(&mut self, row: usize, col: usize, value: i32);
}

/// Plain row-major slices. This is the production path.
pub struct Dense<'a> {
    a: &'a [i32],
    b: &'a mut [i32],
    m: usize,
    n: usize,
}

impl<'a> Dense<'a> {
    /// Wrap A (`n × m`) and B (`m × n`).
    ///
    /// # Panics
    ///
    /// Panics if the slice sizes don't match m, n.
    pub fn new(m: usize, n: usize, a: &'a [i32], b: &'a mut [i32]) -> Self {
        assert_eq!(a.len(), n * m, "A: expected {}x{}={} elements", n, m, n * m);
        assert_eq!(b.len(), m * n, "B: expected {}x{}={} elements", m, n, m * n);
        Self { a, b, m, n }
    }

    /// Same as [`Dense::new`] but reports a size mismatch as an error.
    pub fn try_new(m: usize, n: usize, a: &'a [i32], b: &'a mut [i32]) -> Result<Self> {
        check_len("A", a, n, m)?;
        check_len("B", b, m, n)?;
        Ok(Self { a, b, m, n })
    }

    /// Offset of A[row][col] from the start of A.
    #[inline(always)]
    pub fn offset_a(&self, row: usize, col: usize) -> usize {
        row * self.m + col
    }

    /// Offset of B[row][col] from the start of B.
    #[inline(always)]
    pub fn offset_b(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }
}

impl TransposeMemory for Dense<'_> {
    #[inline(always)]
    fn cols(&self) -> usize {
        self.m
    }

    #[inline(always)]
    fn rows(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn load_a(&mut self, row: usize, col: usize) -> i32 {
        self.a[row * self.m + col]
    }

    #[inline(always)]
    fn load_b(&mut self, row: usize, col: usize) -> i32 {
        self.b[row * self.n + col]
    }

    #[inline(always)]
    fn store_b(&mut self, row: usize, col: usize, value: i32) {
        self.b[row * self.n + col] = value;
    }
}
