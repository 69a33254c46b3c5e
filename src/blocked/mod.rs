//! Cache-blocked transpose strategies.
//!
//! One strategy per supported shape, all tuned for a 1KB direct-mapped
//! cache with 32-byte lines (8 `i32` per line, 32 lines):
//! - `Square32`: 8×8 tiles, diagonal held back (`deferred`)
//! - `Square64`: 8×8 tiles shuffled through 4×4 quadrants (`quadrant`)
//! - `General`: 16×16 tiles clamped to the matrix, diagonal held back

pub mod deferred;
pub mod quadrant;

use std::fmt;

use crate::error::{Result, TransposeError};
use crate::matrix::memory::TransposeMemory;

/// Blocking strategy, picked once per call from the matrix shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Square32,
    Square64,
    General,
}

impl Strategy {
    /// Pick the strategy for an `n × m` matrix A.
    ///
    /// Only the exact 32×32 and 64×64 shapes get the specialised tilings;
    /// every other shape falls back to `General`.
    pub fn select(m: usize, n: usize) -> Self {
        match (m, n) {
            (32, 32) => Strategy::Square32,
            (64, 64) => Strategy::Square64,
            _ => Strategy::General,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Square32 => "square-32",
            Strategy::Square64 => "square-64",
            Strategy::General => "general",
        }
    }

    /// Whether this strategy can tile an `n × m` A without leaving bounds.
    ///
    /// The square strategies walk whole 8×8 tiles and need both dimensions
    /// to be multiples of 8. `General` clamps and takes anything.
    pub fn supports(self, m: usize, n: usize) -> bool {
        match self {
            Strategy::Square32 => m % deferred::TILE_32 == 0 && n % deferred::TILE_32 == 0,
            Strategy::Square64 => m % quadrant::TILE_64 == 0 && n % quadrant::TILE_64 == 0,
            Strategy::General => true,
        }
    }

    /// Error unless [`Strategy::supports`] holds.
    pub fn check(self, m: usize, n: usize) -> Result<()> {
        if self.supports(m, n) {
            Ok(())
        } else {
            Err(TransposeError::UnsupportedShape {
                strategy: self.name(),
                m,
                n,
            })
        }
    }

    /// Run the strategy over `mem`. Shape must satisfy [`Strategy::supports`].
    #[inline]
    pub fn run<T: TransposeMemory + ?Sized>(self, mem: &mut T) {
        match self {
            Strategy::Square32 => deferred::transpose_32(mem),
            Strategy::Square64 => quadrant::transpose_64(mem),
            Strategy::General => deferred::transpose_general(mem),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Description the primary implementation is registered under. The
/// evaluation driver looks for this exact string.
pub const SUBMISSION_DESC: &str = "Transpose submission";

/// Primary implementation over any [`TransposeMemory`]: select by shape,
/// then run.
pub fn transpose_submit<T: TransposeMemory + ?Sized>(mem: &mut T) {
    let strategy = Strategy::select(mem.cols(), mem.rows());
    log::debug!(
        "transposing {}x{} with {} strategy",
        mem.rows(),
        mem.cols(),
        strategy
    );
    strategy.run(mem);
}
