//! Cache-blocked matrix transpose, tuned for a tiny cache.
//!
//! The target is a 1KB direct-mapped cache with 32-byte blocks: 32 lines of
//! 8 `i32` each. At that size a plain row-by-column transpose misses on
//! nearly every store. This crate picks a blocking strategy per shape and
//! ships a trace-driven simulator to count the misses.
//!
//! ## Usage
//!
//! ```
//! use cachetrans::{is_transpose, transpose};
//!
//! let (m, n) = (32, 32);
//! let a: Vec<i32> = (0..(n * m) as i32).collect();
//! let mut b = vec![0; m * n];
//!
//! transpose(m, n, &a, &mut b);
//! assert!(is_transpose(m, n, &a, &b));
//! ```
//!
//! To count misses, run a registered function under the simulator:
//!
//! ```
//! use cachetrans::cache::CacheConfig;
//! use cachetrans::cache::traced::Layout;
//! use cachetrans::eval::evaluate;
//! use cachetrans::registry::Registry;
//!
//! let registry = Registry::with_defaults();
//! let submission = registry.submission().unwrap();
//! let result = evaluate(submission, 32, 32, CacheConfig::default(), Layout::default()).unwrap();
//!
//! assert!(result.correct);
//! assert!(result.stats.misses < 300);
//! ```
//!
//! ## What's inside
//!
//! - 8×8 tiles with a held diagonal for 32×32
//! - 8×8 tiles shuffled through 4×4 quadrants for 64×64
//! - Clamped 16×16 tiles for everything else
//! - A set-associative LRU cache simulator and an evaluation driver

pub mod blocked;
pub mod cache;
pub mod error;
pub mod eval;
pub mod matrix;
pub mod registry;

pub use blocked::Strategy;
pub use error::{Result, TransposeError};
pub use matrix::check::is_transpose;
pub use matrix::memory::{Dense, TransposeMemory};
pub use matrix::transpose::trans;

/// Matrix transpose: B = A^T
///
/// A is n × m and B is m × n, both row-major (`m` counts columns of A). The
/// blocking strategy is picked from the shape, see [`Strategy::select`].
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n.
pub fn transpose(m: usize, n: usize, a: &[i32], b: &mut [i32]) {
    blocked::transpose_submit(&mut Dense::new(m, n, a, b));
}

/// Same as [`transpose`] but reports size mismatches instead of panicking.
pub fn try_transpose(m: usize, n: usize, a: &[i32], b: &mut [i32]) -> Result<()> {
    blocked::transpose_submit(&mut Dense::try_new(m, n, a, b)?);
    Ok(())
}

/// Transpose with an explicit strategy instead of the shape-based choice.
///
/// Fails if the strategy cannot tile this shape, see [`Strategy::supports`].
pub fn transpose_with(
    strategy: Strategy,
    m: usize,
    n: usize,
    a: &[i32],
    b: &mut [i32],
) -> Result<()> {
    strategy.check(m, n)?;
    strategy.run(&mut Dense::try_new(m, n, a, b)?);
    Ok(())
}
