//! Error types for the checked entry points.
//!
//! The blocked kernels themselves never fail. Errors only come from the
//! seams around them: slice/shape validation, cache geometry, and the
//! function registry.

use thiserror::Error;

/// Errors reported by the checked APIs of this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransposeError {
    /// A slice does not hold `rows * cols` elements.
    #[error("{matrix}: expected {expected} elements, got {actual}")]
    LengthMismatch {
        matrix: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `rows * cols` does not fit in `usize`.
    #[error("{matrix}: {rows}x{cols} overflows usize")]
    ShapeOverflow {
        matrix: &'static str,
        rows: usize,
        cols: usize,
    },

    /// A specialised strategy was forced onto a shape it cannot tile.
    #[error("{strategy} cannot tile a {n}x{m} matrix")]
    UnsupportedShape {
        strategy: &'static str,
        m: usize,
        n: usize,
    },

    /// Shape larger than the simulated harness arrays.
    #[error("{n}x{m} does not fit the {max}x{max} harness arrays")]
    ShapeTooLarge { m: usize, n: usize, max: usize },

    /// Cache parameters that do not describe a real cache.
    #[error("invalid cache geometry: {0}")]
    InvalidGeometry(String),

    /// The registry already holds its maximum number of functions.
    #[error("registry is full ({limit} functions)")]
    RegistryFull { limit: usize },

    /// No registered function carries this description.
    #[error("no transpose function registered as {0:?}")]
    UnknownFunction(String),
}

pub type Result<T> = std::result::Result<T, TransposeError>;

/// Check that `data` holds exactly `rows * cols` elements.
pub(crate) fn check_len(matrix: &'static str, data: &[i32], rows: usize, cols: usize) -> Result<()> {
    let expected = rows
        .checked_mul(cols)
        .ok_or(TransposeError::ShapeOverflow { matrix, rows, cols })?;
    if data.len() != expected {
        return Err(TransposeError::LengthMismatch {
            matrix,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
