use super::memory::{Dense, TransposeMemory};

/// Description the baseline is registered under.
pub const BASELINE_DESC: &str = "Simple row-wise scan transpose";

/// Baseline transpose: B = A^T, one element at a time.
///
/// Walks A row by row, so every store into B strides by a whole row of B.
/// Nothing is blocked, which makes this the reference point the cache-aware
/// strategies are measured against.
///
/// # Arguments
///
/// * `m` - Columns of A, rows of B
/// * `n` - Rows of A, columns of B
/// * `a` - Source matrix (n × m), row-major
/// * `b` - Destination matrix (m × n), row-major
///
/// # Example
///
/// ```
/// use cachetrans::matrix::transpose::trans;
///
/// let a = vec![1, 2, 3,   // 2×3 matrix
///              4, 5, 6];
/// let mut b = vec![0; 6];  // will be 3×2
///
/// trans(3, 2, &a, &mut b);
///
/// assert_eq!(b, vec![1, 4,   // 3×2 matrix
///                    2, 5,
///                    3, 6]);
/// ```
pub fn trans(m: usize, n: usize, a: &[i32], b: &mut [i32]) {
    trans_in(&mut Dense::new(m, n, a, b));
}

/// Baseline loop over any [`TransposeMemory`].
pub fn trans_in<T: TransposeMemory + ?Sized>(mem: &mut T) {
    let (m, n) = (mem.cols(), mem.rows());
    for i in 0..n {
        for j in 0..m {
            let tmp = mem.load_a(i, j);
            mem.store_b(j, i, tmp);
        }
    }
}
