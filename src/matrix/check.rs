/// Check whether B is the transpose of A.
///
/// A is n × m and B is m × n, both row-major. Returns `false` at the first
/// (i, j) where `A[i][j] != B[j][i]`.
///
/// This is a test oracle. Nothing on the transpose path calls it, so it
/// never shows up in simulated miss counts.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n.
///
/// # Example
///
/// ```
/// use cachetrans::is_transpose;
///
/// let a = vec![1, 2, 3, 4, 5, 6]; // 2×3
/// let b = vec![1, 4, 2, 5, 3, 6]; // 3×2
///
/// assert!(is_transpose(3, 2, &a, &b));
/// assert!(!is_transpose(3, 2, &a, &a));
/// ```
pub fn is_transpose(m: usize, n: usize, a: &[i32], b: &[i32]) -> bool {
    assert_eq!(a.len(), n * m, "A: expected {}x{}={} elements", n, m, n * m);
    assert_eq!(b.len(), m * n, "B: expected {}x{}={} elements", m, n, m * n);

    for i in 0..n {
        for j in 0..m {
            if a[i * m + j] != b[j * n + i] {
                return false;
            }
        }
    }
    true
}
