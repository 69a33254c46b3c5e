//! Property-based tests for the transpose engine.
//!
//! - Arbitrary shapes and contents come back transposed
//! - Transposing twice gives back the original
//! - The tuned shapes agree with the baseline for any contents

use cachetrans::matrix::transpose::trans;
use cachetrans::Strategy as Blocking;
use cachetrans::{is_transpose, transpose, transpose_with};
use proptest::prelude::*;

fn arb_matrix(max_dim: usize) -> impl Strategy<Value = (usize, usize, Vec<i32>)> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(|(m, n)| {
        (
            Just(m),
            Just(n),
            proptest::collection::vec(any::<i32>(), m * n),
        )
    })
}

fn arb_tuned_matrix() -> impl Strategy<Value = (usize, usize, Vec<i32>)> {
    prop_oneof![Just((32, 32)), Just((64, 64)), Just((61, 67))].prop_flat_map(|(m, n)| {
        (
            Just(m),
            Just(n),
            proptest::collection::vec(any::<i32>(), m * n),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_any_shape_is_transposed((m, n, a) in arb_matrix(80)) {
        let mut b = vec![0; m * n];
        transpose(m, n, &a, &mut b);
        prop_assert!(is_transpose(m, n, &a, &b), "{}x{} not transposed", n, m);
    }

    #[test]
    fn prop_transpose_is_self_inverse((m, n, a) in arb_matrix(80)) {
        let mut b = vec![0; m * n];
        let mut back = vec![0; m * n];

        transpose(m, n, &a, &mut b);
        // B is m × n, so its "m" is n
        transpose(n, m, &b, &mut back);

        prop_assert_eq!(back, a);
    }

    #[test]
    fn prop_tuned_shapes_match_baseline((m, n, a) in arb_tuned_matrix()) {
        let mut expected = vec![0; m * n];
        let mut actual = vec![0; m * n];

        trans(m, n, &a, &mut expected);
        transpose(m, n, &a, &mut actual);

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_square_strategies_on_multiples_of_8(
        bm in 1usize..=8,
        bn in 1usize..=8,
        seed in any::<i32>(),
    ) {
        let (m, n) = (bm * 8, bn * 8);
        let a: Vec<i32> = (0..(m * n) as i32).map(|x| x.wrapping_mul(seed)).collect();

        for strategy in [Blocking::Square32, Blocking::Square64] {
            let mut b = vec![0; m * n];
            prop_assert!(transpose_with(strategy, m, n, &a, &mut b).is_ok());
            prop_assert!(is_transpose(m, n, &a, &b), "{} on {}x{}", strategy, n, m);
        }
    }
}
