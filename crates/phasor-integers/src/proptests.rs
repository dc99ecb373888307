//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn integer_sub_inverts_add(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!((&a + &b) - b, a);
        }

        #[test]
        fn integer_matches_i64(a in small_int(), b in small_int()) {
            prop_assert_eq!((Integer::new(a) * Integer::new(b)).to_i64(), Some(a * b));
        }

        #[test]
        fn rational_half_doubles_back(a in small_rational()) {
            let half = a.half();
            prop_assert_eq!(&half + &half, a);
        }

        #[test]
        fn rational_neg_is_additive_inverse(a in small_rational()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }
    }
}
