//! Property-based tests for coefficient capabilities and conversions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{ConvertTo, Halvable, Integer, Rational, Ring, SafeCast};

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-1000i64..1000, 1i64..100).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn halve_doubles_back(q in small_rational()) {
            let half = q.halve();
            prop_assert_eq!(half.clone() + half, q);
        }

        #[test]
        fn negate_matches_neg(q in small_rational()) {
            let mut negated = q.clone();
            negated.negate();
            prop_assert_eq!(negated, -q);
        }

        #[test]
        fn integer_i64_cast_round_trips(n in any::<i64>()) {
            let big: Integer = n.safe_cast().unwrap();
            let back: i64 = big.safe_cast().unwrap();
            prop_assert_eq!(back, n);
        }

        #[test]
        fn narrowing_cast_agrees_with_try_from(n in any::<i64>()) {
            let cast: Result<i32, _> = n.safe_cast();
            prop_assert_eq!(cast.is_ok(), i32::try_from(n).is_ok());
        }

        #[test]
        fn rational_to_integer_only_when_integral(q in small_rational()) {
            let cast: Result<Integer, _> = q.safe_cast();
            prop_assert_eq!(cast.is_ok(), q.is_integer());
        }

        #[test]
        fn integer_converts_to_equal_rational(n in any::<i64>()) {
            let q: Rational = Integer::new(n).convert_to();
            prop_assert_eq!(q, Rational::from(n));
        }
    }
}
