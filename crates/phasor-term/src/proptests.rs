//! Property-based tests for term algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use phasor_core::{Symbol, SymbolSet};
    use phasor_integers::Rational;
    use phasor_keys::TrigMonomial;

    use crate::{multiply_all, ParallelConfig, Term, TermMultiply};

    fn xyz() -> SymbolSet {
        ["x", "y", "z"].into_iter().collect()
    }

    fn trig_key() -> impl Strategy<Value = TrigMonomial> {
        (proptest::collection::vec(-6i64..=6, 3), any::<bool>()).prop_map(|(p, f)| {
            let mut k = TrigMonomial::new(p, f);
            k.canonicalize();
            k
        })
    }

    fn float_term() -> impl Strategy<Value = Term<f64, TrigMonomial>> {
        (-10.0f64..10.0, trig_key()).prop_map(|(cf, key)| Term::new(cf, key))
    }

    fn rational_term() -> impl Strategy<Value = Term<Rational, TrigMonomial>> {
        (-50i64..=50, 1i64..=6, trig_key())
            .prop_map(|(n, d, key)| Term::new(Rational::from_i64(n, d), key))
    }

    fn point() -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-3.0f64..3.0, 3)
    }

    fn eval(term: &Term<f64, TrigMonomial>, at: &[f64]) -> f64 {
        term.cf() * term.key().evaluate(at)
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(q: &Rational) -> f64 {
        let n = q.numerator().to_i64().unwrap();
        let d = q.denominator().to_i64().unwrap();
        n as f64 / d as f64
    }

    fn eval_exact(term: &Term<Rational, TrigMonomial>, at: &[f64]) -> f64 {
        to_f64(term.cf()) * term.key().evaluate(at)
    }

    proptest! {
        #[test]
        fn product_to_sum_preserves_value(a in float_term(), b in float_term(), at in point()) {
            let symbols = xyz();
            let expected = eval(&a, &at) * eval(&b, &at);
            let actual: f64 = a.multiply(&b, &symbols).iter().map(|t| eval(t, &at)).sum();
            prop_assert!((expected - actual).abs() < 1e-9, "{expected} != {actual}");
        }

        #[test]
        fn products_are_canonical(a in rational_term(), b in rational_term()) {
            let symbols = xyz();
            let products = a.multiply(&b, &symbols);
            prop_assert_eq!(products.len(), 2);
            let flavour = a.key().flavour() == b.key().flavour();
            for t in &products {
                prop_assert!(t.key().is_canonical());
                prop_assert_eq!(t.key().flavour(), flavour);
                prop_assert!(t.is_compatible(&symbols));
            }
        }

        #[test]
        fn multiplication_commutes_in_value(a in float_term(), b in float_term(), at in point()) {
            let symbols = xyz();
            let ab: f64 = a.multiply(&b, &symbols).iter().map(|t| eval(t, &at)).sum();
            let ba: f64 = b.multiply(&a, &symbols).iter().map(|t| eval(t, &at)).sum();
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn partial_matches_finite_difference(t in rational_term(), at in point(), var in 0usize..3) {
            let symbols = xyz();
            let symbol = Symbol::new(["x", "y", "z"][var]);
            let derivative: f64 = t.partial(&symbol, &symbols).iter().map(|d| eval_exact(d, &at)).sum();

            let h = 1e-6;
            let mut hi = at.clone();
            let mut lo = at.clone();
            hi[var] += h;
            lo[var] -= h;
            let estimate = (eval_exact(&t, &hi) - eval_exact(&t, &lo)) / (2.0 * h);
            prop_assert!((derivative - estimate).abs() < 1e-4, "{derivative} vs {estimate}");
        }

        #[test]
        fn parallel_and_sequential_agree(
            lhs in proptest::collection::vec(rational_term(), 0..12),
            rhs in proptest::collection::vec(rational_term(), 0..12)
        ) {
            let symbols = xyz();
            let parallel = ParallelConfig { parallel_threshold: 0, min_rows_per_task: 2 };
            prop_assert_eq!(
                multiply_all(&lhs, &rhs, &symbols, &ParallelConfig::sequential()),
                multiply_all(&lhs, &rhs, &symbols, &parallel)
            );
        }
    }
}
