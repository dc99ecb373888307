//! Property-based tests for key operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use phasor_core::{Symbol, SymbolSet};
    use phasor_integers::Integer;

    use crate::{MonomialKey, PlainMonomial, TrigMonomial};

    const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

    // A symbol set of 0-4 symbols drawn from NAMES, plus one name not in it.
    fn symbols_and_extra() -> impl Strategy<Value = (SymbolSet, Symbol)> {
        proptest::sample::subsequence(NAMES.to_vec(), 0..=4).prop_flat_map(|chosen| {
            let missing: Vec<&str> = NAMES.iter().copied().filter(|n| !chosen.contains(n)).collect();
            let set: SymbolSet = chosen.into_iter().collect();
            proptest::sample::select(missing).prop_map(move |extra| (set.clone(), Symbol::new(extra)))
        })
    }

    fn phase(len: usize) -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-20i64..=20, len)
    }

    fn trig_over(symbols: &SymbolSet) -> impl Strategy<Value = TrigMonomial> {
        (phase(symbols.len()), any::<bool>()).prop_map(|(p, f)| {
            let mut k = TrigMonomial::new(p, f);
            k.canonicalize();
            k
        })
    }

    proptest! {
        #[test]
        fn trig_merge_matches_direct_construction(
            (symbols, extra) in symbols_and_extra(),
            seed in phase(4),
            flavour in any::<bool>()
        ) {
            let key = TrigMonomial::new(seed.into_iter().take(symbols.len()), flavour);
            let enlarged = symbols.with_symbol(extra.clone()).unwrap();
            let merged = key.merge_args(&symbols, &enlarged).unwrap();

            prop_assert!(merged.is_compatible(&enlarged));
            let pos = enlarged.index_of(&extra).unwrap();
            let mut expected: Vec<i64> = key.phase().to_vec();
            expected.insert(pos, 0);
            prop_assert_eq!(merged, TrigMonomial::new(expected, flavour));
        }

        #[test]
        fn trig_identity_merge_is_identity((symbols, extra) in symbols_and_extra()) {
            let enlarged = symbols.with_symbol(extra).unwrap();
            let identity = TrigMonomial::from_symbols(&symbols).unwrap();
            prop_assert_eq!(
                identity.merge_args(&symbols, &enlarged).unwrap(),
                TrigMonomial::from_symbols(&enlarged).unwrap()
            );
        }

        #[test]
        fn trig_products_are_canonical(
            (a, b, symbols) in proptest::sample::subsequence(NAMES.to_vec(), 1..=4)
                .prop_flat_map(|names| {
                    let set: SymbolSet = names.into_iter().collect();
                    (trig_over(&set), trig_over(&set), Just(set))
                })
        ) {
            let products = a.multiply(&b, &symbols);
            prop_assert_eq!(products.len(), 2);
            for p in &products {
                prop_assert!(p.key.is_canonical());
                prop_assert!(p.key.is_compatible(&symbols));
                prop_assert_eq!(p.key.flavour(), a.flavour() == b.flavour());
            }
        }

        #[test]
        fn trig_partial_flips_flavour_only(
            (key, symbols) in proptest::sample::subsequence(NAMES.to_vec(), 1..=4)
                .prop_flat_map(|names| {
                    let set: SymbolSet = names.into_iter().collect();
                    (trig_over(&set), Just(set))
                })
        ) {
            for (i, symbol) in symbols.iter().enumerate() {
                let (mult, derivative) = key.partial(symbol, &symbols);
                prop_assert_eq!(derivative.phase(), key.phase());
                prop_assert_eq!(derivative.flavour(), !key.flavour());
                let n = key.phase()[i];
                prop_assert_eq!(mult, if key.flavour() { -n } else { n });
            }
        }

        #[test]
        fn plain_multiply_adds_exponents(a in 0u32..1000, b in 0u32..1000) {
            let x: SymbolSet = ["x"].into_iter().collect();
            let products = PlainMonomial::new(a).multiply(&PlainMonomial::new(b), &x);
            prop_assert_eq!(products.len(), 1);
            prop_assert_eq!(*products[0].key.exponent(), a + b);
        }

        #[test]
        fn plain_multiply_flags_overflow(a in any::<u32>(), b in any::<u32>()) {
            let x: SymbolSet = ["x"].into_iter().collect();
            let key = &PlainMonomial::new(a).multiply(&PlainMonomial::new(b), &x)[0].key;
            match a.checked_add(b) {
                Some(sum) => {
                    prop_assert!(!key.is_ignorable(&x));
                    prop_assert_eq!(*key.exponent(), sum);
                }
                None => prop_assert!(key.is_ignorable(&x)),
            }
        }

        #[test]
        fn plain_partial_lowers_degree(e in 1i64..1000) {
            let x: SymbolSet = ["x"].into_iter().collect();
            let key = PlainMonomial::new(Integer::new(e));
            let (mult, derivative) = key.partial(&Symbol::new("x"), &x);
            prop_assert_eq!(mult, Integer::new(e));
            prop_assert_eq!(derivative.exponent().clone(), Integer::new(e - 1));
        }
    }
}
