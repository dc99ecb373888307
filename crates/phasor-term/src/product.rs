//! Term multiplication.
//!
//! Plain monomial terms multiply to a single term. Trigonometric terms use
//! the product-to-sum identities
//!
//! ```text
//! cos a · cos b = ½ [cos(a+b) + cos(a-b)]
//! sin a · sin b = ½ [-cos(a+b) + cos(a-b)]
//! sin a · cos b = ½ [sin(a+b) + sin(a-b)]
//! cos a · sin b = ½ [sin(a+b) - sin(a-b)]
//! ```
//!
//! and so always yield two terms: the sum phase first, the difference
//! phase second.

use phasor_core::SymbolSet;
use phasor_keys::{Exponent, MonomialKey, PlainMonomial, TrigMonomial};
use phasor_rings::{Halvable, Ring};
use smallvec::SmallVec;

use crate::term::Term;

/// Terms produced by one multiplication or differentiation.
pub type TermProducts<T> = SmallVec<[T; 2]>;

/// Multiplication of two terms over a shared symbol set.
pub trait TermMultiply: Sized {
    /// Multiplies `self` by `other`. Neither operand is modified.
    fn multiply(&self, other: &Self, symbols: &SymbolSet) -> TermProducts<Self>;
}

/// Whether to negate the (sum, difference) outputs, indexed by the two
/// input flavours as `[f1][f2]` with sine = 0 and cosine = 1.
const PRODUCT_TO_SUM_SIGNS: [[(bool, bool); 2]; 2] = [
    // sin·sin, sin·cos
    [(true, false), (false, false)],
    // cos·sin, cos·cos
    [(false, true), (false, false)],
];

/// Returns whether the sum and difference terms of a trigonometric product
/// are negated, given the flavours of the factors (`true` = cosine).
#[must_use]
pub fn product_to_sum_signs(f1: bool, f2: bool) -> (bool, bool) {
    PRODUCT_TO_SUM_SIGNS[usize::from(f1)][usize::from(f2)]
}

impl<Cf, E> TermMultiply for Term<Cf, PlainMonomial<E>>
where
    Cf: Ring,
    E: Exponent,
{
    fn multiply(&self, other: &Self, symbols: &SymbolSet) -> TermProducts<Self> {
        let cf = self.cf().clone() * other.cf().clone();
        self.key()
            .multiply(other.key(), symbols)
            .into_iter()
            .map(|product| Term::new(cf.clone(), product.key))
            .collect()
    }
}

impl<Cf: Halvable> TermMultiply for Term<Cf, TrigMonomial> {
    fn multiply(&self, other: &Self, symbols: &SymbolSet) -> TermProducts<Self> {
        let base = (self.cf().clone() * other.cf().clone()).halve();
        let (negate_sum, negate_diff) =
            product_to_sum_signs(self.key().flavour(), other.key().flavour());

        self.key()
            .multiply(other.key(), symbols)
            .into_iter()
            .zip([negate_sum, negate_diff])
            .map(|(product, negate)| {
                let mut cf = base.clone();
                if negate {
                    cf.negate();
                }
                // sin is odd: renormalizing the phase sign flips the value.
                if product.sign_flipped && !product.key.flavour() {
                    cf.negate();
                }
                Term::new(cf, product.key)
            })
            .collect()
    }
}
