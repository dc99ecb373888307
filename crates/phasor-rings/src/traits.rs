//! Algebraic structure traits.
//!
//! These are the only operations a term ever asks of its coefficient.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Only `PartialEq` is required so that floating point coefficients can
/// take part; exact rings additionally implement `Eq`.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Negates in place.
    fn negate(&mut self) {
        let value = std::mem::replace(self, Self::zero());
        *self = -value;
    }
}

/// A ring in which 2 is invertible.
///
/// Product-to-sum identities carry a factor of one half, so trigonometric
/// terms only accept coefficients implementing this trait.
pub trait Halvable: Ring {
    /// Returns `self / 2`.
    #[must_use]
    fn halve(&self) -> Self;
}

/// Partial differentiation of a coefficient.
///
/// Numeric coefficients are constants and differentiate to zero; symbolic
/// coefficients (e.g. polynomials) differentiate with respect to the named
/// symbol.
pub trait Differentiable {
    /// Returns the partial derivative with respect to `symbol`.
    #[must_use]
    fn partial(&self, symbol: &str) -> Self;
}
