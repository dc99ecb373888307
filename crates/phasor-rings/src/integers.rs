//! The ring of integers Z.
//!
//! `Integer` is a ring but not `Halvable`: halving an odd integer is not
//! exact, so integer coefficients are confined to plain monomial terms.

use num_traits::{One, Zero};
use phasor_integers::Integer;

use crate::traits::{Differentiable, Ring};

impl Ring for Integer {
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn one() -> Self {
        <Self as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }
}

impl Differentiable for Integer {
    fn partial(&self, _symbol: &str) -> Self {
        <Self as Zero>::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert!(Ring::is_zero(&<Integer as Ring>::zero()));
        assert!(Ring::is_one(&<Integer as Ring>::one()));
        assert!(!Ring::is_zero(&Integer::new(-2)));
    }

    #[test]
    fn test_constant_partial() {
        assert!(Ring::is_zero(&Integer::new(42).partial("x")));
    }
}
