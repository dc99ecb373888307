//! # phasor-integers
//!
//! Arbitrary precision integer and rational values for phasor.
//!
//! Both types wrap `dashu` and are consumed by the rest of the workspace as
//! opaque ring elements: `+ - * /`, comparison, negation and zero-testing.
//! They double as exponent types for monomial keys and as exact
//! coefficients for trigonometric terms.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
