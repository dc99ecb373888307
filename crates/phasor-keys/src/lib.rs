//! # phasor-keys
//!
//! Keys are the monomial-like half of a term: the part that says *which*
//! power or which sinusoid a coefficient multiplies.
//!
//! This crate provides:
//! - [`MonomialKey`]: the uniform contract every key satisfies
//! - [`PlainMonomial`]: a single exponent over at most one symbol
//! - [`TrigMonomial`]: `cos` or `sin` of an integer linear phase `Σ nᵢxᵢ`
//! - [`KeyFrom`]: conversion between key types over the same symbols
//!
//! Keys never own their [`SymbolSet`](phasor_core::SymbolSet); every
//! operation receives it from the caller and only reads it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod key;
pub mod monomial;
pub mod trig;

#[cfg(test)]
mod proptests;

pub use key::{Exponent, KeyDisplay, KeyFrom, KeyProduct, KeyProducts, MonomialKey};
pub use monomial::PlainMonomial;
pub use trig::{TrigMonomial, PHASE_BOUND};
