//! # phasor-core
//!
//! Shared infrastructure for phasor keys and terms.
//!
//! This crate provides:
//! - [`Symbol`] and [`SymbolSet`]: the ordered coordinate system against
//!   which every key's exponents are interpreted
//! - [`Error`]: the error type for structural size mismatches
//! - [`hardware_concurrency`]: the thread-count hint used to size parallel work
//!
//! ## Design Principles
//!
//! - **Immutable coordinates**: a `SymbolSet` is never mutated in place;
//!   growth produces a new set, so keys can hold borrowed views safely
//! - **One symbol at a time**: argument growth is always by exactly one
//!   inserted symbol, validated by [`SymbolSet::insertion_point`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod runtime;
pub mod symbol;

pub use error::{Error, Result};
pub use runtime::hardware_concurrency;
pub use symbol::{Symbol, SymbolSet};
