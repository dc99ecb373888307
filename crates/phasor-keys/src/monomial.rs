//! Univariate monomials `x^e`.
//!
//! A plain monomial carries a single exponent and may span at most one
//! symbol. Over the empty symbol set only the zero exponent is meaningful.
//!
//! Exponent arithmetic is checked. A product or derivative whose exponent
//! does not fit `E` yields an overflowed key, which reports itself as
//! ignorable so the term holding it is dropped.

use std::fmt;

use num_traits::{One, Zero};
use phasor_core::{Error, Result, Symbol, SymbolSet};
use phasor_rings::SafeCast;
use smallvec::smallvec;
use tracing::trace;

use crate::key::{self, Exponent, KeyFrom, KeyProduct, KeyProducts, MonomialKey};

/// A monomial in at most one symbol.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PlainMonomial<E> {
    exponent: E,
    overflowed: bool,
}

impl<E: Exponent> PlainMonomial<E> {
    /// Creates the monomial with the given exponent.
    #[must_use]
    pub fn new(exponent: E) -> Self {
        Self {
            exponent,
            overflowed: false,
        }
    }

    /// The key left behind by an exponent computation that did not fit `E`.
    fn overflow() -> Self {
        Self {
            exponent: E::zero(),
            overflowed: true,
        }
    }

    /// Creates a monomial from a list of exponents.
    ///
    /// An empty list gives the identity monomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if more than one exponent is given.
    pub fn from_exponents(exponents: &[E]) -> Result<Self> {
        match exponents {
            [] => Ok(Self::default()),
            [e] => Ok(Self::new(e.clone())),
            _ => {
                trace!(size = exponents.len(), "plain monomial from too many exponents");
                Err(Error::invalid_argument(format!(
                    "a plain monomial holds one exponent, got {}",
                    exponents.len()
                )))
            }
        }
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> &E {
        &self.exponent
    }

    /// Replaces the exponent, clearing any overflow.
    pub fn set_exponent(&mut self, exponent: E) {
        self.exponent = exponent;
        self.overflowed = false;
    }

    /// Returns true if an exponent computation overflowed `E`.
    #[must_use]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Returns the total degree, which is the exponent itself.
    #[must_use]
    pub fn degree(&self) -> E {
        self.exponent.clone()
    }

    fn check_span(symbols: &SymbolSet) -> Result<()> {
        if symbols.len() > 1 {
            trace!(size = symbols.len(), "plain monomial over too many symbols");
            return Err(Error::invalid_argument(format!(
                "a plain monomial spans at most one symbol, got {symbols}"
            )));
        }
        Ok(())
    }

    /// The symbol this monomial raises to a power, if it is live.
    fn live_symbol<'a>(&self, symbols: &'a SymbolSet) -> Option<&'a Symbol> {
        symbols.get(0).filter(|_| !self.exponent.is_zero())
    }
}

impl<E: Exponent> Default for PlainMonomial<E> {
    fn default() -> Self {
        Self::new(E::zero())
    }
}

impl<E: Exponent> MonomialKey for PlainMonomial<E> {
    type Multiplier = E;

    fn from_symbols(symbols: &SymbolSet) -> Result<Self> {
        Self::check_span(symbols)?;
        Ok(Self::default())
    }

    fn is_compatible(&self, symbols: &SymbolSet) -> bool {
        match symbols.len() {
            0 => self.exponent.is_zero(),
            1 => true,
            _ => false,
        }
    }

    fn is_ignorable(&self, _symbols: &SymbolSet) -> bool {
        self.overflowed
    }

    fn is_unitary(&self, _symbols: &SymbolSet) -> bool {
        !self.overflowed && self.exponent.is_zero()
    }

    fn merge_args(&self, old: &SymbolSet, new: &SymbolSet) -> Result<Self> {
        key::insertion_point(old, new)?;
        Self::check_span(new)?;
        // `old` was empty, so the only exponent is the one of the new symbol.
        Ok(Self::default())
    }

    fn multiply(&self, other: &Self, _symbols: &SymbolSet) -> KeyProducts<Self> {
        let sum = self
            .exponent
            .checked_add(&other.exponent)
            .filter(|_| !self.overflowed && !other.overflowed);
        let key = sum.map_or_else(
            || {
                trace!(lhs = %self.exponent, rhs = %other.exponent, "exponent overflow in product");
                Self::overflow()
            },
            Self::new,
        );
        smallvec![KeyProduct::unflipped(key)]
    }

    fn partial(&self, symbol: &Symbol, symbols: &SymbolSet) -> (E, Self) {
        match symbols.index_of(symbol) {
            Some(0) if !self.overflowed && !self.exponent.is_zero() => {
                let key = self
                    .exponent
                    .checked_sub(&E::one())
                    .map_or_else(Self::overflow, Self::new);
                (self.exponent.clone(), key)
            }
            _ => (E::zero(), self.clone()),
        }
    }

    fn print<W: fmt::Write>(&self, out: &mut W, symbols: &SymbolSet) -> fmt::Result {
        let Some(symbol) = self.live_symbol(symbols) else {
            return Ok(());
        };
        if self.exponent.is_one() {
            write!(out, "{symbol}")
        } else {
            write!(out, "{symbol}**{}", self.exponent)
        }
    }

    fn print_tex<W: fmt::Write>(&self, out: &mut W, symbols: &SymbolSet) -> fmt::Result {
        let Some(symbol) = self.live_symbol(symbols) else {
            return Ok(());
        };
        if self.exponent.is_one() {
            write!(out, "{{{symbol}}}")
        } else {
            write!(out, "{{{symbol}}}^{{{}}}", self.exponent)
        }
    }
}

impl<E1, E2> KeyFrom<PlainMonomial<E1>> for PlainMonomial<E2>
where
    E1: Exponent + SafeCast<E2>,
    E2: Exponent,
{
    fn from_key(key: &PlainMonomial<E1>, symbols: &SymbolSet) -> Result<Self> {
        Self::check_span(symbols)?;
        if key.overflowed {
            return Ok(Self::overflow());
        }
        let converted = Self::new(key.exponent.safe_cast()?);
        if !converted.is_compatible(symbols) {
            trace!(size = symbols.len(), "converted monomial not compatible");
            return Err(Error::invalid_argument(format!(
                "monomial with exponent {} is not compatible with {symbols}",
                converted.exponent
            )));
        }
        Ok(converted)
    }
}
