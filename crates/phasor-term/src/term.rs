//! The term type: coefficient × key.

use std::fmt;

use num_traits::Zero;
use phasor_core::{Result, Symbol, SymbolSet};
use phasor_keys::{KeyFrom, MonomialKey};
use phasor_rings::{ConvertTo, Differentiable, Ring};

use crate::product::TermProducts;

/// A coefficient multiplying a monomial key.
///
/// A term owns both parts by value; terms never share state. Equality and
/// hashing are structural over `(coefficient, key)`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Term<Cf, K> {
    cf: Cf,
    key: K,
}

impl<Cf, K> Term<Cf, K> {
    /// Creates a term.
    pub fn new(cf: Cf, key: K) -> Self {
        Self { cf, key }
    }

    /// Returns the coefficient.
    pub fn cf(&self) -> &Cf {
        &self.cf
    }

    /// Returns the key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Splits the term into coefficient and key.
    pub fn into_parts(self) -> (Cf, K) {
        (self.cf, self.key)
    }
}

impl<Cf: Ring, K: MonomialKey> Term<Cf, K> {
    /// True if the key can be interpreted over `symbols`.
    pub fn is_compatible(&self, symbols: &SymbolSet) -> bool {
        self.key.is_compatible(symbols)
    }

    /// True if the term is zero and should not be stored.
    pub fn is_ignorable(&self, symbols: &SymbolSet) -> bool {
        self.cf.is_zero() || self.key.is_ignorable(symbols)
    }

    /// Partial derivative with respect to `symbol`.
    ///
    /// Yields up to two terms, in this order: the coefficient's derivative
    /// times the key, then the coefficient times the key's derivative. Terms
    /// whose factor is zero are omitted, so a term independent of `symbol`
    /// differentiates to nothing.
    ///
    /// The key's multiplier is brought into the coefficient ring with
    /// [`ConvertTo`], so `f64` coefficients work alongside the exact rings.
    pub fn partial(&self, symbol: &Symbol, symbols: &SymbolSet) -> TermProducts<Self>
    where
        Cf: Differentiable,
        K::Multiplier: ConvertTo<Cf>,
    {
        let mut out = TermProducts::new();

        let cf_partial = self.cf.partial(symbol.name());
        if !cf_partial.is_zero() {
            out.push(Self::new(cf_partial, self.key.clone()));
        }

        let (multiplier, key_partial) = self.key.partial(symbol, symbols);
        if !Zero::is_zero(&multiplier) {
            out.push(Self::new(self.cf.clone() * multiplier.convert_to(), key_partial));
        }

        out
    }

    /// Converts the key to another key type over the same symbols.
    ///
    /// # Errors
    ///
    /// Propagates the key conversion's error.
    pub fn convert_key<K2: KeyFrom<K>>(self, symbols: &SymbolSet) -> Result<Term<Cf, K2>> {
        let key = K2::from_key(&self.key, symbols)?;
        Ok(Term::new(self.cf, key))
    }

    /// Adapts the term for use with `{}` formatting.
    pub fn display<'a>(&'a self, symbols: &'a SymbolSet) -> TermDisplay<'a, Cf, K> {
        TermDisplay { term: self, symbols }
    }
}

/// `Display` adaptor returned by [`Term::display`].
pub struct TermDisplay<'a, Cf, K> {
    term: &'a Term<Cf, K>,
    symbols: &'a SymbolSet,
}

impl<Cf: Ring + fmt::Display, K: MonomialKey> fmt::Display for TermDisplay<'_, Cf, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Term { cf, key } = self.term;
        if key.is_unitary(self.symbols) {
            return write!(f, "{cf}");
        }
        if !cf.is_one() {
            write!(f, "{cf}*")?;
        }
        key.print(f, self.symbols)
    }
}
