//! The key contract shared by every monomial representation.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use num_traits::{CheckedAdd, CheckedSub, One, Zero};
use phasor_core::{Error, Result, Symbol, SymbolSet};
use smallvec::SmallVec;
use tracing::trace;

/// Requirements on the exponent type of a [`PlainMonomial`](crate::PlainMonomial).
///
/// Blanket-implemented; `u32`, `i64` and `Integer` all qualify. Arithmetic
/// on exponents is checked so that fixed-width types report overflow
/// instead of panicking or wrapping.
pub trait Exponent:
    Clone + Eq + Hash + Debug + Display + Zero + One + CheckedAdd + CheckedSub + Send + Sync
{
}

impl<T> Exponent for T where
    T: Clone + Eq + Hash + Debug + Display + Zero + One + CheckedAdd + CheckedSub + Send + Sync
{
}

/// One key produced by [`MonomialKey::multiply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyProduct<K> {
    /// The resulting key, already in canonical form.
    pub key: K,
    /// True if canonicalization negated the key's exponent vector.
    pub sign_flipped: bool,
}

impl<K> KeyProduct<K> {
    /// A product whose exponents were not renormalized.
    pub fn unflipped(key: K) -> Self {
        Self {
            key,
            sign_flipped: false,
        }
    }
}

/// The keys produced by one multiplication: one for plain monomials, two
/// (sum and difference phase) for trigonometric ones.
pub type KeyProducts<K> = SmallVec<[KeyProduct<K>; 2]>;

/// A monomial-like key interpreted against an external [`SymbolSet`].
///
/// All operations are pure: they read `self` and the symbol set and return
/// new values. Only construction and [`merge_args`](Self::merge_args) can
/// fail, and only with [`Error::InvalidArgument`].
pub trait MonomialKey: Clone + Default + Eq + Hash + Debug {
    /// Factor produced by differentiating the key.
    type Multiplier: Zero + Clone + Debug;

    /// Creates the identity key over `symbols`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the key cannot span `symbols`.
    fn from_symbols(symbols: &SymbolSet) -> Result<Self>;

    /// Structural check that the key can be interpreted over `symbols`.
    fn is_compatible(&self, symbols: &SymbolSet) -> bool;

    /// True if a term with this key must be dropped whatever its coefficient.
    fn is_ignorable(&self, symbols: &SymbolSet) -> bool;

    /// True if the key is a multiplicative identity.
    fn is_unitary(&self, symbols: &SymbolSet) -> bool;

    /// Re-expresses the key over `new`, which must be `old` plus one symbol.
    ///
    /// The inserted position receives a zero exponent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `new` is not `old` with exactly
    /// one symbol inserted, or the key cannot span `new`.
    fn merge_args(&self, old: &SymbolSet, new: &SymbolSet) -> Result<Self>;

    /// Multiplies two keys over the same symbols.
    fn multiply(&self, other: &Self, symbols: &SymbolSet) -> KeyProducts<Self>;

    /// Differentiates with respect to `symbol`.
    ///
    /// Returns the multiplier and the derivative key. A zero multiplier means
    /// the key does not depend on `symbol` and the derivative key carries no
    /// information.
    fn partial(&self, symbol: &Symbol, symbols: &SymbolSet) -> (Self::Multiplier, Self);

    /// Writes a human-readable rendering of the key.
    ///
    /// # Errors
    ///
    /// Propagates errors from the writer.
    fn print<W: fmt::Write>(&self, out: &mut W, symbols: &SymbolSet) -> fmt::Result;

    /// Writes a LaTeX rendering of the key.
    ///
    /// # Errors
    ///
    /// Propagates errors from the writer.
    fn print_tex<W: fmt::Write>(&self, out: &mut W, symbols: &SymbolSet) -> fmt::Result;

    /// Adapts the key for use with `{}` formatting.
    fn display<'a>(&'a self, symbols: &'a SymbolSet) -> KeyDisplay<'a, Self> {
        KeyDisplay {
            key: self,
            symbols,
            tex: false,
        }
    }

    /// Adapts the key for use with `{}` formatting, as LaTeX.
    fn display_tex<'a>(&'a self, symbols: &'a SymbolSet) -> KeyDisplay<'a, Self> {
        KeyDisplay {
            key: self,
            symbols,
            tex: true,
        }
    }
}

/// `Display` adaptor returned by [`MonomialKey::display`].
pub struct KeyDisplay<'a, K> {
    key: &'a K,
    symbols: &'a SymbolSet,
    tex: bool,
}

impl<K: MonomialKey> Display for KeyDisplay<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tex {
            self.key.print_tex(f, self.symbols)
        } else {
            self.key.print(f, self.symbols)
        }
    }
}

/// Conversion of a key of type `K` into `Self` over the same symbols.
///
/// Lets a higher layer combine series whose key types differ by converting
/// one side. Whether two key types are convertible is decided at compile
/// time by the presence of this impl.
pub trait KeyFrom<K>: MonomialKey {
    /// Converts `key`, interpreted over `symbols`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if an exponent does not fit the target
    /// type, or [`Error::InvalidArgument`] if the result cannot span `symbols`.
    fn from_key(key: &K, symbols: &SymbolSet) -> Result<Self>;
}

/// Validates a one-symbol enlargement and returns the inserted position.
pub(crate) fn insertion_point(old: &SymbolSet, new: &SymbolSet) -> Result<usize> {
    old.insertion_point(new).ok_or_else(|| {
        trace!(old = old.len(), new = new.len(), "rejected argument merge");
        Error::invalid_argument(format!(
            "cannot merge arguments: {new} is not {old} with exactly one symbol inserted"
        ))
    })
}
