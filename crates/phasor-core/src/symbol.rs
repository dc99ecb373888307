//! Symbols and ordered symbol sets.
//!
//! A [`SymbolSet`] is the coordinate system shared by every key in a
//! series: the `i`-th exponent of a key belongs to the `i`-th symbol of the
//! set. Sets are kept sorted by name and free of duplicates, which makes the
//! position of a symbol a pure function of the set's contents.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::{Error, Result};

/// A named symbol.
///
/// Cloning is cheap: the name is reference counted.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.name())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

/// An ordered, duplicate-free set of symbols.
///
/// Never mutated in place once keys refer to it: [`SymbolSet::with_symbol`]
/// returns a new set.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
}

impl SymbolSet {
    /// Creates the empty symbol set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the set has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at position `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Symbol> {
        self.symbols.get(i)
    }

    /// Returns the position of `symbol`, if present.
    #[must_use]
    pub fn index_of(&self, symbol: &Symbol) -> Option<usize> {
        self.symbols.binary_search(symbol).ok()
    }

    /// Returns true if `symbol` is in the set.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Returns an iterator over the symbols in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Returns the symbols as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns a new set with `symbol` inserted at its ordered position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the symbol is already present.
    pub fn with_symbol(&self, symbol: impl Into<Symbol>) -> Result<Self> {
        let symbol = symbol.into();
        match self.symbols.binary_search(&symbol) {
            Ok(_) => {
                trace!(symbol = symbol.name(), "rejected duplicate symbol");
                Err(Error::invalid_argument(format!(
                    "symbol '{symbol}' already present in {self}"
                )))
            }
            Err(pos) => {
                let mut symbols = Vec::with_capacity(self.len() + 1);
                symbols.extend_from_slice(&self.symbols[..pos]);
                symbols.push(symbol);
                symbols.extend_from_slice(&self.symbols[pos..]);
                Ok(Self { symbols })
            }
        }
    }

    /// Returns the position at which `enlarged` holds its one extra symbol.
    ///
    /// `enlarged` must equal `self` with exactly one symbol inserted;
    /// otherwise (including equal sets or more than one new symbol) `None`.
    #[must_use]
    pub fn insertion_point(&self, enlarged: &SymbolSet) -> Option<usize> {
        if enlarged.len() != self.len() + 1 {
            return None;
        }

        let pos = self
            .symbols
            .iter()
            .zip(&enlarged.symbols)
            .position(|(a, b)| a != b)
            .unwrap_or(self.len());

        (self.symbols[pos..] == enlarged.symbols[pos + 1..]).then_some(pos)
    }
}

impl<S: Into<Symbol>> FromIterator<S> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut symbols: Vec<Symbol> = iter.into_iter().map(Into::into).collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.symbols.iter()).finish()
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{symbol}'")?;
        }
        f.write_str("]")
    }
}
