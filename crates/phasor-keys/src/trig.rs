//! Trigonometric monomials `cos(n·x)` and `sin(n·x)`.
//!
//! The phase `Σ nᵢxᵢ` is stored as a small inline vector of integer
//! multipliers, one per symbol, next to a flavour bit (`true` = cosine).
//! Each multiplier must lie in `[-PHASE_BOUND, PHASE_BOUND]`; products that
//! leave that range are flagged ignorable rather than wrapped.
//!
//! Keys are kept in canonical form: the first nonzero multiplier is
//! positive. `cos` is even, so negating its phase is free; `sin` is odd, so
//! the caller must negate the coefficient when canonicalization flips a
//! sine (see [`KeyProduct::sign_flipped`]).

use std::fmt;

use phasor_core::{Error, Result, Symbol, SymbolSet};
use phasor_rings::ConvertTo;
use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::key::{self, KeyProduct, KeyProducts, MonomialKey};

/// Largest magnitude a phase multiplier may take.
pub const PHASE_BOUND: i64 = i32::MAX as i64;

type Phase = SmallVec<[i64; 4]>;

/// `cos` or `sin` of an integer linear combination of symbols.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TrigMonomial {
    phase: Phase,
    flavour: bool,
}

impl TrigMonomial {
    /// Creates a key from phase multipliers and a flavour (`true` = cosine).
    ///
    /// The phase is stored as given; call [`canonicalize`](Self::canonicalize)
    /// to normalize its sign.
    pub fn new(phase: impl IntoIterator<Item = i64>, flavour: bool) -> Self {
        Self {
            phase: phase.into_iter().collect(),
            flavour,
        }
    }

    /// Creates `cos(Σ nᵢxᵢ)`.
    pub fn cos(phase: impl IntoIterator<Item = i64>) -> Self {
        Self::new(phase, true)
    }

    /// Creates `sin(Σ nᵢxᵢ)`.
    pub fn sin(phase: impl IntoIterator<Item = i64>) -> Self {
        Self::new(phase, false)
    }

    /// Returns the phase multipliers.
    #[must_use]
    pub fn phase(&self) -> &[i64] {
        &self.phase
    }

    /// Replaces the phase multipliers.
    pub fn set_phase(&mut self, phase: impl IntoIterator<Item = i64>) {
        self.phase = phase.into_iter().collect();
    }

    /// Returns true for cosine, false for sine.
    #[must_use]
    pub fn flavour(&self) -> bool {
        self.flavour
    }

    /// Sets the flavour (`true` = cosine).
    pub fn set_flavour(&mut self, flavour: bool) {
        self.flavour = flavour;
    }

    /// Returns true if the phase is identically zero.
    #[must_use]
    pub fn is_zero_phase(&self) -> bool {
        self.phase.iter().all(|&n| n == 0)
    }

    /// Returns true if every multiplier is within [`PHASE_BOUND`].
    #[must_use]
    pub fn in_range(&self) -> bool {
        self.phase.iter().all(|n| n.abs() <= PHASE_BOUND)
    }

    /// Returns true if the first nonzero multiplier is positive.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.phase.iter().find(|&&n| n != 0).map_or(true, |&n| n > 0)
    }

    /// Negates the phase if needed to make it canonical.
    ///
    /// Returns true if the phase was negated.
    pub fn canonicalize(&mut self) -> bool {
        if self.is_canonical() {
            return false;
        }
        for n in &mut self.phase {
            *n = n.saturating_neg();
        }
        true
    }

    /// Evaluates the sinusoid with `values[i]` substituted for the i-th symbol.
    ///
    /// Missing values are taken as zero.
    #[must_use]
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        let angle: f64 = self
            .phase
            .iter()
            .zip(values)
            .map(|(n, v)| ConvertTo::<f64>::convert_to(n) * v)
            .sum();
        if self.flavour {
            angle.cos()
        } else {
            angle.sin()
        }
    }

    /// Builds one product key from a combined phase, canonicalized.
    fn product(phase: Phase, flavour: bool) -> KeyProduct<Self> {
        let mut key = Self { phase, flavour };
        let sign_flipped = key.canonicalize();
        KeyProduct { key, sign_flipped }
    }

    fn write_phase(&self, out: &mut impl fmt::Write, symbols: &SymbolSet, tex: bool) -> fmt::Result {
        let mut first = true;
        for (&n, symbol) in self.phase.iter().zip(symbols) {
            if n == 0 {
                continue;
            }
            if n > 0 && !first {
                out.write_char('+')?;
            }
            match n {
                1 => {}
                -1 => out.write_char('-')?,
                _ if tex => write!(out, "{n}")?,
                _ => write!(out, "{n}*")?,
            }
            if tex {
                write!(out, "{{{symbol}}}")?;
            } else {
                write!(out, "{symbol}")?;
            }
            first = false;
        }
        if first {
            out.write_char('0')?;
        }
        Ok(())
    }
}

impl Default for TrigMonomial {
    fn default() -> Self {
        Self {
            phase: Phase::new(),
            flavour: true,
        }
    }
}

impl MonomialKey for TrigMonomial {
    type Multiplier = i64;

    fn from_symbols(symbols: &SymbolSet) -> Result<Self> {
        Ok(Self::cos(std::iter::repeat(0).take(symbols.len())))
    }

    fn is_compatible(&self, symbols: &SymbolSet) -> bool {
        self.phase.len() == symbols.len()
    }

    fn is_ignorable(&self, _symbols: &SymbolSet) -> bool {
        // sin(0) vanishes; out-of-range multipliers mean an overflowed product.
        !self.in_range() || (!self.flavour && self.is_zero_phase())
    }

    fn is_unitary(&self, _symbols: &SymbolSet) -> bool {
        self.flavour && self.is_zero_phase()
    }

    fn merge_args(&self, old: &SymbolSet, new: &SymbolSet) -> Result<Self> {
        let pos = key::insertion_point(old, new)?;
        if !self.is_compatible(old) {
            trace!(phase = self.phase.len(), old = old.len(), "rejected trig merge");
            return Err(Error::invalid_argument(format!(
                "phase of length {} cannot be merged from {old}",
                self.phase.len()
            )));
        }
        let mut phase = self.phase.clone();
        phase.insert(pos, 0);
        Ok(Self {
            phase,
            flavour: self.flavour,
        })
    }

    fn multiply(&self, other: &Self, _symbols: &SymbolSet) -> KeyProducts<Self> {
        // cos·cos and sin·sin give cosines, mixed pairs give sines.
        let flavour = self.flavour == other.flavour;
        let pairs = || self.phase.iter().zip(&other.phase);
        let plus = pairs().map(|(a, b)| a.saturating_add(*b)).collect();
        let minus = pairs().map(|(a, b)| a.saturating_sub(*b)).collect();

        smallvec![Self::product(plus, flavour), Self::product(minus, flavour)]
    }

    fn partial(&self, symbol: &Symbol, symbols: &SymbolSet) -> (i64, Self) {
        let n = symbols
            .index_of(symbol)
            .and_then(|i| self.phase.get(i))
            .copied()
            .unwrap_or(0);
        // d/dx cos(nx) = -n sin(nx), d/dx sin(nx) = n cos(nx)
        let multiplier = if self.flavour { n.saturating_neg() } else { n };
        let derivative = Self {
            phase: self.phase.clone(),
            flavour: !self.flavour,
        };
        (multiplier, derivative)
    }

    fn print<W: fmt::Write>(&self, out: &mut W, symbols: &SymbolSet) -> fmt::Result {
        if self.is_unitary(symbols) {
            return Ok(());
        }
        out.write_str(if self.flavour { "cos(" } else { "sin(" })?;
        self.write_phase(out, symbols, false)?;
        out.write_char(')')
    }

    fn print_tex<W: fmt::Write>(&self, out: &mut W, symbols: &SymbolSet) -> fmt::Result {
        if self.is_unitary(symbols) {
            return Ok(());
        }
        out.write_str(if self.flavour { "\\cos{\\left(" } else { "\\sin{\\left(" })?;
        self.write_phase(out, symbols, true)?;
        out.write_str("\\right)}")
    }
}
