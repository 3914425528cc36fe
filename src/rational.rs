//! Candidate rationals [`Rational`].

use crate::prelude::*;

/// A positive rational p&frasl;q, as a numerator and a denominator.
///
/// Rationals are **not** reduced into lowest terms. The search visits 1&frasl;2 and 2&frasl;4 as
/// separate candidates, and both are reported if they qualify. Use [`Rational::reduced`] or
/// [`Rational::same_value`] to compare by value.
///
/// ## Invariants
///
/// Both the numerator and the denominator are nonzero.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize)]
#[display(fmt = "{}/{}", numer, denom)]
pub struct Rational {
    /// The numerator p.
    numer: u64,
    /// The denominator q.
    denom: u64,
}

impl Rational {
    /// Initializes the rational p&frasl;q.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidConfig`] if either `numer` or `denom` is zero.
    pub fn new(numer: u64, denom: u64) -> Result<Self> {
        if numer == 0 || denom == 0 {
            return Err(Error::config(format!(
                "rational {numer}/{denom} must have a positive numerator and denominator"
            )));
        }

        Ok(Self { numer, denom })
    }

    /// Initializes p&frasl;q without checking for zeros. Used by the grid, which never produces
    /// them.
    pub(crate) const fn new_unchecked(numer: u64, denom: u64) -> Self {
        debug_assert!(numer != 0 && denom != 0);
        Self { numer, denom }
    }

    /// The numerator.
    #[must_use]
    pub const fn numer(self) -> u64 {
        self.numer
    }

    /// The denominator.
    #[must_use]
    pub const fn denom(self) -> u64 {
        self.denom
    }

    /// The approximate value as a float. This is what gets raised to powers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// The same rational in lowest terms.
    #[must_use]
    pub fn reduced(self) -> Self {
        let g = gcd::binary_u64(self.numer, self.denom);
        Self {
            numer: self.numer / g,
            denom: self.denom / g,
        }
    }

    /// Whether two rationals denote the same value, e.g. 1&frasl;2 and 2&frasl;4.
    #[must_use]
    pub fn same_value(self, other: Self) -> bool {
        u128::from(self.numer) * u128::from(other.denom)
            == u128::from(other.numer) * u128::from(self.denom)
    }
}

/// Rationals are parsed as `p/q`, or as a bare integer `p` standing for `p/1`. Surrounding
/// whitespace is ignored.
impl FromStr for Rational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u64>()
                .map_err(|err| Error::Parse(format!("{s:?}: {err}")))
        };

        let (numer, denom) = match s.split_once('/') {
            Some((numer, denom)) => (parse(numer)?, parse(denom)?),
            None => (parse(s)?, 1),
        };

        Self::new(numer, denom).map_err(|_| Error::Parse(format!("{s:?}: zero component")))
    }
}
