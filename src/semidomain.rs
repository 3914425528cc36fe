//! Truncated semidomains [`Semidomain`].

use crate::prelude::*;

/// The number of powers computed when no other cap is given.
pub const DEFAULT_MAX_POWER: u32 = 20;

/// A truncated [semidomain](https://en.wikipedia.org/wiki/Semiring) ℕ₀\[r\], i.e. the powers r⁰,
/// r¹, r², … of a base r that don't exceed a ceiling.
///
/// The truncation stops at the first power exceeding the ceiling, or after a fixed number of powers,
/// whichever comes first. Later powers are never computed.
///
/// ## Invariants
///
/// The elements are stored in strictly increasing order, and none of them exceeds the ceiling.
#[derive(Clone, Debug, Default, PartialEq, IntoIterator)]
pub struct Semidomain(#[into_iterator(owned, ref)] SmallVec<f64>);

impl Semidomain {
    /// Generates ℕ₀\[r\] truncated at `max_value`, computing at most `max_power` powers.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `r` or `max_value` isn't a positive finite number, or if
    /// `max_power` is zero.
    pub fn generate(r: f64, max_value: f64, max_power: u32) -> Result<Self> {
        Self::generate_observed(r, max_value, max_power, &Silent)
    }

    /// Like [`Semidomain::generate`], reporting the truncation to an [`Observer`].
    ///
    /// ## Errors
    ///
    /// See [`Semidomain::generate`].
    pub fn generate_observed<O: Observer + ?Sized>(
        r: f64,
        max_value: f64,
        max_power: u32,
        observer: &O,
    ) -> Result<Self> {
        if !(r.is_finite() && r > 0.0) {
            return Err(Error::config(format!("base {r} must be positive")));
        }
        if !(max_value.is_finite() && max_value > 0.0) {
            return Err(Error::config(format!("ceiling {max_value} must be positive")));
        }
        if max_power == 0 {
            return Err(Error::config("at least one power must be computed"));
        }

        let mut elements: SmallVec<f64> = smallvec![];
        for k in 0..max_power {
            // `powf` rather than `powi`, which rounds differently for large exponents.
            let element = r.powf(f64::from(k));
            if element > max_value {
                observer.exceeded(r, k, element);
                break;
            }
            elements.push(element);
        }

        // Every element is finite, so the total order agrees with the usual one.
        elements.sort_unstable_by(f64::total_cmp);
        elements.dedup();
        observer.generated(r, elements.len());

        Ok(Self(elements))
    }

    /// The elements in increasing order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over the elements in increasing order.
    pub fn iter(&self) -> std::slice::Iter<f64> {
        self.0.iter()
    }

    /// The number of distinct powers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no elements. This never happens for a generated semidomain, since
    /// r⁰ = 1 is always included when the ceiling is at least 1.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The largest element.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// All sums a + b of two (not necessarily distinct) elements.
    #[must_use]
    pub fn sums(&self) -> SumSet {
        let mut sums = Vec::with_capacity(self.len() * (self.len() + 1) / 2);
        for (i, a) in self.iter().enumerate() {
            // a + b = b + a, so we only need half of the pairs.
            for b in &self.0[i..] {
                sums.push(a + b);
            }
        }

        SumSet::new(sums)
    }
}
