//! Verifies the Goldbach analogue for a base, up to a ceiling.
//!
//! An even integer e is covered by a base r when e = a + b for some a, b ∈ ℕ₀\[r\]. We check every
//! even integer from [`EVEN_START`] up to the ceiling, against the truncated semidomain with that
//! same ceiling.
//!
//! Membership is exact floating point equality between the integer and a sum. Near the ceiling, a
//! sum that's off by a rounding error won't count.

use crate::prelude::*;

/// The smallest even integer that has to be covered. Both 0 and 2 are excluded.
pub const EVEN_START: u64 = 4;

/// The set of all pairwise sums of a [`Semidomain`].
///
/// ## Invariants
///
/// The sums are stored in strictly increasing order.
#[derive(Clone, Debug, Default, PartialEq, IntoIterator)]
pub struct SumSet(#[into_iterator(owned, ref)] Vec<f64>);

impl SumSet {
    /// Sorts and deduplicates a list of sums.
    pub(crate) fn new(mut sums: Vec<f64>) -> Self {
        sums.sort_unstable_by(f64::total_cmp);
        sums.dedup();
        Self(sums)
    }

    /// The sums in increasing order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// The number of distinct sums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no sums.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether an integer is exactly one of the sums.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(&self, n: u64) -> bool {
        let n = n as f64;
        self.0.binary_search_by(|sum| sum.total_cmp(&n)).is_ok()
    }

    /// The largest even integer worth scanning for.
    ///
    /// The evens 4, 6, …, 4 + 2n are n + 1 numbers, so n sums can't cover all of them.
    fn scan_limit(&self) -> u64 {
        EVEN_START + 2 * self.0.len() as u64
    }

    /// Marks which of the integers `0..=max` are sums.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn integers(&self, max: usize) -> BitVec {
        let mut bits = bitvec![0; max + 1];
        for &sum in &self.0 {
            if sum.fract() == 0.0 && sum <= max as f64 {
                // Sums are nonnegative integers at most `max` here, so the cast is exact.
                bits.set(sum as usize, true);
            }
        }

        bits
    }
}

/// Whether every even integer in `[4, max_value]` is a sum of two powers of `r`, computing at most
/// [`DEFAULT_MAX_POWER`] powers.
///
/// A `false` result is the expected outcome for most bases, and says nothing about larger ceilings.
///
/// ## Errors
///
/// Returns [`Error::InvalidConfig`] if `r` isn't a positive finite number, or if `max_value` is
/// zero.
pub fn check(r: f64, max_value: u64) -> Result<bool> {
    check_with(r, max_value, DEFAULT_MAX_POWER, &Silent)
}

/// Like [`check`], with an explicit cap on the powers and an [`Observer`].
///
/// ## Errors
///
/// See [`check`]. Also fails if `max_power` is zero.
pub fn check_with<O: Observer + ?Sized>(
    r: f64,
    max_value: u64,
    max_power: u32,
    observer: &O,
) -> Result<bool> {
    first_uncovered(r, max_value, max_power, observer).map(|even| even.is_none())
}

/// Finds the smallest even integer in `[4, max_value]` that isn't a sum of two powers of `r`.
///
/// Returns `None` when all of them are covered, which includes the case `max_value < 4`.
///
/// ## Errors
///
/// See [`check_with`].
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn first_uncovered<O: Observer + ?Sized>(
    r: f64,
    max_value: u64,
    max_power: u32,
    observer: &O,
) -> Result<Option<u64>> {
    if max_value == 0 {
        return Err(Error::config("ceiling must be positive"));
    }

    let elements = Semidomain::generate_observed(r, max_value as f64, max_power, observer)?;
    let sums = elements.sums();

    // Bounded by the number of sums, whatever the ceiling.
    let limit = max_value.min(sums.scan_limit());
    let covered = sums.integers(limit as usize);

    // Some even up to the limit is always uncovered, so the scan never runs past it.
    let uncovered = (EVEN_START..=max_value)
        .step_by(2)
        .find(|&even| even > limit || !covered[even as usize]);

    match uncovered {
        Some(even) => observer.uncovered(r, even),
        None => observer.covered(r, max_value),
    }

    Ok(uncovered)
}
