//! Enumerates rational bases and collects those satisfying the Goldbach analogue.
//!
//! Candidates p&frasl;q come from a bounded grid, which is walked denominator by denominator, and
//! each candidate is [checked](check_with) on its own. Nothing is shared between candidates, so the
//! grid can also be checked in parallel. Results always come back in grid order.

use crate::prelude::*;
use rayon::prelude::*;
use std::collections::HashSet;

// -------------------- Configuration -------------------- //

/// The numerators paired with each denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Numerators {
    /// Numerators `1..=q` for the denominator q. Every candidate lies in (0, 1].
    #[default]
    UpToDenominator,

    /// Numerators `1..=n` for a fixed n, regardless of the denominator. This reaches bases larger
    /// than 1.
    UpTo(u64),
}

impl Numerators {
    /// The number of numerators paired with the denominator `denom`.
    #[must_use]
    pub const fn count(self, denom: u64) -> u64 {
        match self {
            Self::UpToDenominator => denom,
            Self::UpTo(n) => n,
        }
    }
}

/// Bounds and switches for a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The largest even integer that must be covered. Also the ceiling for the semidomain.
    pub max_value: u64,
    /// The largest denominator in the grid.
    pub max_denominator: u64,
    /// The smallest denominator in the grid.
    pub min_denominator: u64,
    /// The most powers computed for any base.
    pub max_power: u32,
    /// The numerators paired with each denominator.
    pub numerators: Numerators,
    /// Whether to drop rationals with the same value as an earlier one, e.g. 2&frasl;4 after
    /// 1&frasl;2.
    pub dedup: bool,
    /// Whether to check candidates in parallel.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_value: 1000,
            max_denominator: 10,
            min_denominator: 1,
            max_power: DEFAULT_MAX_POWER,
            numerators: Numerators::UpToDenominator,
            dedup: false,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// A configuration with the given bounds, and everything else set to default.
    #[must_use]
    pub fn new(max_value: u64, max_denominator: u64, min_denominator: u64) -> Self {
        Self {
            max_value,
            max_denominator,
            min_denominator,
            ..Self::default()
        }
    }

    /// Sets the cap on computed powers.
    #[must_use]
    pub const fn max_power(mut self, max_power: u32) -> Self {
        self.max_power = max_power;
        self
    }

    /// Pairs every denominator with the numerators `1..=max_numerator`.
    #[must_use]
    pub const fn widen(mut self, max_numerator: u64) -> Self {
        self.numerators = Numerators::UpTo(max_numerator);
        self
    }

    /// Sets whether equal rationals are reported once.
    #[must_use]
    pub const fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Sets whether candidates are checked in parallel.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Verifies every bound is positive.
    ///
    /// A minimum denominator larger than the maximum is allowed, and yields an empty grid.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending bound.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("max_value", self.max_value),
            ("max_denominator", self.max_denominator),
            ("min_denominator", self.min_denominator),
            ("max_power", u64::from(self.max_power)),
            ("max_numerator", self.numerators.count(1)),
        ];

        match positive.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(Error::config(format!("{name} must be positive"))),
            None => Ok(()),
        }
    }
}

// -------------------- Grid -------------------- //

/// The candidates p&frasl;q of a search, in order: denominators ascending, then numerators
/// ascending for each denominator.
///
/// Equal values with distinct representations, like 1&frasl;2 and 2&frasl;4, are all visited.
#[derive(Clone, Debug)]
pub struct Grid {
    /// The current denominator.
    denom: u64,
    /// The next numerator for the current denominator.
    numer: u64,
    /// The last denominator.
    max_denom: u64,
    /// The numerators paired with each denominator.
    numerators: Numerators,
}

impl Grid {
    /// The grid for a configuration.
    ///
    /// ## Errors
    ///
    /// Fails if the configuration doesn't [validate](SearchConfig::validate).
    pub fn new(config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            denom: config.min_denominator,
            numer: 1,
            max_denom: config.max_denominator,
            numerators: config.numerators,
        })
    }

    /// The number of candidates in the rows for denominators `from..=to`.
    fn rows(&self, from: u64, to: u64) -> u128 {
        /// The triangular number 1 + 2 + … + n.
        fn tri(n: u64) -> u128 {
            let n = u128::from(n);
            // Halve whichever factor is even first, so n = u64::MAX doesn't overflow.
            if n % 2 == 0 {
                (n / 2) * (n + 1)
            } else {
                n * ((n + 1) / 2)
            }
        }

        if from > to {
            return 0;
        }

        match self.numerators {
            Numerators::UpToDenominator => tri(to) - tri(from - 1),
            Numerators::UpTo(n) => u128::from(to - from + 1) * u128::from(n),
        }
    }

    /// The number of candidates not yet returned.
    #[must_use]
    pub fn remaining(&self) -> u128 {
        if self.denom > self.max_denom {
            return 0;
        }

        let row = self.numerators.count(self.denom) - (self.numer - 1);
        let rest = self
            .denom
            .checked_add(1)
            .map_or(0, |next| self.rows(next, self.max_denom));
        u128::from(row).saturating_add(rest)
    }

    /// Moves on to the next row. The grid is emptied if the denominator can't grow.
    fn next_row(&mut self) {
        if let Some(denom) = self.denom.checked_add(1) {
            self.denom = denom;
            self.numer = 1;
        } else {
            self.max_denom = 0;
        }
    }

    /// Skips ahead to the candidate p&frasl;q.
    #[cfg(test)]
    pub(crate) fn at(mut self, numer: u64, denom: u64) -> Self {
        self.numer = numer;
        self.denom = denom;
        self
    }
}

impl Iterator for Grid {
    type Item = Rational;

    fn next(&mut self) -> Option<Rational> {
        while self.denom <= self.max_denom {
            if self.numer <= self.numerators.count(self.denom) {
                let rational = Rational::new_unchecked(self.numer, self.denom);
                match self.numer.checked_add(1) {
                    Some(numer) => self.numer = numer,
                    // The largest possible numerator ends its row.
                    None => self.next_row(),
                }
                return Some(rational);
            }

            self.next_row();
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// The length is exact whenever it fits in a `usize`, and saturates otherwise.
impl ExactSizeIterator for Grid {
    fn len(&self) -> usize {
        usize::try_from(self.remaining()).unwrap_or(usize::MAX)
    }
}

// -------------------- Search -------------------- //

/// Statistics for a finished search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// The number of candidates checked.
    pub checked: u64,
    /// The number of candidates satisfying the analogue, before deduplication.
    pub passed: u64,
    /// Wall-clock duration of the search.
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

/// Serializes a duration as fractional seconds.
fn serialize_secs<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// The outcome of a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Search {
    /// The rationals satisfying the analogue, in grid order.
    pub rationals: Vec<Rational>,
    /// Statistics for the run.
    pub stats: Stats,
}

/// Finds the rationals p&frasl;q with `min_denominator ≤ q ≤ max_denominator` and `1 ≤ p ≤ q`
/// such that every even integer in `[4, max_value]` is a sum of two powers of p&frasl;q.
///
/// Since p ≤ q, every power is at most 1, every sum at most 2, and the result is always empty
/// unless `max_value < 4`. Use [`search_with`] and [`SearchConfig::widen`] to look past 1.
///
/// ## Errors
///
/// Returns [`Error::InvalidConfig`] if any bound is zero.
pub fn search(
    max_value: u64,
    max_denominator: u64,
    min_denominator: u64,
) -> Result<Vec<Rational>> {
    search_with(
        &SearchConfig::new(max_value, max_denominator, min_denominator),
        &Silent,
    )
    .map(|search| search.rationals)
}

/// Runs a search with the given configuration, reporting to an [`Observer`].
///
/// ## Errors
///
/// Returns [`Error::InvalidConfig`] if the configuration doesn't validate. Nothing is returned for
/// a failed search, not even partial results.
pub fn search_with<O: Observer + Sync + ?Sized>(
    config: &SearchConfig,
    observer: &O,
) -> Result<Search> {
    let start = Instant::now();
    let grid = Grid::new(config)?;
    let verify = |rational: Rational| {
        check_with(rational.value(), config.max_value, config.max_power, observer)
            .map(|passed| (rational, passed))
    };

    let mut search = Search::default();
    let mut record = |rational: Rational, passed: bool| {
        observer.candidate(rational, rational.value(), passed);
        search.stats.checked += 1;
        if passed {
            search.stats.passed += 1;
            search.rationals.push(rational);
        }
    };

    if config.parallel {
        // Indexed parallel iterators collect in their original order.
        let candidates: Vec<_> = grid.collect();
        let verdicts = candidates
            .into_par_iter()
            .map(verify)
            .collect::<Result<Vec<_>>>()?;
        for (rational, passed) in verdicts {
            record(rational, passed);
        }
    } else {
        for rational in grid {
            let (rational, passed) = verify(rational)?;
            record(rational, passed);
        }
    }

    if config.dedup {
        search.rationals = dedup(search.rationals);
    }
    search.stats.elapsed = start.elapsed();
    observer.summary(&search.stats);

    Ok(search)
}

/// Keeps the first rational of each value, in order.
fn dedup(rationals: Vec<Rational>) -> Vec<Rational> {
    let mut seen = HashSet::new();
    rationals
        .into_iter()
        .filter(|rational| seen.insert(rational.reduced()))
        .collect()
}
