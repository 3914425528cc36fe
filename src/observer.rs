//! Diagnostics for a running search.
//!
//! The algorithms don't log anything themselves. Instead they report to an [`Observer`] at a few
//! fixed points, and the observer decides what to do with it. Observers never influence results.

use crate::prelude::*;

/// Receives progress events from the generator, the checker, and the search driver.
///
/// Every method defaults to doing nothing. Events are delivered synchronously. In a parallel
/// search, generator and checker events arrive from worker threads in no particular order, while
/// candidate and summary events still arrive in enumeration order.
pub trait Observer {
    /// A power r^k exceeded the ceiling, ending the truncated semidomain.
    fn exceeded(&self, _r: f64, _power: u32, _value: f64) {}

    /// A truncated semidomain with `count` elements was built.
    fn generated(&self, _r: f64, _count: usize) {}

    /// The even integer `even` is not a sum of two powers of `r`.
    fn uncovered(&self, _r: f64, _even: u64) {}

    /// Every even integer up to `max_value` is a sum of two powers of `r`.
    fn covered(&self, _r: f64, _max_value: u64) {}

    /// A candidate from the grid was checked.
    fn candidate(&self, _rational: Rational, _value: f64, _passed: bool) {}

    /// The search finished.
    fn summary(&self, _stats: &Stats) {}
}

/// Ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {}

/// Forwards every event to [`tracing`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Tracing;

impl Observer for Tracing {
    fn exceeded(&self, r: f64, power: u32, value: f64) {
        tracing::debug!(r, power, value, "power exceeded ceiling");
    }

    fn generated(&self, r: f64, count: usize) {
        tracing::info!(r, count, "generated semidomain");
    }

    fn uncovered(&self, r: f64, even: u64) {
        tracing::warn!(r, even, "even number not covered");
    }

    fn covered(&self, r: f64, max_value: u64) {
        tracing::info!(r, max_value, "goldbach analogue holds");
    }

    fn candidate(&self, rational: Rational, value: f64, passed: bool) {
        tracing::info!(%rational, value, passed, "checked candidate");
    }

    fn summary(&self, stats: &Stats) {
        tracing::info!(
            checked = stats.checked,
            passed = stats.passed,
            secs = stats.elapsed.as_secs_f64(),
            "search complete"
        );
    }
}
