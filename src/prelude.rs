//! Crate prelude.

// The actual prelude.
pub use crate::{
    coverage::{check, check_with, first_uncovered, SumSet, EVEN_START},
    error::{Error, Result},
    observer::{Observer, Silent, Tracing},
    rational::Rational,
    search::{search, search_with, Grid, Numerators, Search, SearchConfig, Stats},
    semidomain::{Semidomain, DEFAULT_MAX_POWER},
};

// Convenient imports within the crate.
pub(crate) use crate::{smallvec, SmallVec};
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::{Display, IntoIterator};
pub(crate) use serde::Serialize;
pub(crate) use std::{
    str::FromStr,
    time::{Duration, Instant},
};
