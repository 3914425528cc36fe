//! # Rational Goldbach analogues
//!
//! For a positive real r, we write ℕ₀\[r\] for the powers r⁰, r¹, r², … We say it satisfies the
//! Goldbach analogue when every sufficiently large even integer is the sum of two of these powers.
//!
//! This crate looks for rational r with this property, empirically:
//!
//! - [`Semidomain`] truncates ℕ₀\[r\] to the powers below a ceiling.
//! - [`check`] verifies that every even integer from 4 up to the ceiling is a sum of two of them.
//! - [`search`] runs the check over a bounded grid of rationals p&frasl;q.
//!
//! A positive result is evidence, not a proof. Powers are computed in floating point, so sums near
//! the ceiling are subject to rounding.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod coverage;
pub mod error;
pub mod observer;
pub mod prelude;
pub mod rational;
pub mod search;
pub mod semidomain;

use prelude::*;

/// Small vector, sized to fit a semidomain with the default number of powers.
type SmallVec<T> = smallvec::SmallVec<[T; DEFAULT_MAX_POWER as usize]>;

/// [`smallvec::smallvec`] coerced into [`SmallVec`].
#[macro_export]
macro_rules! smallvec {
    ($elem: expr; $n: expr) => (
        SmallVec::from_elem($elem, $n)
    );
    ($($x: expr), *$(,)*) => ({
        let vec: SmallVec<_> = smallvec::smallvec![$($x,)*];
        vec
    });
}
