//! # Rationals
//!
//! Fractions of arbitrary size integers that are always kept in lowest terms, with a positive
//! denominator.
pub use data::number_types::rational::{DivBy, Rational, RationalBig};
pub use error::Error;

pub mod data;
mod error;
