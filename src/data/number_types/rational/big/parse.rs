//! # Text representation
//!
//! An optional `-`, digits and optionally a `/` followed by more digits, such as `"-1/2"`.
use std::fmt;
use std::str::FromStr;

use log::debug;
use num::{BigInt, One};

use super::Big;
use crate::error::Error;

impl FromStr for Big {
    type Err = Error;

    /// Read a value like `"13/122"` or `"2"`.
    ///
    /// The numerator is the text before the first `/`, the denominator the text between the first
    /// and the second `/`. When the denominator text is empty or not an integer, it defaults to
    /// `1`.
    ///
    /// # Errors
    ///
    /// `Error::NotAnInteger` when the numerator is not an integer and `Error::ZeroDenominator` when
    /// the denominator is zero.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.split_once('/') {
            None => parse_integer(text).map(Self::from_integer),
            Some((numerator, denominator)) => {
                let numerator = parse_integer(numerator)?;
                let denominator = denominator
                    .split('/')
                    .next()
                    .and_then(|denominator| denominator.parse().ok())
                    .unwrap_or_else(BigInt::one);

                Self::new(numerator, denominator)
            }
        }
    }
}

fn parse_integer(text: &str) -> Result<BigInt, Error> {
    text.parse().map_err(|_| {
        debug!("not an integer: {:?}", text);
        Error::NotAnInteger { text: text.to_string() }
    })
}

impl fmt::Display for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
