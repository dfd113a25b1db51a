//! # Interactions with fixed size integers
use std::ops::{Add, Div, Mul, Sub};

use num::{BigInt, One};

use super::Big;
use crate::error::Error;

/// Build a rational number as "`self` divided by `divisor`".
pub trait DivBy<Rhs = Self> {
    /// # Errors
    ///
    /// `Error::ZeroDenominator` if `divisor` is zero.
    fn div_by(self, divisor: Rhs) -> Result<Big, Error>;
}

impl DivBy for BigInt {
    fn div_by(self, divisor: BigInt) -> Result<Big, Error> {
        Big::new(self, divisor)
    }
}

impl DivBy for &BigInt {
    fn div_by(self, divisor: Self) -> Result<Big, Error> {
        Big::new(self.clone(), divisor.clone())
    }
}

impl From<BigInt> for Big {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&BigInt> for Big {
    fn from(value: &BigInt) -> Self {
        Self::from_integer(value.clone())
    }
}

impl PartialEq<BigInt> for Big {
    fn eq(&self, other: &BigInt) -> bool {
        self.denominator.is_one() && &self.numerator == other
    }
}

macro_rules! define_interactions {
    ($t:ident) => {
        mod $t {
            use super::*;

            mod creation {
                use super::*;

                impl From<$t> for Big {
                    fn from(value: $t) -> Self {
                        Self::from_integer(value.into())
                    }
                }

                impl From<&$t> for Big {
                    fn from(value: &$t) -> Self {
                        Self::from(*value)
                    }
                }

                impl DivBy for $t {
                    fn div_by(self, divisor: $t) -> Result<Big, Error> {
                        Big::new(self.into(), divisor.into())
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$t> for Big {
                    fn eq(&self, other: &$t) -> bool {
                        self.denominator.is_one() && self.numerator == BigInt::from(*other)
                    }
                }
            }

            mod field {
                use super::*;

                impl Add<&$t> for &Big {
                    type Output = Big;

                    fn add(self, rhs: &$t) -> Self::Output {
                        let numerator = &self.numerator + &self.denominator * BigInt::from(*rhs);
                        Big::from_unreduced(numerator, self.denominator.clone())
                    }
                }

                impl Add<&$t> for Big {
                    type Output = Big;

                    fn add(self, rhs: &$t) -> Self::Output {
                        Add::add(&self, rhs)
                    }
                }

                impl Sub<&$t> for &Big {
                    type Output = Big;

                    fn sub(self, rhs: &$t) -> Self::Output {
                        let numerator = &self.numerator - &self.denominator * BigInt::from(*rhs);
                        Big::from_unreduced(numerator, self.denominator.clone())
                    }
                }

                impl Sub<&$t> for Big {
                    type Output = Big;

                    fn sub(self, rhs: &$t) -> Self::Output {
                        Sub::sub(&self, rhs)
                    }
                }

                impl Mul<&$t> for &Big {
                    type Output = Big;

                    fn mul(self, rhs: &$t) -> Self::Output {
                        let numerator = &self.numerator * BigInt::from(*rhs);
                        Big::from_unreduced(numerator, self.denominator.clone())
                    }
                }

                impl Mul<&$t> for Big {
                    type Output = Big;

                    fn mul(self, rhs: &$t) -> Self::Output {
                        Mul::mul(&self, rhs)
                    }
                }

                impl Div<&$t> for &Big {
                    type Output = Big;

                    /// Panics when `rhs` is zero.
                    fn div(self, rhs: &$t) -> Self::Output {
                        let denominator = &self.denominator * BigInt::from(*rhs);
                        match Big::new(self.numerator.clone(), denominator) {
                            Ok(quotient) => quotient,
                            Err(error) => panic!("attempt to divide {} by zero: {}", self, error),
                        }
                    }
                }

                impl Div<&$t> for Big {
                    type Output = Big;

                    fn div(self, rhs: &$t) -> Self::Output {
                        Div::div(&self, rhs)
                    }
                }
            }
        }
    };
}

define_interactions!(i32);
define_interactions!(i64);
define_interactions!(isize);
define_interactions!(u32);
define_interactions!(u64);
define_interactions!(usize);
