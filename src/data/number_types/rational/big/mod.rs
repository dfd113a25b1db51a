//! # Arbitrary precision rationals
//!
//! Numerator and denominator are both `BigInt`s, so no operation can overflow.
use log::{debug, trace};
use num::{BigInt, BigRational, Integer, One, Signed, ToPrimitive, Zero};

use crate::data::number_types::rational::Rational;
use crate::error::Error;

mod cmp;
mod ops;
mod parse;
pub mod with_primitive;

/// A fraction of two arbitrary size integers.
///
/// Every instance is normalized: the denominator is positive, numerator and denominator are
/// coprime and zero is represented as `0/1`. Because of that, two values are equal exactly when
/// their fields are.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct Big {
    numerator: BigInt,
    denominator: BigInt,
}

impl Big {
    /// Create a new value from a numerator and a denominator, which don't need to be normalized.
    ///
    /// # Errors
    ///
    /// `Error::ZeroDenominator` if the denominator is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, Error> {
        if denominator.is_zero() {
            debug!("rejecting {}/0", numerator);
            return Err(Error::ZeroDenominator);
        }

        Ok(Self::from_unreduced(numerator, denominator))
    }

    /// Create a value with denominator `1`.
    pub fn from_integer(numerator: BigInt) -> Self {
        Self {
            numerator,
            denominator: BigInt::one(),
        }
    }

    /// Normalize a pair of which the caller knows that the denominator is not zero.
    ///
    /// Used by the arithmetic operators, of which the results have products of positive
    /// denominators as their denominator.
    pub(crate) fn from_unreduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let (numerator, denominator) = normalize(numerator, denominator);
        Self { numerator, denominator }
    }

    /// Normalize again.
    ///
    /// All values are normalized on creation, so this returns an identical copy.
    pub fn normalized(&self) -> Self {
        Self::from_unreduced(self.numerator.clone(), self.denominator.clone())
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    ///
    /// `Error::ZeroDenominator` if this value is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Floating point approximation of this value.
    ///
    /// The whole ratio is converted, so `3/2` becomes `1.5`. Use `to_integer` for the truncated
    /// quotient.
    pub fn approximate(&self) -> f64 {
        let ratio = BigRational::new_raw(self.numerator.clone(), self.denominator.clone());
        ratio.to_f64().unwrap_or(f64::NAN)
    }

    /// Quotient of numerator and denominator, rounded towards zero.
    pub fn to_integer(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// `-1`, `0` or `1`, depending on the sign of this value.
    pub fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }
}

/// Reduce to lowest terms and move the sign to the numerator.
///
/// Dividing by the gcd and multiplying with the sign of the denominator happens in one step, which
/// leaves the denominator positive.
fn normalize(numerator: BigInt, denominator: BigInt) -> (BigInt, BigInt) {
    let mut gcd = numerator.gcd(&denominator);
    if gcd.is_zero() {
        gcd = BigInt::one();
    }
    let sign = denominator.signum();

    if gcd.is_one() && sign.is_one() {
        return (numerator, denominator);
    }

    trace!("normalizing {}/{}", numerator, denominator);
    (numerator / &gcd * &sign, denominator / gcd * sign)
}

impl Rational for Big {
    type Numerator = BigInt;
    type Denominator = BigInt;

    fn numerator(&self) -> &Self::Numerator {
        &self.numerator
    }

    fn denominator(&self) -> &Self::Denominator {
        &self.denominator
    }
}

impl Zero for Big {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Big {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Big {
    fn default() -> Self {
        Self::zero()
    }
}
