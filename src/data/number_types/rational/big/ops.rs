//! # Arithmetic
//!
//! Cross multiplication formulas that don't assume the operands share a denominator. The
//! constructor reduces the result, so the products used here can be larger than needed.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};

use super::Big;
use crate::error::Error;

impl Big {
    /// Divide, failing instead of panicking when `rhs` is zero.
    ///
    /// # Errors
    ///
    /// `Error::ZeroDenominator` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        Ok(self * &rhs.reciprocal()?)
    }
}

impl Neg for Big {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Big {
    type Output = Big;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Add<&Big> for &Big {
    type Output = Big;

    fn add(self, rhs: &Big) -> Self::Output {
        Big::from_unreduced(
            &rhs.denominator * &self.numerator + &self.denominator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub<&Big> for &Big {
    type Output = Big;

    fn sub(self, rhs: &Big) -> Self::Output {
        Big::from_unreduced(
            &rhs.denominator * &self.numerator - &self.denominator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul<&Big> for &Big {
    type Output = Big;

    fn mul(self, rhs: &Big) -> Self::Output {
        Big::from_unreduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Div<&Big> for &Big {
    type Output = Big;

    /// Panics when `rhs` is zero, see `checked_div` for the fallible version.
    fn div(self, rhs: &Big) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(error) => panic!("attempt to divide {} by zero: {}", self, error),
        }
    }
}

/// Forward the owned variants of a binary operator to the implementation on two references.
macro_rules! forward_binary {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<Big> for Big {
            type Output = Big;

            fn $method(self, rhs: Big) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Big> for Big {
            type Output = Big;

            fn $method(self, rhs: &Big) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<Big> for &Big {
            type Output = Big;

            fn $method(self, rhs: Big) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }

        impl $assign_trait<&Big> for Big {
            fn $assign_method(&mut self, rhs: &Big) {
                *self = $trait::$method(&*self, rhs);
            }
        }

        impl $assign_trait<Big> for Big {
            fn $assign_method(&mut self, rhs: Big) {
                *self = $trait::$method(&*self, &rhs);
            }
        }
    };
}

forward_binary!(Add, add, AddAssign, add_assign);
forward_binary!(Sub, sub, SubAssign, sub_assign);
forward_binary!(Mul, mul, MulAssign, mul_assign);
forward_binary!(Div, div, DivAssign, div_assign);

impl Sum for Big {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl<'a> Sum<&'a Big> for Big {
    fn sum<I: Iterator<Item = &'a Big>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl Product for Big {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |total, value| total * value)
    }
}

impl<'a> Product<&'a Big> for Big {
    fn product<I: Iterator<Item = &'a Big>>(iter: I) -> Self {
        iter.fold(Self::one(), |total, value| total * value)
    }
}

#[cfg(test)]
mod test {
    use num::{One, Zero};

    use crate::{Error, RationalBig, RB};

    mod field {
        use super::*;

        #[test]
        fn add() {
            assert_eq!(RB!(1, 2) + RB!(1, 3), RB!(5, 6));
            assert_eq!(&RB!(1, 6) + &RB!(1, 3), RB!(1, 2));
            assert_eq!(RB!(-1, 2) + RB!(1, 2), RationalBig::zero());
            assert_eq!(RB!(3, 4) + &RB!(1, 4), RB!(1));
        }

        #[test]
        fn sub() {
            assert_eq!(RB!(1, 2) - RB!(1, 3), RB!(1, 6));
            assert_eq!(RB!(1, 3) - RB!(1, 2), RB!(-1, 6));
            assert_eq!(&RB!(5) - RB!(5), RationalBig::zero());
        }

        #[test]
        fn mul() {
            assert_eq!(RB!(1, 2) * RB!(1, 3), RB!(1, 6));
            assert_eq!(RB!(-2, 3) * RB!(3, 4), RB!(-1, 2));
            assert_eq!(RB!(-2, 3) * RB!(0), RationalBig::zero());
        }

        #[test]
        fn div() {
            assert_eq!(RB!(1, 2) / RB!(1, 3), RB!(3, 2));
            assert_eq!(RB!(1, 2) / RB!(-1, 2), RB!(-1));
            assert_eq!(RB!(0) / RB!(7, 3), RationalBig::zero());
        }

        #[test]
        #[should_panic]
        fn div_by_zero() {
            let _ = RB!(1, 2) / RB!(0);
        }

        #[test]
        fn checked_div() {
            assert_eq!(RB!(1, 2).checked_div(&RB!(1, 4)), Ok(RB!(2)));
            assert_eq!(RB!(1, 2).checked_div(&RB!(0)), Err(Error::ZeroDenominator));
        }

        #[test]
        fn neg() {
            assert_eq!(-RB!(1, 2), RB!(-1, 2));
            assert_eq!(-&RB!(-1, 2), RB!(1, 2));
            assert_eq!(-RB!(0), RationalBig::zero());
        }

        #[test]
        fn operands_unchanged() {
            let a = RB!(1, 2);
            let b = RB!(1, 3);
            let _ = &a + &b;
            let _ = &a / &b;
            assert_eq!(a, RB!(1, 2));
            assert_eq!(b, RB!(1, 3));
        }
    }

    mod assign {
        use super::*;

        #[test]
        fn all() {
            let mut value = RB!(1, 2);
            value += RB!(1, 4);
            assert_eq!(value, RB!(3, 4));
            value -= &RB!(1);
            assert_eq!(value, RB!(-1, 4));
            value *= RB!(-2);
            assert_eq!(value, RB!(1, 2));
            value /= &RB!(1, 6);
            assert_eq!(value, RB!(3));
        }
    }

    mod iter {
        use super::*;

        #[test]
        fn sum() {
            let values = vec![RB!(1, 2), RB!(1, 3), RB!(1, 6)];
            assert_eq!(values.iter().sum::<RationalBig>(), RationalBig::one());
            assert_eq!(values.into_iter().sum::<RationalBig>(), RationalBig::one());
            assert_eq!(Vec::<RationalBig>::new().into_iter().sum::<RationalBig>(), RationalBig::zero());
        }

        #[test]
        fn product() {
            let values = vec![RB!(2, 3), RB!(3, 4), RB!(-4, 5)];
            assert_eq!(values.iter().product::<RationalBig>(), RB!(-2, 5));
            assert_eq!(values.into_iter().product::<RationalBig>(), RB!(-2, 5));
        }
    }
}
