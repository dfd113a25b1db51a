//! # Literals
//!
//! Shorthand for rational values of which the numerator and denominator fit in an `i64`.

/// Create a `RationalBig` from an integer, or from a numerator and a denominator.
///
/// Panics when the denominator is zero, so this is meant for literal values.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::RationalBig::from(i64::from($value))
    };
    ($numerator:expr, $denominator:expr) => {
        <i64 as $crate::DivBy>::div_by($numerator, $denominator)
            .expect("literal with a zero denominator")
    };
}

#[cfg(test)]
mod test {
    use num::BigInt;

    use crate::{Rational, RB};

    #[test]
    fn integer() {
        let value = RB!(-3);
        assert_eq!(value.numerator(), &BigInt::from(-3));
        assert_eq!(value.denominator(), &BigInt::from(1));
    }

    #[test]
    fn fraction() {
        assert_eq!(RB!(6, -4).to_string(), "-3/2");
    }

    #[test]
    #[should_panic]
    fn zero_denominator() {
        RB!(1, 0);
    }
}
