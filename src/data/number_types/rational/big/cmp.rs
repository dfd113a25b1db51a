//! # Ordering and equality with text
use std::cmp::Ordering;

use super::Big;

impl Ord for Big {
    /// Compare `n1 * d2` with `n2 * d1`.
    ///
    /// Both denominators are positive, so the cross multiplication keeps the order intact.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Big {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare with text by parsing it first. Text that isn't a rational number is never equal.
macro_rules! define_text_equality {
    ($t:ty) => {
        impl PartialEq<$t> for Big {
            fn eq(&self, other: &$t) -> bool {
                match other.parse::<Big>() {
                    Ok(other) => *self == other,
                    Err(_) => false,
                }
            }
        }

        impl PartialEq<Big> for $t {
            fn eq(&self, other: &Big) -> bool {
                other == self
            }
        }
    };
}

define_text_equality!(str);
define_text_equality!(&str);
define_text_equality!(String);

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::RB;

    mod order {
        use super::*;

        #[test]
        fn cmp() {
            assert!(RB!(1, 2) < RB!(2, 3));
            assert!(RB!(-1, 2) < RB!(-1, 3));
            assert!(RB!(7, 3) > RB!(2));
            assert_eq!(RB!(2, 4).cmp(&RB!(1, 2)), Ordering::Equal);
            assert_eq!(RB!(-5).cmp(&RB!(0)), Ordering::Less);
        }

        #[test]
        fn range() {
            assert!((RB!(1, 3)..=RB!(2, 3)).contains(&RB!(1, 2)));
            assert!((RB!(1, 3)..=RB!(2, 3)).contains(&RB!(2, 3)));
            assert!(!(RB!(1, 3)..=RB!(2, 3)).contains(&RB!(3, 4)));
        }

        #[test]
        fn sort() {
            let mut values = vec![RB!(1, 2), RB!(-3), RB!(1, 3), RB!(0)];
            values.sort();
            assert_eq!(values, vec![RB!(-3), RB!(0), RB!(1, 3), RB!(1, 2)]);
        }
    }

    mod text {
        use super::*;

        #[test]
        fn rational_with_text() {
            assert!(RB!(13, 122) == "117/1098");
            assert!(RB!(-1, 2) == *"1/-2");
            assert!(RB!(2) == "2".to_string());
            assert!(RB!(2) != "3");
            assert!(RB!(2) != "two");
        }

        #[test]
        fn text_with_rational() {
            assert!("117/1098" == RB!(13, 122));
            assert!(*"-2/4" == RB!(-1, 2));
            assert!("5".to_string() == RB!(5));
            assert!("1/0" != RB!(1));
        }
    }
}
