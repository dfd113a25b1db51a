//! # Rational numbers
//!
//! Primary way to do exact computation with fractions.
pub use big::Big as RationalBig;
pub use big::with_primitive::DivBy;

mod big;
mod macros;

/// A fraction of two integers.
///
/// Implementors keep their values normalized: the denominator is positive and shares no factor
/// with the numerator. That is why only read access is offered.
pub trait Rational {
    type Numerator;
    type Denominator;

    fn numerator(&self) -> &Self::Numerator;
    fn denominator(&self) -> &Self::Denominator;
}
