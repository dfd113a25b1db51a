//! # Errors
use thiserror::Error;

/// Reasons for which a rational number can't be created.
///
/// Both variants are invalid arguments: either a zero denominator was given, or text that should
/// have contained an integer didn't.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// A denominator equal to zero, either given directly or through a division by zero.
    #[error("the denominator of a rational number can't be zero")]
    ZeroDenominator,
    /// The integer part of a textual representation could not be read.
    #[error("expected numeric values, got {text:?}")]
    NotAnInteger {
        text: String,
    },
}

impl Error {
    /// Every error of this crate is caused by an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::ZeroDenominator | Error::NotAnInteger { .. } => true,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Error;

    #[test]
    fn messages() {
        assert_eq!(
            Error::ZeroDenominator.to_string(),
            "the denominator of a rational number can't be zero",
        );
        let error = Error::NotAnInteger { text: "a/2".to_string() };
        assert_eq!(error.to_string(), "expected numeric values, got \"a/2\"");
        assert!(error.is_invalid_argument());
    }
}
