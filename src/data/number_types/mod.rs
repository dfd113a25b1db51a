//! # Number types
pub mod rational;
