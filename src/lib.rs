//! # Exact rational numbers
//!
//! A `Rational` is a fraction of two arbitrary size integers, kept in lowest terms with a positive
//! denominator. Arithmetic is exact: the only operations that lose information are the explicit
//! rounding operations and the conversions to primitive numbers.
//!
//! ```
//! use exact_rational::{Rational, RoundMode};
//!
//! let value: Rational = "-7/3".parse().unwrap();
//! assert_eq!(value.to_integer(RoundMode::Floor), (-3).into());
//! assert_eq!(value.modulo(&Rational::from(2)).unwrap().to_string(), "5/3");
//! ```
#![warn(missing_docs)]

pub mod error;
pub mod rational;

pub use error::{ParseError, RationalError, RationalResult};
pub use rational::{Rational, RoundMode};
