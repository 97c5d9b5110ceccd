//! # Text representation
//!
//! The canonical form is `N` for integers and `N/D` otherwise. Reading accepts whitespace around
//! both integers and at most one `/`.
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Num, One};

use crate::error::{ParseError, RationalError};
use crate::rational::Rational;

impl Rational {
    /// Read text in the given radix.
    ///
    /// # Arguments
    ///
    /// * `text`: Either an integer or two integers separated by a single `/`.
    /// * `radix`: Base of both integers, between 2 and 36.
    ///
    /// # Errors
    ///
    /// `RationalError::Format` when the text has more than one separator or when one of the
    /// integers can't be read, and `RationalError::InvalidArgument` when the denominator is zero.
    pub fn parse_radix(text: &str, radix: u32) -> Result<Self, RationalError> {
        let mut parts = text.split('/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next();
        if parts.next().is_some() {
            return Err(ParseError::invalid(text).into());
        }

        let numerator = parse_integer(numerator, radix, "numerator")?;
        match denominator {
            None => Ok(Self::from_integer(numerator)),
            Some(denominator) => {
                let denominator = parse_integer(denominator, radix, "denominator")?;
                Self::new(numerator, denominator)
            },
        }
    }
}

fn parse_integer(text: &str, radix: u32, part: &str) -> Result<BigInt, ParseError> {
    let trimmed = text.trim();
    BigInt::from_str_radix(trimmed, radix)
        .map_err(|error| ParseError::with_source(
            format!("failed to parse {} \"{}\" as an integer", part, trimmed),
            error,
        ))
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(text, 10)
    }
}

impl TryFrom<&str> for Rational {
    type Error = RationalError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl Num for Rational {
    type FromStrRadixErr = RationalError;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Self::parse_radix(text, radix)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
