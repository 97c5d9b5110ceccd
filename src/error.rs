//! # Error reporting for rational arithmetic
//!
//! Every fallible operation in this crate returns a `RationalError`. Nothing is logged or retried:
//! the error is handed back to the caller at the point of the offending call.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use num_bigint::ParseBigIntError;

/// Shorthand for results of fallible rational operations.
pub type RationalResult<T> = Result<T, RationalError>;

/// A `RationalError` is created when an operation on rational numbers can't produce a value.
///
/// It is the highest error in the error hierarchy of this crate.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RationalError {
    /// A value was constructed from a pair with a zero denominator.
    ///
    /// The contained `String` is a message for the end user.
    InvalidArgument(String),
    /// Division by, reciprocal of, or reduction modulo a value that is zero.
    DivisionByZero,
    /// Text could not be read as a rational number.
    Format(ParseError),
}

impl RationalError {
    /// The error for a zero denominator in the normalizing constructor.
    pub(crate) fn zero_denominator() -> Self {
        RationalError::InvalidArgument("denominator can't be zero".to_string())
    }
}

impl Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RationalError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            RationalError::DivisionByZero => f.write_str("division by zero"),
            RationalError::Format(error) => error.fmt(f),
        }
    }
}

impl Error for RationalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RationalError::InvalidArgument(_) => None,
            RationalError::DivisionByZero => None,
            RationalError::Format(error) => Some(error),
        }
    }
}

impl From<ParseError> for RationalError {
    fn from(error: ParseError) -> Self {
        RationalError::Format(error)
    }
}

/// A `ParseError` represents text that doesn't describe a rational number.
///
/// When the problem was with one of the two integers, the error of the integer parser is kept as
/// the source.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    source: Option<ParseBigIntError>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong with the text.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None, }
    }

    /// Wrap a `ParseError` around the failure of parsing one of the integers.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong with the text.
    /// * `source`: The error of the integer parser.
    pub fn with_source(description: impl Into<String>, source: ParseBigIntError) -> Self {
        Self { description: description.into(), source: Some(source), }
    }

    /// The error for text that can't be a rational at all.
    pub(crate) fn invalid(text: &str) -> Self {
        Self::new(format!("invalid rational: {}", text))
    }

    /// Human readable description, without the source.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            None => write!(f, "ParseError: {}", self.description),
            Some(source) => write!(f, "ParseError: {} ({})", self.description, source),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|error| error as &(dyn Error + 'static))
    }
}
