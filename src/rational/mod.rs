//! # An arbitrary precision rational type
//!
//! A `Rational` is a fraction of two `BigInt`s that is always kept in lowest terms, with the sign
//! on the numerator. Because that form is canonical, equality and hashing are structural.
//!
//! The operations are spread over submodules: arithmetic in `field`, ordering in `compare`,
//! rounding and the modulo operation in `round`, reading and writing text in `text` and the
//! conversions from and to primitives in `convert`.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RationalError, RationalResult};

pub use round::RoundMode;

mod compare;
mod convert;
mod field;
mod macros;
mod round;
#[cfg(feature = "serde")]
mod serialization;
mod text;

/// An exact fraction of two arbitrary size integers.
///
/// # Invariants
///
/// * `denominator > 0`
/// * `gcd(|numerator|, denominator) == 1`, so zero is `0/1`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Create a new instance in lowest terms.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value that can be turned into a `BigInt`.
    /// * `denominator`: Idem, may be negative but not zero.
    ///
    /// # Errors
    ///
    /// `RationalError::InvalidArgument` if the denominator is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> RationalResult<Self> {
        let (numerator, denominator) = (numerator.into(), denominator.into());
        if denominator.is_zero() {
            return Err(RationalError::zero_denominator());
        }

        Ok(Self::normalize(numerator, denominator))
    }

    /// Reduce a pair with a nonzero denominator.
    fn normalize(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        // The gcd is nonzero because the denominator is
        let gcd = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = if gcd.is_one() {
            (numerator, denominator)
        } else {
            (numerator / &gcd, denominator / &gcd)
        };

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Self::from_coprime(numerator, denominator)
    }

    /// Reduce a pair that is the result of an operation, where the denominator might be zero.
    ///
    /// A zero denominator can only come from a zero divisor.
    fn normalize_quotient(numerator: BigInt, denominator: BigInt) -> RationalResult<Self> {
        if denominator.is_zero() {
            Err(RationalError::DivisionByZero)
        } else {
            Ok(Self::normalize(numerator, denominator))
        }
    }

    /// Wrap a pair that is already in lowest terms without doing any work.
    ///
    /// Callers guarantee that the denominator is positive and coprime with the numerator.
    pub(crate) fn from_coprime(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_positive());
        debug_assert!(numerator.gcd(&denominator).is_one());

        Self { numerator, denominator }
    }

    /// Create an integer valued instance, `value / 1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::from_coprime(value.into(), BigInt::one())
    }

    /// The additive identity, `0/1`.
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// The multiplicative identity, `1/1`.
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// `-1/1`.
    pub fn minus_one() -> Self {
        Self::from_integer(-1)
    }

    /// `1/2`.
    pub fn half() -> Self {
        Self::from_coprime(BigInt::one(), BigInt::from(2))
    }

    /// Numerator, carries the sign.
    pub fn numer(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator, always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denominator
    }

    /// Split into the numerator and the denominator.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Whether this value equals zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Whether this value equals one.
    pub fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }

    /// Whether this value equals minus one.
    pub fn is_minus_one(&self) -> bool {
        self.denominator.is_one() && self.numerator == -BigInt::one()
    }

    /// Strictly larger than zero.
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Whether the value is a whole number.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Absolute value strictly smaller than one.
    pub fn is_proper(&self) -> bool {
        self.numerator.magnitude() < self.denominator.magnitude()
    }

    /// Absolute value of at least one.
    pub fn is_improper(&self) -> bool {
        !self.is_proper()
    }

    /// Numerator of absolute value one, so `1/d` or `-1/d`.
    pub fn is_unit(&self) -> bool {
        self.numerator.magnitude().is_one()
    }
}
