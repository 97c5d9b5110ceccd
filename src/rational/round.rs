//! # Rounding
//!
//! Rounding to an integer starts from the truncating division of the numerator by the denominator.
//! The remainder then decides, depending on the `RoundMode`, whether the quotient is moved one step
//! away from zero.
use std::cmp::Ordering;

use enum_map::Enum;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RationalError, RationalResult};
use crate::rational::Rational;

/// Direction and tie breaking policy when rounding to an integer.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RoundMode {
    /// Towards negative infinity.
    Floor,
    /// Towards positive infinity.
    Ceiling,
    /// Towards zero.
    Trunc,
    /// To the nearest integer, ties away from zero.
    HalfUp,
    /// To the nearest integer, ties towards zero.
    HalfDown,
    /// To the nearest integer, ties to the even one.
    HalfEven,
}

impl Rational {
    /// Round to an integer.
    ///
    /// Integer values are returned unchanged in every mode.
    pub fn to_integer(&self, mode: RoundMode) -> BigInt {
        let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
        if remainder.is_zero() {
            return quotient;
        }

        // The remainder has the sign of the numerator and is not zero
        let away_from_zero = |quotient: BigInt| quotient + remainder.signum();

        match mode {
            RoundMode::Floor => if self.is_negative() { quotient - BigInt::one() } else { quotient },
            RoundMode::Ceiling => if self.is_positive() { quotient + BigInt::one() } else { quotient },
            RoundMode::Trunc => quotient,
            RoundMode::HalfUp | RoundMode::HalfDown | RoundMode::HalfEven => {
                let doubled = remainder.abs() * BigInt::from(2);
                match doubled.cmp(&self.denominator) {
                    Ordering::Less => quotient,
                    Ordering::Greater => away_from_zero(quotient),
                    Ordering::Equal => match mode {
                        RoundMode::HalfUp => away_from_zero(quotient),
                        RoundMode::HalfDown => quotient,
                        _ => if quotient.is_even() { quotient } else { away_from_zero(quotient) },
                    },
                }
            },
        }
    }

    /// Round to an integer valued rational.
    pub fn round_with(&self, mode: RoundMode) -> Self {
        Self::from_integer(self.to_integer(mode))
    }

    /// Round towards zero.
    pub fn trunc(&self) -> Self {
        self.round_with(RoundMode::Trunc)
    }

    /// Round towards negative infinity.
    pub fn floor(&self) -> Self {
        self.round_with(RoundMode::Floor)
    }

    /// Round towards positive infinity.
    pub fn ceil(&self) -> Self {
        self.round_with(RoundMode::Ceiling)
    }

    /// Round to the nearest integer, ties away from zero.
    pub fn round_half_up(&self) -> Self {
        self.round_with(RoundMode::HalfUp)
    }

    /// Round to the nearest integer, ties towards zero.
    pub fn round_half_down(&self) -> Self {
        self.round_with(RoundMode::HalfDown)
    }

    /// Round to the nearest integer, ties to the even neighbour.
    pub fn round_half_even(&self) -> Self {
        self.round_with(RoundMode::HalfEven)
    }

    /// Round to the nearest integer, ties away from zero.
    ///
    /// Same as `round_half_up`.
    pub fn round(&self) -> Self {
        self.round_half_up()
    }

    /// Part after the integer part, with the sign of this value.
    pub fn fract(&self) -> Self {
        let remainder = &self.numerator % &self.denominator;
        Self::from_coprime(remainder, self.denominator.clone())
    }

    /// Remainder of division with a quotient rounded towards negative infinity.
    ///
    /// The result is zero or has the sign of `other`: `self - floor(self / other) * other`.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `other` is zero.
    pub fn modulo(&self, other: &Self) -> RationalResult<Self> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        let quotient = self.checked_div(other)?.to_integer(RoundMode::Floor);
        if quotient.is_zero() {
            return Ok(self.clone());
        }

        Ok(self - other * Self::from_integer(quotient))
    }
}
