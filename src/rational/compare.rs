//! # Ordering
//!
//! Comparing two fractions exactly takes a cross multiplication, which is expensive when the
//! operands are large. When the magnitudes of the two values are far apart, a comparison of their
//! approximate binary exponents already decides the order.
use std::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::rational::Rational;

impl Rational {
    /// Estimate of the base two logarithm of the absolute value.
    ///
    /// For a nonzero value `x` with estimate `e`, `2^(e - 1) < |x| < 2^(e + 1)`.
    pub(crate) fn binary_exponent(&self) -> i64 {
        debug_assert!(!self.numerator.is_zero());

        self.numerator.bits() as i64 - self.denominator.bits() as i64
    }

    /// Order two values with the same nonzero sign by magnitude, if the exponents differ by more
    /// than the error of the estimate.
    fn compare_exponents(&self, other: &Self) -> Option<Ordering> {
        let (left, right) = (self.binary_exponent(), other.binary_exponent());

        if left > right + 1 {
            Some(Ordering::Greater)
        } else if right > left + 1 {
            Some(Ordering::Less)
        } else {
            None
        }
    }

    /// Exact comparison by cross multiplication. Denominators are positive so the order is kept.
    fn compare_exact(&self, other: &Self) -> Ordering {
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;

        left.cmp(&right)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (sign, other_sign) = (self.numerator.sign(), other.numerator.sign());
        if sign != other_sign {
            // Minus < NoSign < Plus
            return sign.cmp(&other_sign);
        }

        match sign {
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => self.compare_exponents(other)
                .unwrap_or_else(|| self.compare_exact(other)),
            Sign::Minus => self.compare_exponents(other)
                .map(Ordering::reverse)
                .unwrap_or_else(|| self.compare_exact(other)),
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.denominator == BigInt::from(1) && self.numerator == BigInt::from(*other)
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        let other = BigInt::from(*other);
        if self.is_integer() {
            Some(self.numerator.cmp(&other))
        } else {
            // Denominator is positive
            Some(self.numerator.cmp(&(other * &self.denominator)))
        }
    }
}
