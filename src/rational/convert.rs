//! # Conversions
//!
//! From integers and floats into rationals, which is exact, and from rationals into primitives,
//! which goes through an `f64` approximation and loses precision accordingly.
use num_bigint::BigInt;
use num_traits::{Float, FromPrimitive, One, Signed, ToPrimitive};

use crate::rational::Rational;

mod creation {
    use num_bigint::BigInt;

    use crate::rational::Rational;

    macro_rules! from_integer {
        ($($t:ty),*) => {
            $(
                impl From<$t> for Rational {
                    fn from(value: $t) -> Self {
                        Self::from_integer(value)
                    }
                }
            )*
        }
    }
    from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, BigInt);

    impl From<&BigInt> for Rational {
        fn from(value: &BigInt) -> Self {
            Self::from_integer(value.clone())
        }
    }
}

impl Rational {
    /// The exact value of a float.
    ///
    /// Every finite float is a fraction with a power of two as the denominator.
    ///
    /// # Return value
    ///
    /// `None` for infinities and NaN.
    pub fn from_float<F: Float>(value: F) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let (mantissa, exponent, sign) = value.integer_decode();
        let mut numerator = BigInt::from(mantissa);
        if sign < 0 {
            numerator = -numerator;
        }

        if exponent >= 0 {
            Some(Self::from_integer(numerator << exponent as usize))
        } else {
            let denominator = BigInt::one() << exponent.unsigned_abs() as usize;
            Some(Self::normalize(numerator, denominator))
        }
    }

    /// Approximate as a float by dividing the float approximations of both integers.
    ///
    /// Values whose numerator and denominator are both too large for an `f64` give NaN.
    pub fn to_f64(&self) -> f64 {
        let numerator = self.numerator.to_f64().unwrap_or(f64::NAN);
        let denominator = self.denominator.to_f64().unwrap_or(f64::NAN);

        numerator / denominator
    }
}

/// Integer conversions truncate the float approximation towards zero.
///
/// A value outside of the range of the target type gives `None`.
impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        Rational::to_f64(self).to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        Rational::to_f64(self).to_i128()
    }

    fn to_u64(&self) -> Option<u64> {
        Rational::to_f64(self).to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        Rational::to_f64(self).to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        Rational::to_f64(self).to_f32()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Self::from_float(n)
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::from_float(n)
    }
}

impl Signed for Rational {
    fn abs(&self) -> Self {
        Rational::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Rational::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    fn is_positive(&self) -> bool {
        Rational::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        Rational::is_negative(self)
    }
}
