//! # Field operations
//!
//! Addition, subtraction, multiplication and division, with their inverses and identities.
//!
//! The operators accept values and references on both sides, and an `i64` on the right hand side.
//! Every result goes through the normalizing constructor, because the cross products are in
//! general not coprime even when the operands are.
//!
//! `/` and `%` panic on a zero divisor, like they do for the primitive integers. Use
//! `Rational::checked_div` and `Rational::modulo` to get a `RationalError` instead.
use std::cmp::Ordering;

use crate::error::RationalResult;
use crate::rational::Rational;

impl Rational {
    fn plus(&self, rhs: &Self) -> Self {
        let numerator = &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator;
        let denominator = &self.denominator * &rhs.denominator;

        Self::normalize(numerator, denominator)
    }

    fn minus(&self, rhs: &Self) -> Self {
        let numerator = &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator;
        let denominator = &self.denominator * &rhs.denominator;

        Self::normalize(numerator, denominator)
    }

    fn times(&self, rhs: &Self) -> Self {
        let numerator = &self.numerator * &rhs.numerator;
        let denominator = &self.denominator * &rhs.denominator;

        Self::normalize(numerator, denominator)
    }

    /// Divide by another value.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> RationalResult<Self> {
        let numerator = &self.numerator * &rhs.denominator;
        let denominator = &self.denominator * &rhs.numerator;

        Self::normalize_quotient(numerator, denominator)
    }

    fn over(&self, rhs: &Self) -> Self {
        self.checked_div(rhs).unwrap_or_else(|error| panic!("{}", error))
    }

    fn modulo_or_panic(&self, rhs: &Self) -> Self {
        self.modulo(rhs).unwrap_or_else(|error| panic!("{}", error))
    }

    /// The multiplicative inverse, `denominator / numerator`.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if this value is zero.
    pub fn reciprocal(&self) -> RationalResult<Self> {
        Self::normalize_quotient(self.denominator.clone(), self.numerator.clone())
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Raise to an integer power.
    ///
    /// Any value to the power zero is one, including zero itself.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if this value is zero and the exponent is negative.
    pub fn pow(&self, exponent: i32) -> RationalResult<Self> {
        let magnitude = exponent.unsigned_abs();

        match exponent.cmp(&0) {
            Ordering::Greater => Ok(Self::normalize(
                self.numerator.pow(magnitude),
                self.denominator.pow(magnitude),
            )),
            Ordering::Equal => Ok(Self::one()),
            Ordering::Less => Self::normalize_quotient(
                self.denominator.pow(magnitude),
                self.numerator.pow(magnitude),
            ),
        }
    }
}

macro_rules! forward_binary {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                Rational::$inner(&self, &rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                Rational::$inner(&self, rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                Rational::$inner(self, &rhs)
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                Rational::$inner(self, rhs)
            }
        }

        impl $trait<i64> for Rational {
            type Output = Rational;

            fn $method(self, rhs: i64) -> Self::Output {
                Rational::$inner(&self, &Rational::from_integer(rhs))
            }
        }

        impl $trait<i64> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: i64) -> Self::Output {
                Rational::$inner(self, &Rational::from_integer(rhs))
            }
        }
    }
}

macro_rules! forward_assign {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<Rational> for Rational {
            fn $method(&mut self, rhs: Rational) {
                *self = Rational::$inner(self, &rhs);
            }
        }

        impl $trait<&Rational> for Rational {
            fn $method(&mut self, rhs: &Rational) {
                *self = Rational::$inner(self, rhs);
            }
        }

        impl $trait<i64> for Rational {
            fn $method(&mut self, rhs: i64) {
                *self = Rational::$inner(self, &Rational::from_integer(rhs));
            }
        }
    }
}

mod add {
    use std::iter::Sum;
    use std::ops::{Add, AddAssign};

    use crate::rational::Rational;

    forward_binary!(Add, add, plus);
    forward_assign!(AddAssign, add_assign, plus);

    impl Sum for Rational {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Rational::zero(), |total, item| &total + &item)
        }
    }

    impl<'a> Sum<&'a Rational> for Rational {
        fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Rational::zero(), |total, item| &total + item)
        }
    }
}

mod sub {
    use std::ops::{Sub, SubAssign};

    use crate::rational::Rational;

    forward_binary!(Sub, sub, minus);
    forward_assign!(SubAssign, sub_assign, minus);
}

mod mul {
    use std::iter::Product;
    use std::ops::{Mul, MulAssign};

    use crate::rational::Rational;

    forward_binary!(Mul, mul, times);
    forward_assign!(MulAssign, mul_assign, times);

    impl Product for Rational {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Rational::one(), |total, item| &total * &item)
        }
    }

    impl<'a> Product<&'a Rational> for Rational {
        fn product<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
            iter.fold(Rational::one(), |total, item| &total * item)
        }
    }
}

mod div {
    use std::ops::{Div, DivAssign};

    use crate::rational::Rational;

    forward_binary!(Div, div, over);
    forward_assign!(DivAssign, div_assign, over);
}

mod rem {
    use std::ops::{Rem, RemAssign};

    use crate::rational::Rational;

    forward_binary!(Rem, rem, modulo_or_panic);
    forward_assign!(RemAssign, rem_assign, modulo_or_panic);
}

mod neg {
    use std::ops::Neg;

    use crate::rational::Rational;

    impl Neg for Rational {
        type Output = Self;

        fn neg(self) -> Self::Output {
            // The gcd doesn't depend on the sign
            let (numerator, denominator) = self.into_parts();
            Self::from_coprime(-numerator, denominator)
        }
    }

    impl Neg for &Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational::from_coprime(-&self.numerator, self.denominator.clone())
        }
    }
}

mod identities {
    use num_traits::{One, Zero};

    use crate::rational::Rational;

    impl Zero for Rational {
        fn zero() -> Self {
            Rational::from_integer(0)
        }

        fn set_zero(&mut self) {
            *self = Rational::from_integer(0);
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }
    }

    impl One for Rational {
        fn one() -> Self {
            Rational::from_integer(1)
        }

        fn set_one(&mut self) {
            *self = Rational::from_integer(1);
        }

        fn is_one(&self) -> bool {
            self.numerator.is_one() && self.denominator.is_one()
        }
    }
}
