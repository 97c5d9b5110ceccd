use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

use exact_rational::{Rational, RationalError, RoundMode};
use exact_rational::RB;

use super::{grid, values};

#[test]
fn normalization() {
    for (n, d) in grid(30) {
        let value = Rational::new(n, d).unwrap();
        let (numerator, denominator) = value.clone().into_parts();

        assert!(denominator.is_positive());
        assert!(numerator.gcd(&denominator).is_one());
        assert_eq!(&numerator * BigInt::from(d), &denominator * BigInt::from(n));
    }
}

#[test]
fn zero_denominator() {
    for n in [-5, 0, 5] {
        assert!(matches!(Rational::new(n, 0), Err(RationalError::InvalidArgument(_))));
    }
    let huge = BigInt::from(10).pow(100);
    assert!(matches!(Rational::new(huge, 0), Err(RationalError::InvalidArgument(_))));
}

#[test]
fn text_round_trip() {
    for value in values(15) {
        let text = value.to_string();
        assert_eq!(text.parse::<Rational>(), Ok(value), "{}", text);
    }

    let big = Rational::new(BigInt::from(7).pow(300), -BigInt::from(3).pow(200)).unwrap();
    assert_eq!(big.to_string().parse::<Rational>(), Ok(big));
}

#[test]
fn parse_errors() {
    assert!(matches!("1/2/3".parse::<Rational>(), Err(RationalError::Format(_))));
    assert!(matches!("one".parse::<Rational>(), Err(RationalError::Format(_))));
    assert!(matches!("1 / two".parse::<Rational>(), Err(RationalError::Format(_))));
    assert!(matches!("3/0".parse::<Rational>(), Err(RationalError::InvalidArgument(_))));
}

#[test]
fn magnitude_skew() {
    let small = Rational::from(BigInt::from(2).pow(5000));
    let large = Rational::from(BigInt::from(2).pow(6000));

    assert!(large > small);
    assert!(small < large);
    assert!(-&large < -&small);
    assert_eq!(large.cmp(&large.clone()), Ordering::Equal);

    let tiny = small.reciprocal().unwrap();
    assert!(tiny < Rational::one());
    assert!(tiny > Rational::zero());
}

#[test]
fn order_matches_difference() {
    let values = values(6);
    for a in &values {
        for b in &values {
            let expected = match a - b {
                difference if difference.is_zero() => Ordering::Equal,
                difference if difference.is_negative() => Ordering::Less,
                _ => Ordering::Greater,
            };
            assert_eq!(a.cmp(b), expected, "{} vs {}", a, b);
        }
    }
}

#[test]
fn arithmetic_identities() {
    let values = values(6);
    for a in &values {
        if !a.is_zero() {
            assert_eq!(a * a.reciprocal().unwrap(), Rational::one());
        }
        for b in &values {
            assert_eq!(&(a + b) - b, *a);
            if !b.is_zero() {
                assert_eq!(&a.checked_div(b).unwrap() * b, *a);
            } else {
                assert_eq!(a.checked_div(b), Err(RationalError::DivisionByZero));
            }
        }
    }
}

#[test]
fn modulo_sign() {
    assert_eq!(RB!(7, 3) % RB!(2), RB!(1, 3));
    assert_eq!(RB!(-7, 3) % RB!(2), RB!(5, 3));
    assert_eq!(RB!(7, 3).modulo(&Rational::zero()), Err(RationalError::DivisionByZero));

    let values = values(5);
    for a in &values {
        for b in values.iter().filter(|b| !b.is_zero()) {
            let remainder = a.modulo(b).unwrap();
            assert!(remainder.is_zero() || remainder.is_negative() == b.is_negative());
            assert!(remainder.abs() < b.abs());
            // The quotient is an integer
            assert!((a - &remainder).checked_div(b).unwrap().is_integer());
        }
    }
}

#[test]
fn floor_and_ceiling() {
    assert_eq!(RB!(7, 3).floor(), RB!(2));
    assert_eq!(RB!(7, 3).ceil(), RB!(3));
    assert_eq!(RB!(-7, 3).floor(), RB!(-3));
    assert_eq!(RB!(-7, 3).ceil(), RB!(-2));

    for value in values(8) {
        let (floor, ceiling) = (value.floor(), value.ceil());
        assert!(floor <= value && value <= ceiling);
        if value.is_integer() {
            assert_eq!(floor, ceiling);
        } else {
            assert_eq!(&ceiling - &floor, Rational::one());
        }
    }
}

#[test]
fn half_up_ties_away_from_zero() {
    assert_eq!(RB!(25, 10).round_half_up(), RB!(3));
    assert_eq!(RB!(-25, 10).round_half_up(), RB!(-3));
}

#[test]
fn half_even_ties_to_even() {
    assert_eq!(RB!(25, 10).round_half_even(), RB!(2));
    assert_eq!(RB!(35, 10).round_half_even(), RB!(4));
    assert_eq!(RB!(-25, 10).round_half_even(), RB!(-2));
    assert_eq!(RB!(-35, 10).round_half_even(), RB!(-4));
}

#[test]
fn nearest_modes_are_nearest() {
    let modes = [RoundMode::HalfUp, RoundMode::HalfDown, RoundMode::HalfEven];
    for value in values(9) {
        for mode in modes {
            let rounded = value.round_with(mode);
            assert!((&rounded - &value).abs() <= Rational::half(), "{} {:?}", value, mode);
        }
    }
}

#[test]
fn large_rounding() {
    let big = BigInt::from(10).pow(50);
    let value = Rational::new(&big * BigInt::from(5) + BigInt::one(), BigInt::from(2)).unwrap();
    let expected = (&big * BigInt::from(5)) / BigInt::from(2);

    assert_eq!(value.to_integer(RoundMode::Trunc), expected);
    assert_eq!(value.to_integer(RoundMode::HalfDown), expected);
    assert_eq!(value.to_integer(RoundMode::HalfUp), expected + BigInt::one());
}
