/// Shorthand for creating a rational number in tests.
///
/// With one argument, the exact value of that number as a float. With two, the fraction of the
/// two integers, which may not have a zero denominator.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::Rational::from_float($value as f64).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational::new($numer as i64, $denom as i64).unwrap()
    };
}
