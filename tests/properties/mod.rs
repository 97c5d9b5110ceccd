//! # Properties of the rational type
//!
//! Checked over small grids of numerators and denominators, and on a few very large values.
use itertools::iproduct;

use exact_rational::Rational;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// All fractions with a numerator and nonzero denominator between -`bound` and `bound`.
fn grid(bound: i64) -> impl Iterator<Item = (i64, i64)> + Clone {
    iproduct!(-bound..=bound, (-bound..=bound).filter(|&d| d != 0))
}

/// The normalized values of `grid(bound)`.
fn values(bound: i64) -> Vec<Rational> {
    grid(bound).map(|(n, d)| Rational::new(n, d).unwrap()).collect()
}
