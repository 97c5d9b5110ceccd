//! # Serialization
//!
//! Both integers are written as decimal strings, so that formats with bounded native numbers don't
//! lose precision. Reading goes through the normalizing constructor.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use serde::ser::SerializeStruct;

use crate::rational::Rational;

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Rational", 2)?;
        state.serialize_field("numerator", &self.numerator.to_string())?;
        state.serialize_field("denominator", &self.denominator.to_string())?;
        state.end()
    }
}

/// Shape of the serialized form.
#[derive(Deserialize)]
#[serde(rename = "Rational")]
struct Parts {
    numerator: String,
    denominator: String,
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Parts { numerator, denominator } = Parts::deserialize(deserializer)?;

        let numerator = numerator.trim().parse::<num_bigint::BigInt>().map_err(D::Error::custom)?;
        let denominator = denominator.trim().parse::<num_bigint::BigInt>().map_err(D::Error::custom)?;

        Rational::new(numerator, denominator).map_err(D::Error::custom)
    }
}
