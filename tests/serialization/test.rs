use num_bigint::BigInt;
use serde_json::{json, Value};

use exact_rational::{Rational, RB};

#[test]
fn written_as_strings() {
    let value = serde_json::to_value(RB!(10, -4)).unwrap();
    assert_eq!(value, json!({"numerator": "-5", "denominator": "2"}));

    let value = serde_json::to_value(Rational::zero()).unwrap();
    assert_eq!(value["denominator"], Value::String("1".to_string()));
}

#[test]
fn round_trip() {
    let values = vec![
        Rational::zero(),
        RB!(-22, 7),
        Rational::new(BigInt::from(3).pow(250), BigInt::from(2).pow(300)).unwrap(),
    ];

    let text = serde_json::to_string(&values).unwrap();
    let read: Vec<Rational> = serde_json::from_str(&text).unwrap();
    assert_eq!(read, values);
}

#[test]
fn read_is_normalized() {
    let value: Rational = serde_json::from_value(json!({"numerator": "6", "denominator": "-4"}))
        .unwrap();
    assert_eq!(value, RB!(-3, 2));
}

#[test]
fn read_errors() {
    let zero_denominator = json!({"numerator": "6", "denominator": "0"});
    assert!(serde_json::from_value::<Rational>(zero_denominator).is_err());

    let native_numbers = json!({"numerator": 6, "denominator": 4});
    assert!(serde_json::from_value::<Rational>(native_numbers).is_err());
}
