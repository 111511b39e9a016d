//! Wire encoding for amounts.
//!
//! The gateway expects plain JSON numbers. Integral amounts (the common case
//! for XOF) are written as integers so `500` stays `500` and not `500.0`.
//! Deserialization uses `Decimal`'s own impl, which accepts any JSON number.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serializer;
use serde::ser::Error;

pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero()
        && let Some(int) = value.to_i64()
    {
        return serializer.serialize_i64(int);
    }
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(S::Error::custom(format!("amount {value} is not representable"))),
    }
}

pub fn serialize_option<S: Serializer>(
    value: &Option<Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serialize(value, serializer),
        None => serializer.serialize_none(),
    }
}
