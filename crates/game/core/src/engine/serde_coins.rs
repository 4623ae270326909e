//! Serde helpers for coin amounts that may be infinite.
//!
//! JSON has no representation for infinity, so non-finite values are written
//! as the strings `"Infinity"` / `"-Infinity"` and read back from either form.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CoinsInput {
        Number(f64),
        String(String),
    }

    match CoinsInput::deserialize(deserializer)? {
        CoinsInput::Number(value) => Ok(value),
        // f64's parser accepts "Infinity"/"-Infinity"/"NaN" case-insensitively.
        CoinsInput::String(raw) => raw.parse::<f64>().map_err(D::Error::custom),
    }
}
