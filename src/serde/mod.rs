use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize_to_str<T, S>(that: T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<str>,
    S: Serializer,
{
    serializer.serialize_str(that.as_ref())
}

pub fn deserialize_from_str<'de, S, D>(deserializer: D) -> Result<S, D::Error>
where
    S: FromStr,
    S::Err: fmt::Display,
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    S::from_str(&s).map_err(de::Error::custom)
}

/// Reads a numeric field that may be empty or malformed; anything unparseable becomes `NaN`.
pub fn deserialize_lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let rep: String = Deserialize::deserialize(deserializer)?;
    Ok(parse_f64(&rep).unwrap_or(f64::NAN))
}

/// Reads an optional numeric field; empty, malformed and `NaN` values are `None`.
pub fn deserialize_optional_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let rep: String = Deserialize::deserialize(deserializer)?;
    Ok(parse_f64(&rep).filter(|v| !v.is_nan()))
}

/// Reads an optional integer field. Integral float text such as `1000.0` is accepted.
pub fn deserialize_optional_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let rep: String = Deserialize::deserialize(deserializer)?;
    let rep = rep.trim();
    let value = rep.parse::<i64>().ok().or_else(|| {
        parse_f64(rep)
            .filter(|v| v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64)
            .map(|v| v as i64)
    });
    Ok(value)
}

/// Reads an optional text field; empty text is `None`.
pub fn deserialize_optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let rep: String = Deserialize::deserialize(deserializer)?;
    let rep = rep.trim();
    Ok(if rep.is_empty() { None } else { Some(rep.to_string()) })
}

fn parse_f64(rep: &str) -> Option<f64> {
    let rep = rep.trim();
    if rep.is_empty() {
        None
    } else {
        rep.parse::<f64>().ok()
    }
}
