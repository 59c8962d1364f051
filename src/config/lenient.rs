//! Forgiving field wrappers used while deserializing a configuration.
//!
//! A malformed value never fails the whole document; the field simply reads
//! as absent and the caller substitutes its default.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A number, or a string holding one. Anything else (and non-finite values)
/// reads as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Num(pub Option<f64>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNum {
    Num(f64),
    Str(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for Num {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = match RawNum::deserialize(deserializer)? {
            RawNum::Num(n) => Some(n),
            RawNum::Str(s) => s.trim().parse::<f64>().ok(),
            RawNum::Other(_) => None,
        };
        Ok(Num(value.filter(|n| n.is_finite())))
    }
}

impl Num {
    pub fn or(self, default: f64) -> f64 {
        self.0.unwrap_or(default)
    }

    pub fn clamped(self, default: f64, min: f64, max: f64) -> f64 {
        self.or(default).clamp(min, max)
    }
}

/// Any value that deserializes as `T`; anything else reads as absent.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Or<T>(pub Option<T>);

impl<T> Default for Or<T> {
    fn default() -> Self {
        Or(None)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOr<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Or<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawOr::<T>::deserialize(deserializer)? {
            RawOr::Value(v) => Or(Some(v)),
            RawOr::Other(_) => Or(None),
        })
    }
}

impl<T> Or<T> {
    pub fn or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }
}

impl Or<String> {
    /// Non-blank string, or the default
    pub fn text_or(self, default: &str) -> String {
        self.0
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Sample {
        a: Num,
        b: Or<String>,
    }

    fn sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        assert_eq!(sample(r#"{"a": 12.5}"#).a, Num(Some(12.5)));
        assert_eq!(sample(r#"{"a": " 40 "}"#).a, Num(Some(40.0)));
    }

    #[test]
    fn garbage_reads_as_absent() {
        assert_eq!(sample(r#"{"a": "wide"}"#).a.or(45.0), 45.0);
        assert_eq!(sample(r#"{"a": null}"#).a.or(45.0), 45.0);
        assert_eq!(sample(r#"{"a": [1, 2]}"#).a.or(45.0), 45.0);
        assert_eq!(sample(r#"{}"#).a.or(45.0), 45.0);
    }

    #[test]
    fn mistyped_values_fall_back() {
        assert_eq!(sample(r#"{"b": 3}"#).b.text_or("x"), "x");
        assert_eq!(sample(r#"{"b": "  "}"#).b.text_or("x"), "x");
        assert_eq!(sample(r#"{"b": "Navy"}"#).b.text_or("x"), "Navy");
    }
}
