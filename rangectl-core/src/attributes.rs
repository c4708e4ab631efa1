//! Attribute names, parsing and the initial-attribute snapshot.
//!
//! Attribute values arrive as strings. Numeric reads use leading-prefix
//! parsing and never fail: unparseable input maps to a documented default
//! (or is ignored on change) instead of raising an error.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Variant;

/// Errors from the string-keyed attribute entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttributeError {
    #[error("unknown attribute `{0}`")]
    Unknown(String),

    #[error("attribute `{name}` is not observed by a {variant} control")]
    NotObserved { name: AttributeName, variant: Variant },
}

/// Externally observable attributes of a range control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeName {
    Value,
    HandleValue,
    Label,
    Min,
    Max,
    Unit,
    HideHandle,
}

const SINGLE_OBSERVED: &[AttributeName] = &[
    AttributeName::Value,
    AttributeName::Label,
    AttributeName::Min,
    AttributeName::Max,
    AttributeName::Unit,
];

const DUAL_OBSERVED: &[AttributeName] = &[
    AttributeName::Value,
    AttributeName::HandleValue,
    AttributeName::Label,
    AttributeName::HideHandle,
    AttributeName::Min,
    AttributeName::Max,
    AttributeName::Unit,
];

impl AttributeName {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::Value => "value",
            AttributeName::HandleValue => "handle-value",
            AttributeName::Label => "label",
            AttributeName::Min => "min",
            AttributeName::Max => "max",
            AttributeName::Unit => "unit",
            AttributeName::HideHandle => "hide-handle",
        }
    }

    /// Attributes a control of `variant` reacts to.
    pub fn observed(variant: Variant) -> &'static [AttributeName] {
        match variant {
            Variant::Single => SINGLE_OBSERVED,
            Variant::Dual => DUAL_OBSERVED,
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeName {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(AttributeName::Value),
            "handle-value" => Ok(AttributeName::HandleValue),
            "label" => Ok(AttributeName::Label),
            "min" => Ok(AttributeName::Min),
            "max" => Ok(AttributeName::Max),
            "unit" => Ok(AttributeName::Unit),
            "hide-handle" => Ok(AttributeName::HideHandle),
            other => Err(AttributeError::Unknown(other.to_string())),
        }
    }
}

/// Parse the longest numeric prefix of `raw`.
///
/// Accepts leading whitespace, an optional sign, `Infinity`, digits with an
/// optional fraction, and an optional exponent. Trailing garbage is ignored
/// (`"12px"` is 12). Returns `None` when no numeric prefix exists.
pub fn parse_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Numeric attribute read with a fallback for absent or malformed input.
pub fn parse_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(parse_float).unwrap_or(default)
}

/// Snapshot of an element's attributes, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn get(&self, name: AttributeName) -> Option<&str> {
        self.values.get(name.as_str()).map(String::as_str)
    }

    pub fn has(&self, name: AttributeName) -> bool {
        self.values.contains_key(name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
