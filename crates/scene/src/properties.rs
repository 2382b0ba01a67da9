use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A primitive property value as found in a GeoJSON `properties` object.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropertyValue {
    /// Whether the value counts as present for display fallbacks.
    ///
    /// `Null`, `false`, `0`, `NaN` and the empty string are all treated as absent.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Null => false,
            PropertyValue::Bool(b) => *b,
            PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropertyValue::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric reading; numeric text (`"250"`) is coerced.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Parses ISO-8601 text (RFC 3339, naive date-time or plain date, naive values
    /// read as UTC) or a number of milliseconds since the Unix epoch.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            PropertyValue::Text(s) => parse_timestamp(s),
            PropertyValue::Number(ms) if ms.is_finite() => {
                DateTime::from_timestamp_millis(*ms as i64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => f.write_str("null"),
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Free-form item properties keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    values: BTreeMap<String, PropertyValue>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn truthy(&self, key: &str) -> Option<&PropertyValue> {
        self.get(key).filter(|v| v.is_truthy())
    }

    /// Non-empty text value of `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.truthy(key).and_then(PropertyValue::as_str)
    }

    /// Number value of `key`; `0`, missing and non-numeric all read as `None`.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.truthy(key)
            .and_then(PropertyValue::as_number)
            .filter(|n| *n != 0.0 && !n.is_nan())
    }

    /// Display form of `key` if the value is present.
    pub fn display(&self, key: &str) -> Option<String> {
        self.truthy(key).map(ToString::to_string)
    }

    /// First present value among `keys`, in display form.
    pub fn first_display(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.display(key))
    }

    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.truthy(key).and_then(PropertyValue::as_timestamp)
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = Properties::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}
