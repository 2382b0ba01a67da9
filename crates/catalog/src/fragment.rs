use std::fmt;

use chrono::{DateTime, Utc};

pub const NOT_AVAILABLE: &str = "N/A";

/// One labeled line of a list entry or detail popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRow {
    pub label: &'static str,
    pub text: String,
}

/// Display-agnostic rendering of one item: a heading plus labeled rows.
///
/// The surface decides how this becomes markup; the engine only decides what is
/// shown and in which order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub title: String,
    pub rows: Vec<FragmentRow>,
}

impl Fragment {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: &'static str, text: impl Into<String>) -> Self {
        self.rows.push(FragmentRow {
            label,
            text: text.into(),
        });
        self
    }

    pub fn text_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.text.as_str())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        for row in &self.rows {
            write!(f, "\n{}: {}", row.label, row.text)?;
        }
        Ok(())
    }
}

pub(crate) fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub(crate) fn date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub(crate) fn date_time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// First `n` characters, never splitting a code point.
pub(crate) fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
