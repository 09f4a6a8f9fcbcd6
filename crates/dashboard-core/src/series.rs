// File: crates/dashboard-core/src/series.rs
// Summary: Derived series shapes handed to chart renderers (x/y series, row records, x buckets).
// Notes:
// - Dates serialize as epoch milliseconds so the output stays as compact as the input.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// A key-column cell: a parsed timestamp or the raw string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKey {
    Date(DateTime<Utc>),
    Text(String),
}

impl RowKey {
    pub fn date_from_millis(ms: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(ms).map(RowKey::Date)
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            RowKey::Date(d) => Some(d),
            RowKey::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RowKey::Text(s) => Some(s),
            RowKey::Date(_) => None,
        }
    }

    /// Chronological for dates, lexicographic for text; dates sort before text.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RowKey::Date(a), RowKey::Date(b)) => a.cmp(b),
            (RowKey::Text(a), RowKey::Text(b)) => a.cmp(b),
            (RowKey::Date(_), RowKey::Text(_)) => Ordering::Less,
            (RowKey::Text(_), RowKey::Date(_)) => Ordering::Greater,
        }
    }
}

impl From<DateTime<Utc>> for RowKey {
    fn from(value: DateTime<Utc>) -> Self { RowKey::Date(value) }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self { RowKey::Text(value.to_string()) }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self { RowKey::Text(value) }
}

impl Serialize for RowKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RowKey::Date(d) => serializer.serialize_i64(d.timestamp_millis()),
            RowKey::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Key column promoted to the primary axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XSeries {
    pub header: String,
    pub values: Vec<RowKey>,
}

/// One numeric column, aligned index-for-index with `XSeries::values`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YSeries {
    pub header: String,
    pub values: Vec<f64>,
}

/// An x cell tagged with its column header.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XCell {
    pub header: String,
    pub value: RowKey,
}

/// A y cell tagged with its column header.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YCell {
    pub header: String,
    pub value: f64,
}

/// Full row-major record, for tabular display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    pub x: Vec<XCell>,
    pub y: Vec<YCell>,
}

/// One y value inside an x bucket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupValue {
    pub header: String,
    pub x: RowKey,
    pub y: f64,
}

/// All y values sharing a key-column row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XGroup {
    pub x: RowKey,
    pub values: Vec<GroupValue>,
}
