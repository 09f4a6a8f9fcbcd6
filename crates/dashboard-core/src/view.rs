// File: crates/dashboard-core/src/view.rs
// Derived view returned by the reshaper, plus x/y extent helpers.

use std::collections::HashSet;

use serde::Serialize;

use crate::series::{Row, RowKey, XGroup, XSeries, YSeries};

/// Baseline fields are always present; facets are `None` unless requested
/// and are left out of the serialized JSON entirely in that case.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    pub x_headers: Vec<String>,
    pub y_headers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    pub x_series: XSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_series: Option<Vec<YSeries>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Row>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_groups: Option<Vec<XGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_min: Option<RowKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_max: Option<RowKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
}

impl DerivedView {
    /// True when there is nothing to plot; renderers show an empty-data notice instead.
    pub fn is_empty(&self) -> bool {
        self.x_series.values.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.x_series.values.len()
    }

    /// Row count and distinct values of the `id_header` x column, as the
    /// table view's "N results, M unique users" line. `None` without `rows`
    /// or when `id_header` is not an x header.
    pub fn table_summary(&self, id_header: &str) -> Option<TableSummary> {
        let rows = self.rows.as_ref()?;
        let index = self.x_headers.iter().position(|h| h == id_header)?;
        let unique = rows
            .iter()
            .filter_map(|row| row.x.get(index))
            .map(|cell| &cell.value)
            .collect::<HashSet<_>>()
            .len();
        Some(TableSummary { total: rows.len(), unique })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub total: usize,
    pub unique: usize,
}

/// Min and max of the key column. Dates order chronologically; raw keys order
/// numerically when every one parses as a finite number, else lexicographically.
pub fn x_extent(values: &[RowKey]) -> Option<(RowKey, RowKey)> {
    let numeric = values
        .iter()
        .map(|v| v.as_text().and_then(|s| s.trim().parse::<f64>().ok()).filter(|n| n.is_finite()))
        .collect::<Option<Vec<f64>>>();

    match numeric {
        Some(nums) if !nums.is_empty() => {
            let lo = nums.iter().enumerate().min_by(|a, b| a.1.total_cmp(b.1))?.0;
            let hi = nums.iter().enumerate().max_by(|a, b| a.1.total_cmp(b.1))?.0;
            Some((values[lo].clone(), values[hi].clone()))
        }
        _ => {
            let lo = values.iter().min_by(|a, b| a.natural_cmp(b))?;
            let hi = values.iter().max_by(|a, b| a.natural_cmp(b))?;
            Some((lo.clone(), hi.clone()))
        }
    }
}

/// Global min and max across every value of every series.
pub fn y_extent(series: &[Vec<f64>]) -> Option<(f64, f64)> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut any = false;
    for column in series {
        for &y in column {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
            any = true;
        }
    }
    if any { Some((y_min, y_max)) } else { None }
}

