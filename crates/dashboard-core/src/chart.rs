// File: crates/dashboard-core/src/chart.rs
// Summary: Chart-type presets: which facets each chart needs and how its payload is prepared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReshapeError, Result};
use crate::options::ReshapeOptions;
use crate::payload::TabularPayload;
use crate::reshape::{reshape, KeyKind, TIMESTAMP_HEADER};
use crate::series::RowKey;
use crate::time::{format_instant, DAY_LABEL_FORMAT};
use crate::view::DerivedView;

/// Key header given to bar-chart day labels.
pub const DAY_HEADER: &str = "day";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    #[serde(rename = "hbar")]
    HBar,
    Line,
    Table,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Bar, ChartKind::HBar, ChartKind::Line, ChartKind::Table];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::HBar => "hbar",
            ChartKind::Line => "line",
            ChartKind::Table => "table",
        }
    }

    /// Facets the renderer for this chart type consumes.
    pub fn reshape_options(&self) -> ReshapeOptions {
        match self {
            ChartKind::Bar | ChartKind::HBar => ReshapeOptions::new().with_group_by_x(),
            ChartKind::Line => ReshapeOptions::new().with_time_series(),
            ChartKind::Table => ReshapeOptions::new().with_rows(),
        }
    }

    /// Return the payload this chart type should be reshaped from.
    ///
    /// Bar charts label date buckets by day: date keys become `%m/%d` strings
    /// and a `timestamp` key header is renamed `day`, so the labels are not
    /// parsed as timestamps again. Text keys, and every other chart type, get
    /// an unchanged copy.
    pub fn prepare(&self, payload: &TabularPayload) -> Result<TabularPayload> {
        let mut prepared = payload.clone();
        if *self != ChartKind::Bar {
            return Ok(prepared);
        }
        let Some(header) = payload.key_header() else {
            return Err(ReshapeError::MissingKeyColumn);
        };
        let kind = KeyKind::detect(payload, &ReshapeOptions::new());
        if let Some(keys) = prepared.x_values.first_mut() {
            for (row, cell) in keys.iter_mut().enumerate() {
                let RowKey::Date(instant) = kind.convert(header, row, cell)? else {
                    continue;
                };
                *cell = format_instant(&instant, DAY_LABEL_FORMAT).unwrap_or_default();
            }
        }
        prepared.date_format = None;
        if header == TIMESTAMP_HEADER {
            debug!("bar chart relabels the timestamp key column as day labels");
            prepared.x_headers[0] = DAY_HEADER.to_string();
        }
        Ok(prepared)
    }

    /// Prepare and reshape in one step, overlaying `extra` on the preset facets.
    ///
    /// The view describes the prepared payload: a bar chart keyed by
    /// `timestamp` reports `day` as its first x header, not the input's.
    pub fn render(&self, payload: &TabularPayload, extra: &ReshapeOptions) -> Result<DerivedView> {
        let prepared = self.prepare(payload)?;
        reshape(&prepared, &self.reshape_options().union(*extra))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown chart type '{0}' (expected bar, hbar, line or table)")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}
