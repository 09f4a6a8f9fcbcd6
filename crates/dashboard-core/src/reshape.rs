// File: crates/dashboard-core/src/reshape.rs
// Summary: Pure transform from a compact payload to the requested derived view.
// Notes:
// - The payload is only borrowed; every output structure is freshly allocated.
// - Errors propagate untouched; no partial views are returned.

use tracing::{debug, trace};

use crate::error::{Expected, ReshapeError, Result};
use crate::options::ReshapeOptions;
use crate::payload::TabularPayload;
use crate::series::{GroupValue, Row, RowKey, XCell, XGroup, XSeries, YCell, YSeries};
use crate::time::{parse_epoch_millis, parse_with_format};
use crate::view::{x_extent, y_extent, DerivedView};

/// Header name that marks the key column as epoch-millisecond timestamps.
pub const TIMESTAMP_HEADER: &str = "timestamp";

/// How the key column is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyKind<'a> {
    Raw,
    EpochMillis,
    Formatted(&'a str),
}

impl KeyKind<'_> {
    /// Decide how to read column 0: `dateFormat` wins, then the `timestamp`
    /// header or the `time_series` flag select epoch milliseconds.
    pub fn detect<'p>(payload: &'p TabularPayload, options: &ReshapeOptions) -> KeyKind<'p> {
        if let Some(format) = payload.date_format.as_deref() {
            return KeyKind::Formatted(format);
        }
        if options.time_series || payload.key_header() == Some(TIMESTAMP_HEADER) {
            return KeyKind::EpochMillis;
        }
        KeyKind::Raw
    }

    pub(crate) fn convert(&self, header: &str, row: usize, cell: &str) -> Result<RowKey> {
        let (parsed, expected) = match self {
            KeyKind::Raw => return Ok(RowKey::Text(cell.to_string())),
            KeyKind::EpochMillis => (parse_epoch_millis(cell), Expected::EpochMillis),
            KeyKind::Formatted(format) => {
                (parse_with_format(cell, format), Expected::Date { format: format.to_string() })
            }
        };
        parsed.map(RowKey::Date).ok_or_else(|| ReshapeError::Coercion {
            header: header.to_string(),
            row,
            value: cell.to_string(),
            expected,
        })
    }
}

/// Stateless reshaping service. Controllers hold one and call it per response.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reshaper {
    defaults: ReshapeOptions,
}

impl Reshaper {
    pub const fn new() -> Self {
        Self { defaults: ReshapeOptions::new() }
    }

    /// Facets in `defaults` are requested on every call, in addition to the per-call options.
    pub const fn with_defaults(defaults: ReshapeOptions) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> ReshapeOptions { self.defaults }

    pub fn reshape(&self, payload: &TabularPayload, options: &ReshapeOptions) -> Result<DerivedView> {
        reshape(payload, &self.defaults.union(*options))
    }
}

/// Convert `payload` into the facets selected by `options`.
pub fn reshape(payload: &TabularPayload, options: &ReshapeOptions) -> Result<DerivedView> {
    let rows = payload.validate()?;
    debug!(
        rows,
        x_columns = payload.x_headers.len(),
        y_columns = payload.y_headers.len(),
        facets = ?options.facet_names(),
        "reshaping payload"
    );

    let key_header = payload.x_headers[0].as_str();
    let kind = KeyKind::detect(payload, options);
    trace!(header = key_header, kind = ?kind, "key column");

    let keys = convert_keys(&kind, key_header, &payload.x_values[0])?;
    let y_columns = coerce_y(payload)?;

    let mut view = DerivedView {
        x_headers: payload.x_headers.clone(),
        y_headers: payload.y_headers.clone(),
        x_label: payload.x_label.clone(),
        y_label: payload.y_label.clone(),
        x_series: XSeries { header: key_header.to_string(), values: keys },
        y_series: None,
        rows: None,
        x_groups: None,
        x_min: None,
        x_max: None,
        y_min: None,
        y_max: None,
    };

    if options.y_series {
        view.y_series = Some(y_series(&payload.y_headers, &y_columns));
    }
    if options.rows {
        view.rows = Some(row_records(payload, &view.x_series.values, &y_columns, rows));
    }
    if options.group_by_x {
        view.x_groups = Some(group_by_x(&payload.y_headers, &view.x_series.values, &y_columns));
    }
    if options.x_min_max {
        if let Some((lo, hi)) = x_extent(&view.x_series.values) {
            view.x_min = Some(lo);
            view.x_max = Some(hi);
        }
    }
    if options.y_min_max {
        if let Some((lo, hi)) = y_extent(&y_columns) {
            view.y_min = Some(lo);
            view.y_max = Some(hi);
        }
    }
    Ok(view)
}

fn convert_keys(kind: &KeyKind<'_>, header: &str, column: &[String]) -> Result<Vec<RowKey>> {
    column
        .iter()
        .enumerate()
        .map(|(row, cell)| kind.convert(header, row, cell))
        .collect()
}

/// Parse one y cell. Surrounding whitespace is ignored; empty, non-numeric
/// and non-finite cells are rejected.
pub fn coerce_number(header: &str, row: usize, cell: &str) -> Result<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ReshapeError::Coercion {
            header: header.to_string(),
            row,
            value: cell.to_string(),
            expected: Expected::Number,
        })
}

fn coerce_y(payload: &TabularPayload) -> Result<Vec<Vec<f64>>> {
    payload
        .y_headers
        .iter()
        .zip(&payload.y_values)
        .map(|(header, column)| {
            column
                .iter()
                .enumerate()
                .map(|(row, cell)| coerce_number(header, row, cell))
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

fn y_series(headers: &[String], columns: &[Vec<f64>]) -> Vec<YSeries> {
    headers
        .iter()
        .zip(columns)
        .map(|(header, values)| YSeries { header: header.clone(), values: values.clone() })
        .collect()
}

fn row_records(payload: &TabularPayload, keys: &[RowKey], y_columns: &[Vec<f64>], rows: usize) -> Vec<Row> {
    (0..rows)
        .map(|r| {
            let x = payload
                .x_headers
                .iter()
                .zip(&payload.x_values)
                .enumerate()
                .map(|(c, (header, column))| XCell {
                    header: header.clone(),
                    value: if c == 0 { keys[r].clone() } else { RowKey::Text(column[r].clone()) },
                })
                .collect();
            let y = payload
                .y_headers
                .iter()
                .zip(y_columns)
                .map(|(header, column)| YCell { header: header.clone(), value: column[r] })
                .collect();
            Row { x, y }
        })
        .collect()
}

fn group_by_x(headers: &[String], keys: &[RowKey], y_columns: &[Vec<f64>]) -> Vec<XGroup> {
    keys.iter()
        .enumerate()
        .map(|(r, key)| XGroup {
            x: key.clone(),
            values: headers
                .iter()
                .zip(y_columns)
                .map(|(header, column)| GroupValue { header: header.clone(), x: key.clone(), y: column[r] })
                .collect(),
        })
        .collect()
}
