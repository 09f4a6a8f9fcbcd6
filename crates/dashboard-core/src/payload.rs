// File: crates/dashboard-core/src/payload.rs
// Summary: Compact column-major metric payload as served by the data endpoint.
// Notes:
// - Numbers and timestamps travel as strings; coercion happens in the reshaper.
// - Column 0 of `x_values` is the key column every y column is plotted against.

use serde::{Deserialize, Serialize};

use crate::error::{Axis, ReshapeError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularPayload {
    pub x_headers: Vec<String>,
    pub x_values: Vec<Vec<String>>,
    pub y_headers: Vec<String>,
    pub y_values: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl TabularPayload {
    pub fn new(
        x_headers: Vec<String>,
        x_values: Vec<Vec<String>>,
        y_headers: Vec<String>,
        y_values: Vec<Vec<String>>,
    ) -> Self {
        Self { x_headers, x_values, y_headers, y_values, ..Self::default() }
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Decode a payload from the endpoint's JSON body.
    pub fn from_json_str(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Header of the key column, if any.
    pub fn key_header(&self) -> Option<&str> {
        self.x_headers.first().map(String::as_str)
    }

    /// Row count R, taken from the key column (0 when there is none).
    pub fn row_count(&self) -> usize {
        self.x_values.first().map_or(0, Vec::len)
    }

    /// Check header/column counts and that every column holds R rows.
    /// Returns R on success.
    pub fn validate(&self) -> Result<usize> {
        if self.x_headers.is_empty() && self.x_values.is_empty() {
            return Err(ReshapeError::MissingKeyColumn);
        }
        check_counts(Axis::X, &self.x_headers, &self.x_values)?;
        check_counts(Axis::Y, &self.y_headers, &self.y_values)?;

        let rows = self.row_count();
        let columns = self
            .x_headers
            .iter()
            .zip(&self.x_values)
            .chain(self.y_headers.iter().zip(&self.y_values));
        for (header, column) in columns {
            if column.len() != rows {
                return Err(ReshapeError::ColumnLength {
                    header: header.clone(),
                    expected: rows,
                    actual: column.len(),
                });
            }
        }
        Ok(rows)
    }
}

fn check_counts(axis: Axis, headers: &[String], columns: &[Vec<String>]) -> Result<()> {
    if headers.len() != columns.len() {
        return Err(ReshapeError::HeaderCount { axis, headers: headers.len(), columns: columns.len() });
    }
    Ok(())
}
