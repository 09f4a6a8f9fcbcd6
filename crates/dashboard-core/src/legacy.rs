// File: crates/dashboard-core/src/legacy.rs
// Summary: Row-major payload used by the first chart endpoints, converted to the column-major form.

use serde::{Deserialize, Serialize};

use crate::error::{ReshapeError, Result};
use crate::payload::TabularPayload;

/// `headers` names every column, `values` holds one entry per row. Column 0 is
/// the x column; every other column is a y series. `name` labels the y axis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowMajorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub headers: Vec<String>,
    pub values: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl RowMajorPayload {
    pub fn from_json_str(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Transpose into a [`TabularPayload`]. The x header doubles as the x label.
    pub fn to_tabular(&self) -> Result<TabularPayload> {
        let Some((x_header, y_headers)) = self.headers.split_first() else {
            return Err(ReshapeError::MissingKeyColumn);
        };
        let width = self.headers.len();
        for (row, cells) in self.values.iter().enumerate() {
            if cells.len() != width {
                return Err(ReshapeError::RaggedRow { row, expected: width, actual: cells.len() });
            }
        }

        let column = |c: usize| self.values.iter().map(|cells| cells[c].clone()).collect::<Vec<_>>();
        Ok(TabularPayload {
            x_headers: vec![x_header.clone()],
            x_values: vec![column(0)],
            y_headers: y_headers.to_vec(),
            y_values: (1..width).map(column).collect(),
            x_label: Some(x_header.clone()),
            y_label: self.name.clone(),
            date_format: self.date_format.clone(),
        })
    }
}

impl TryFrom<&RowMajorPayload> for TabularPayload {
    type Error = ReshapeError;

    fn try_from(value: &RowMajorPayload) -> Result<Self> {
        value.to_tabular()
    }
}
