// File: crates/dashboard-core/src/paging.rs
// Summary: Date-range paging arithmetic and page merging for appended (scrolled) results.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Axis, ReshapeError, Result};
use crate::payload::TabularPayload;

/// One day in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// Query window in epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DateRange {
    pub const fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    pub const fn width_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// The window of equal width ending where this one starts.
    pub const fn previous(&self) -> Self {
        let width = self.width_ms();
        Self { start_ms: self.start_ms - width, end_ms: self.start_ms }
    }

    /// The window of equal width starting where this one ends.
    pub const fn next(&self) -> Self {
        let width = self.width_ms();
        Self { start_ms: self.end_ms, end_ms: self.end_ms + width }
    }

    /// Single-day view one day before the start.
    pub const fn previous_day(&self) -> Self {
        let start = self.start_ms - DAY_MS;
        Self { start_ms: start, end_ms: start }
    }

    /// Single-day view one day after the start.
    pub const fn next_day(&self) -> Self {
        let start = self.start_ms + DAY_MS;
        Self { start_ms: start, end_ms: start }
    }
}

/// Concatenate `page` onto `base`, column by column.
///
/// Both payloads must be well formed and carry identical x and y headers.
/// Labels and `dateFormat` are taken from `base`. Neither input is modified.
pub fn append_page(base: &TabularPayload, page: &TabularPayload) -> Result<TabularPayload> {
    let base_rows = base.validate()?;
    let page_rows = page.validate()?;
    if base.x_headers != page.x_headers {
        return Err(ReshapeError::HeaderMismatch { axis: Axis::X });
    }
    if base.y_headers != page.y_headers {
        return Err(ReshapeError::HeaderMismatch { axis: Axis::Y });
    }
    debug!(base_rows, page_rows, "appending page");

    Ok(TabularPayload {
        x_headers: base.x_headers.clone(),
        x_values: concat_columns(&base.x_values, &page.x_values),
        y_headers: base.y_headers.clone(),
        y_values: concat_columns(&base.y_values, &page.y_values),
        x_label: base.x_label.clone(),
        y_label: base.y_label.clone(),
        date_format: base.date_format.clone(),
    })
}

fn concat_columns(base: &[Vec<String>], page: &[Vec<String>]) -> Vec<Vec<String>> {
    base.iter()
        .zip(page)
        .map(|(a, b)| a.iter().chain(b).cloned().collect())
        .collect()
}
