// File: crates/dashboard-core/src/options.rs
// Summary: Facet flags selecting which derived views the reshaper produces.

use serde::{Deserialize, Serialize};

/// Every flag defaults to false. Unknown keys in JSON are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReshapeOptions {
    pub rows: bool,
    pub y_series: bool,
    pub x_min_max: bool,
    pub y_min_max: bool,
    pub group_by_x: bool,
    /// Parse the key column as epoch-millisecond timestamps regardless of its header.
    pub time_series: bool,
}

impl ReshapeOptions {
    pub const fn new() -> Self {
        Self {
            rows: false,
            y_series: false,
            x_min_max: false,
            y_min_max: false,
            group_by_x: false,
            time_series: false,
        }
    }

    /// All facets on; `time_series` is left untouched.
    pub const fn all() -> Self {
        Self {
            rows: true,
            y_series: true,
            x_min_max: true,
            y_min_max: true,
            group_by_x: true,
            time_series: false,
        }
    }

    pub const fn with_rows(mut self) -> Self { self.rows = true; self }
    pub const fn with_y_series(mut self) -> Self { self.y_series = true; self }
    pub const fn with_x_min_max(mut self) -> Self { self.x_min_max = true; self }
    pub const fn with_y_min_max(mut self) -> Self { self.y_min_max = true; self }
    pub const fn with_group_by_x(mut self) -> Self { self.group_by_x = true; self }
    pub const fn with_time_series(mut self) -> Self { self.time_series = true; self }

    /// Flag-wise union, used when a preset is overlaid with caller flags.
    pub const fn union(self, other: Self) -> Self {
        Self {
            rows: self.rows || other.rows,
            y_series: self.y_series || other.y_series,
            x_min_max: self.x_min_max || other.x_min_max,
            y_min_max: self.y_min_max || other.y_min_max,
            group_by_x: self.group_by_x || other.group_by_x,
            time_series: self.time_series || other.time_series,
        }
    }

    /// Names of the requested facets, for logging.
    pub fn facet_names(&self) -> Vec<&'static str> {
        [
            (self.rows, "rows"),
            (self.y_series, "ySeries"),
            (self.x_min_max, "xMinMax"),
            (self.y_min_max, "yMinMax"),
            (self.group_by_x, "groupByX"),
            (self.time_series, "timeSeries"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}
