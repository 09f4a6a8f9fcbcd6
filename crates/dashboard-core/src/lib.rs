// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; exports the payload model, reshaper and dashboard helpers.

pub mod chart;
pub mod error;
pub mod import;
pub mod legacy;
pub mod metric;
pub mod options;
pub mod paging;
pub mod payload;
pub mod reshape;
pub mod series;
pub mod time;
pub mod view;

pub use chart::ChartKind;
pub use error::{ReshapeError, Result};
pub use legacy::RowMajorPayload;
pub use metric::{Interval, MetricQuery, Stat, UnknownMetricOption};
pub use options::ReshapeOptions;
pub use paging::{append_page, DateRange};
pub use payload::TabularPayload;
pub use reshape::{reshape, Reshaper};
pub use series::{GroupValue, Row, RowKey, XCell, XGroup, XSeries, YCell, YSeries};
pub use view::{DerivedView, TableSummary};
