// File: crates/dashboard-core/src/metric.rs
// Summary: Metric selection (chart type, statistic, interval, range) and its data query string.

use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chart::ChartKind;
use crate::paging::DateRange;

/// Data endpoint path the query is issued against.
pub const DATA_ENDPOINT: &str = "data";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Avg,
    Max,
    N,
}

impl Stat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Avg => "avg",
            Stat::Max => "max",
            Stat::N => "n",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Day,
    Hour,
    /// Three-minute buckets.
    M3,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Hour => "hour",
            Interval::M3 => "m3",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown {option} '{value}' (expected {expected})")]
pub struct UnknownMetricOption {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for Stat {
    type Err = UnknownMetricOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Stat::Avg, Stat::Max, Stat::N]
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMetricOption { option: "stat", value: s.to_string(), expected: "avg, max or n" })
    }
}

impl FromStr for Interval {
    type Err = UnknownMetricOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Interval::Day, Interval::Hour, Interval::M3]
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMetricOption {
                option: "interval",
                value: s.to_string(),
                expected: "day, hour or m3",
            })
    }
}

/// What the dashboard currently shows; every control change produces a new query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricQuery {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl MetricQuery {
    pub fn new(kind: ChartKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into(), stat: None, interval: None, start: None, end: None }
    }

    pub fn with_stat(mut self, stat: Stat) -> Self {
        self.stat = Some(stat);
        self
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.start = Some(range.start_ms);
        self.end = Some(range.end_ms);
        self
    }

    /// The current window, when both ends are set.
    pub fn range(&self) -> Option<DateRange> {
        Some(DateRange::new(self.start?, self.end?))
    }

    /// Relative URL of the data request,
    /// e.g. `data?type=line&metric=7&stat=avg&interval=day&start=..&end=..`.
    pub fn to_query(&self) -> String {
        let mut q = format!(
            "{DATA_ENDPOINT}?type={}&metric={}",
            self.kind.as_str(),
            urlencoding::encode(&self.id)
        );
        // Writing into a String cannot fail.
        if let Some(stat) = self.stat {
            let _ = write!(q, "&stat={}", stat.as_str());
        }
        if let Some(interval) = self.interval {
            let _ = write!(q, "&interval={}", interval.as_str());
        }
        if let Some(start) = self.start {
            let _ = write!(q, "&start={start}");
        }
        if let Some(end) = self.end {
            let _ = write!(q, "&end={end}");
        }
        q
    }
}
