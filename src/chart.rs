//! Time-range selection for the rate history chart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EggRateError;
use crate::models::FeedRow;

/// Range tabs above the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "Max")]
    Max,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::OneWeek, TimeRange::OneMonth, TimeRange::Max];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneWeek => "1W",
            TimeRange::OneMonth => "1M",
            TimeRange::Max => "Max",
        }
    }

    /// Number of trailing rows (one per day) the range covers, or `None` for
    /// the whole series.
    pub fn days(self) -> Option<usize> {
        match self {
            TimeRange::OneWeek => Some(7),
            TimeRange::OneMonth => Some(30),
            TimeRange::Max => None,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = EggRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EggRateError::InvalidArgument(format!("Unknown time range: {}", s)))
    }
}

/// One point of the chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub wholesale: f64,
    pub retail: f64,
    pub nattu: f64,
}

impl From<&FeedRow> for ChartPoint {
    fn from(row: &FeedRow) -> Self {
        Self {
            date: row.date.clone(),
            wholesale: row.wholesale_price,
            retail: row.retail_price,
            nattu: row.nattu_koli_price,
        }
    }
}

/// The most recent rows covered by `range`, oldest first.
pub fn window(rows: &[FeedRow], range: TimeRange) -> &[FeedRow] {
    match range.days() {
        Some(days) if rows.len() > days => &rows[rows.len() - days..],
        _ => rows,
    }
}

/// Chart series for `range`.
pub fn series(rows: &[FeedRow], range: TimeRange) -> Vec<ChartPoint> {
    window(rows, range).iter().map(ChartPoint::from).collect()
}
