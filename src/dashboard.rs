//! In-memory page state observed by the rendering layer.
//!
//! A [`Dashboard`] starts from the built-in fallback values and is replaced
//! wholesale by [`Dashboard::apply`] once the feed outcome arrives. A failed
//! or empty fetch is logged and otherwise ignored, so there is always
//! something to render.

use serde::Serialize;
use tracing::{debug, warn};

use crate::chart::{self, ChartPoint, TimeRange};
use crate::config;
use crate::deriver;
use crate::error::Result;
use crate::feed::FeedOutcome;
use crate::models::{
    initial_snapshot, sample_rows, DisplaySummary, FeedRow, PriceSnapshot, UnitQuote, UnitTier,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    rows: Vec<FeedRow>,
    snapshot: PriceSnapshot,
    live: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::initial()
    }
}

impl Dashboard {
    /// First-paint state: sample chart rows with the initial ticker.
    pub fn initial() -> Self {
        Self {
            rows: sample_rows(),
            snapshot: initial_snapshot(),
            live: false,
        }
    }

    /// Build the state straight from feed rows. Empty input yields the
    /// initial state.
    pub fn from_rows(rows: Vec<FeedRow>) -> Self {
        let mut dashboard = Self::initial();
        dashboard.apply(Ok(rows));
        dashboard
    }

    /// Fold one feed outcome into the state.
    ///
    /// Returns `true` when the state was replaced.
    pub fn apply(&mut self, outcome: FeedOutcome) -> bool {
        let rows = match outcome {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "rate sheet unavailable, keeping current prices");
                return false;
            }
        };
        let Some(snapshot) = deriver::derive(&rows) else {
            warn!("rate sheet has no rows, keeping current prices");
            return false;
        };
        debug!(rows = rows.len(), rate = snapshot.summary.rate, "prices updated");
        self.rows = rows;
        self.snapshot = snapshot;
        self.live = true;
        true
    }

    /// Whether the prices come from the feed rather than the fallback values.
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn snapshot(&self) -> &PriceSnapshot {
        &self.snapshot
    }

    /// Ticker entries in display order.
    pub fn quotes(&self) -> Vec<UnitQuote> {
        self.snapshot.ticker()
    }

    pub fn quote(&self, tier: UnitTier) -> Option<&UnitQuote> {
        self.snapshot.quote(tier)
    }

    pub fn summary(&self) -> &DisplaySummary {
        &self.snapshot.summary
    }

    /// Rows behind the chart: live rows once loaded, the sample week before.
    pub fn chart_rows(&self) -> &[FeedRow] {
        &self.rows
    }

    pub fn chart(&self, range: TimeRange) -> Vec<ChartPoint> {
        chart::series(&self.rows, range)
    }

    /// Label for the "Date" stat card.
    pub fn latest_date(&self) -> &str {
        if !self.live {
            return config::FALLBACK_DATE_LABEL;
        }
        self.rows
            .last()
            .map(|r| r.date.as_str())
            .unwrap_or(config::FALLBACK_DATE_LABEL)
    }

    /// JSON view of the state for a web front end.
    pub fn to_json(&self, range: TimeRange) -> Result<serde_json::Value> {
        let view = DashboardView {
            live: self.live,
            latest_date: self.latest_date(),
            summary: &self.snapshot.summary,
            ticker: self.quotes(),
            range,
            chart: self.chart(range),
        };
        Ok(serde_json::to_value(view)?)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView<'a> {
    live: bool,
    latest_date: &'a str,
    summary: &'a DisplaySummary,
    ticker: Vec<UnitQuote>,
    range: TimeRange,
    chart: Vec<ChartPoint>,
}
