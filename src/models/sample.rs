//! Built-in values shown before (or instead of) live feed data.

use super::feed::FeedRow;
use super::quote::{DisplaySummary, PriceSnapshot, UnitQuote, UnitTier};

/// Week of placeholder rates used for the chart when the feed yields nothing.
/// Columns are date, wholesale, retail, nattu koli.
pub const SAMPLE_ROWS: [(&str, f64, f64, f64); 7] = [
    ("Mon", 520.0, 540.0, 650.0),
    ("Tue", 525.0, 545.0, 648.0),
    ("Wed", 530.0, 550.0, 655.0),
    ("Thu", 535.0, 552.0, 660.0),
    ("Fri", 540.0, 556.0, 662.0),
    ("Sat", 538.0, 553.0, 658.0),
    ("Sun", 542.0, 558.0, 663.0),
];

pub const INITIAL_TICKER: [UnitQuote; 4] = [
    UnitQuote::new(UnitTier::Piece, 5.42, 0.0),
    UnitQuote::new(UnitTier::Tray, 162.6, 0.0),
    UnitQuote::new(UnitTier::Hundred, 542.0, 0.0),
    UnitQuote::new(UnitTier::Peti, 1138.0, 0.0),
];

pub const INITIAL_SUMMARY: DisplaySummary = DisplaySummary {
    rate: 5.42,
    change: 0.0,
    percent_change: 0.0,
    is_increase: true,
};

pub fn sample_rows() -> Vec<FeedRow> {
    SAMPLE_ROWS
        .iter()
        .map(|&(date, wholesale, retail, nattu)| FeedRow::new(date, wholesale, retail, nattu))
        .collect()
}

/// The ticker and summary shown on first paint.
pub fn initial_snapshot() -> PriceSnapshot {
    PriceSnapshot {
        quotes: INITIAL_TICKER.iter().map(|q| (q.tier, *q)).collect(),
        summary: INITIAL_SUMMARY,
    }
}
