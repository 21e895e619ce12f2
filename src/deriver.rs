//! Unit-tier pricing derived from the two most recent feed rows.
//!
//! Everything here is a pure function of its input rows. The per-piece
//! wholesale rate is the only input; every tier is a fixed multiple of it.

use std::collections::BTreeMap;

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    initial_snapshot, sample_rows, DisplaySummary, FeedRow, PriceSnapshot, UnitQuote, UnitTier,
};

/// Round to `places` decimal places, half away from zero.
///
/// Rounds the exact binary value of `value`, not `value * 10^places`, so
/// `8.345` (stored as 8.34499...) rounds down to `8.34`.
pub fn round_to(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Derive the ticker and summary from `rows`.
///
/// "Latest" is the last row and "previous" the row before it. With a single
/// row both are the same row, so every delta is zero. Returns `None` when
/// `rows` is empty.
pub fn derive(rows: &[FeedRow]) -> Option<PriceSnapshot> {
    let latest = rows.last()?;
    let previous = if rows.len() > 1 {
        &rows[rows.len() - 2]
    } else {
        latest
    };

    let today = latest.wholesale_price;
    let yesterday = previous.wholesale_price;
    let diff = today - yesterday;

    let quotes: BTreeMap<UnitTier, UnitQuote> = UnitTier::ALL
        .iter()
        .map(|&tier| (tier, quote_tier(tier, today, yesterday)))
        .collect();

    let percent_change = if yesterday != 0.0 {
        round_to(diff / yesterday * 100.0, 2)
    } else {
        0.0
    };

    Some(PriceSnapshot {
        quotes,
        summary: DisplaySummary {
            rate: today,
            change: round_to(diff, 2),
            percent_change,
            is_increase: diff >= 0.0,
        },
    })
}

/// Like [`derive`], but substitutes the built-in sample rows for an empty
/// input.
pub fn derive_or_sample(rows: &[FeedRow]) -> PriceSnapshot {
    derive(rows).unwrap_or_else(|| derive(&sample_rows()).unwrap_or_else(initial_snapshot))
}

fn quote_tier(tier: UnitTier, today: f64, yesterday: f64) -> UnitQuote {
    let places = tier.precision();
    let unit_price = round_to(today * tier.multiplier(), places);
    let prev_price = round_to(yesterday * tier.multiplier(), places);
    UnitQuote::new(tier, unit_price, round_to(unit_price - prev_price, places))
}
