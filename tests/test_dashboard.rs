//! Dashboard state tests: fallback values, live updates and JSON output.

mod common;

use std::time::Duration;

use eggrate_sdk::models::{sample_rows, INITIAL_SUMMARY, INITIAL_TICKER};
use eggrate_sdk::{Dashboard, EggRateError, EggRateSdk, TimeRange, UnitTier};

fn initial_ticker() -> Vec<eggrate_sdk::UnitQuote> {
    INITIAL_TICKER.to_vec()
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

#[test]
fn initial_dashboard_shows_built_in_values() {
    let board = Dashboard::initial();
    assert!(!board.is_live());
    assert_eq!(board.quotes(), initial_ticker());
    assert_eq!(*board.summary(), INITIAL_SUMMARY);
    assert_eq!(board.chart_rows(), sample_rows().as_slice());
    assert_eq!(board.latest_date(), "Jan 20");
}

#[test]
fn initial_ticker_values() {
    let board = Dashboard::default();
    assert_eq!(board.quote(UnitTier::Piece).unwrap().unit_price, 5.42);
    assert_eq!(board.quote(UnitTier::Tray).unwrap().unit_price, 162.6);
    assert_eq!(board.quote(UnitTier::Hundred).unwrap().unit_price, 542.0);
    assert_eq!(board.quote(UnitTier::Peti).unwrap().unit_price, 1138.0);
    assert!(board.quotes().iter().all(|q| q.delta == 0.0));
}

#[test]
fn empty_feed_keeps_initial_values() {
    let mut board = Dashboard::initial();
    assert!(!board.apply(Ok(vec![])));
    assert_eq!(board, Dashboard::initial());
    assert_eq!(Dashboard::from_rows(vec![]), Dashboard::initial());
}

#[test]
fn failed_feed_keeps_initial_values() {
    let mut board = Dashboard::initial();
    let replaced = board.apply(Err(EggRateError::InvalidArgument("boom".into())));
    assert!(!replaced);
    assert_eq!(board.quotes(), initial_ticker());
}

#[test]
fn failed_feed_keeps_previous_live_values() {
    let mut board = Dashboard::from_rows(common::daily_rows(3));
    let before = board.clone();
    board.apply(Err(EggRateError::InvalidArgument("boom".into())));
    assert_eq!(board, before);
}

// ---------------------------------------------------------------------------
// Live data
// ---------------------------------------------------------------------------

#[test]
fn live_rows_replace_everything() {
    let rows = eggrate_sdk::feed::parse_feed(common::SHEET_CSV).unwrap();
    let board = Dashboard::from_rows(rows.clone());

    assert!(board.is_live());
    assert_eq!(board.chart_rows(), rows.as_slice());
    assert_eq!(board.latest_date(), "2026-01-20");
    assert_eq!(board.summary().rate, 5.67);
    assert_eq!(board.quote(UnitTier::Tray).unwrap().unit_price, 170.1);
}

#[test]
fn chart_uses_selected_range() {
    let board = Dashboard::from_rows(common::daily_rows(40));

    let week = board.chart(TimeRange::OneWeek);
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, "d33");
    assert_eq!(week[6].date, "d39");

    assert_eq!(board.chart(TimeRange::OneMonth).len(), 30);
    assert_eq!(board.chart(TimeRange::Max).len(), 40);
}

#[test]
fn to_json_uses_camel_case_and_labels() {
    let board = Dashboard::initial();
    let json = board.to_json(TimeRange::OneWeek).unwrap();

    assert_eq!(json["live"], false);
    assert_eq!(json["latestDate"], "Jan 20");
    assert_eq!(json["range"], "1W");
    assert_eq!(json["summary"]["rate"], 5.42);
    assert_eq!(json["summary"]["percentChange"], 0.0);
    assert_eq!(json["summary"]["isIncrease"], true);
    assert_eq!(json["ticker"][1]["label"], "Tray (30)");
    assert_eq!(json["ticker"][1]["unitPrice"], 162.6);
    assert_eq!(json["ticker"][3]["label"], "Peti (210)");
    assert_eq!(json["chart"].as_array().unwrap().len(), 7);
    assert_eq!(json["chart"][6]["date"], "Sun");
    assert_eq!(json["chart"][6]["wholesale"], 542.0);
}

// ---------------------------------------------------------------------------
// EggRateSdk::load
// ---------------------------------------------------------------------------

#[test]
fn load_applies_fetched_rows() {
    let mut sdk = EggRateSdk::builder()
        .feed_url(common::serve_sheet())
        .timeout(Duration::from_secs(5))
        .build();

    let board = sdk.load();
    assert!(board.is_live());
    assert_eq!(board.summary().change, 0.07);
    assert_eq!(board.summary().percent_change, 1.25);
}

#[test]
fn load_falls_back_when_fetch_fails() {
    let mut sdk = EggRateSdk::builder()
        .feed_url(common::unreachable_url())
        .timeout(Duration::from_secs(5))
        .build();

    let board = sdk.load();
    assert_eq!(board, Dashboard::initial());
}

#[test]
fn load_falls_back_for_header_only_sheet() {
    let url = common::serve_once("200 OK", "", "Date,Normal_Wholesale,Normal_Retail,Nattu_Koli_Price\n");
    let mut sdk = EggRateSdk::builder().feed_url(url).build();
    assert_eq!(sdk.load(), Dashboard::initial());
}

#[test]
fn snapshot_uses_sample_for_empty_sheet() {
    let url = common::serve_once("200 OK", "", "Date,Normal_Wholesale,Normal_Retail,Nattu_Koli_Price\n");
    let mut sdk = EggRateSdk::builder().feed_url(url).build();
    let snap = sdk.snapshot().unwrap();
    assert_eq!(snap.summary.rate, 542.0);
    assert_eq!(snap.summary.percent_change, 0.74);
}

#[test]
fn builder_defaults_to_published_sheet() {
    let sdk = EggRateSdk::builder().build();
    assert_eq!(sdk.feed_url(), eggrate_sdk::config::FEED_URL);
    assert!(sdk.to_string().starts_with("EggRateSdk(feed_url=https://docs.google.com/"));
}
