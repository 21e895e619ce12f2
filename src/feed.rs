//! Rate sheet download and CSV ingestion.
//!
//! Fetches the published sheet once per load and maps each non-empty line to
//! a [`FeedRow`]. Numeric coercion happens here and nowhere else: anything
//! downstream can trust that every price is a finite number.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config;
use crate::error::{EggRateError, Result};
use crate::models::FeedRow;

/// Result of one fetch-and-parse pass, handed to the dashboard as-is.
pub type FeedOutcome = Result<Vec<FeedRow>>;

// ---------------------------------------------------------------------------
// FeedClient
// ---------------------------------------------------------------------------

/// Downloads the rate sheet CSV.
pub struct FeedClient {
    /// URL of the CSV export.
    pub feed_url: String,
    timeout: Duration,
    client: Option<Client>,
}

impl FeedClient {
    pub fn new(feed_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            feed_url: feed_url.into(),
            timeout,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(config::MAX_REDIRECTS))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| EggRateError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Download the sheet and return its body as text.
    pub fn fetch_text(&mut self) -> Result<String> {
        let url = self.feed_url.clone();
        debug!(url = %url, "fetching rate sheet");
        let resp = self.client()?.get(&url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }

    /// Download and parse the sheet.
    pub fn fetch_rows(&mut self) -> Result<Vec<FeedRow>> {
        let text = self.fetch_text()?;
        let rows = parse_feed(&text)?;
        debug!(rows = rows.len(), "parsed rate sheet");
        Ok(rows)
    }

    /// Drop the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse CSV text with a header row into feed rows.
pub fn parse_feed(text: &str) -> Result<Vec<FeedRow>> {
    parse_feed_reader(text.as_bytes())
}

/// Parse a CSV export stored on disk.
pub fn read_feed_file<P: AsRef<Path>>(path: P) -> Result<Vec<FeedRow>> {
    let file = File::open(path.as_ref())?;
    parse_feed_reader(file)
}

/// Parse CSV from any reader.
///
/// Columns are looked up by header name, so their order does not matter and
/// extra columns are ignored. A missing column, a short row or a bad value
/// leaves that field at zero (or an empty date) without dropping the row.
pub fn parse_feed_reader<R: Read>(reader: R) -> Result<Vec<FeedRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let date_idx = column(config::COL_DATE);
    let wholesale_idx = column(config::COL_WHOLESALE);
    let retail_idx = column(config::COL_RETAIL);
    let nattu_idx = column(config::COL_NATTU_KOLI);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) && record.len() <= 1 {
            continue;
        }
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i));
        rows.push(FeedRow {
            date: field(date_idx).unwrap_or("").to_string(),
            wholesale_price: coerce_number(field(wholesale_idx)),
            retail_price: coerce_number(field(retail_idx)),
            nattu_koli_price: coerce_number(field(nattu_idx)),
        });
    }
    Ok(rows)
}

/// Coerce a raw CSV field to a price. Missing, blank, non-numeric and
/// non-finite values become `0.0`.
pub fn coerce_number(field: Option<&str>) -> f64 {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
