//! Egg rate SDK for Rust.
//!
//! Fetches the egg mart's published rate sheet (a CSV export of a Google
//! Sheet), turns the two most recent rows into per-unit prices for the ticker
//! and headline rate, and keeps the page state a renderer draws from.
//!
//! # Quick start
//!
//! ```no_run
//! use eggrate_sdk::{EggRateSdk, TimeRange, UnitTier};
//!
//! let mut sdk = EggRateSdk::builder().build();
//!
//! // Never fails: a bad fetch leaves the built-in prices in place.
//! let dashboard = sdk.load();
//! println!("{}", dashboard.summary());
//! println!("{:?}", dashboard.quote(UnitTier::Tray));
//! let week = dashboard.chart(TimeRange::OneWeek);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod chart;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod deriver;
pub mod error;
pub mod feed;
pub mod models;

#[cfg(feature = "async")]
pub use async_client::AsyncEggRateSdk;
pub use chart::{ChartPoint, TimeRange};
pub use contact::{ContactInquiry, OutboundLink};
pub use dashboard::Dashboard;
pub use error::{EggRateError, Result};
pub use feed::{FeedClient, FeedOutcome};
pub use models::{DisplaySummary, FeedRow, PriceSnapshot, UnitQuote, UnitTier};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// EggRateSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`EggRateSdk`] instance.
///
/// Use [`EggRateSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](EggRateSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct EggRateSdkBuilder {
    feed_url: String,
    timeout: Duration,
}

impl Default for EggRateSdkBuilder {
    fn default() -> Self {
        Self {
            feed_url: config::FEED_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl EggRateSdkBuilder {
    /// Read the rate sheet from a different CSV URL.
    ///
    /// Defaults to [`config::FEED_URL`].
    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set the HTTP request timeout for the sheet download.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK. Nothing is downloaded until [`EggRateSdk::load`] or
    /// [`EggRateSdk::fetch_rows`] is called.
    pub fn build(self) -> EggRateSdk {
        EggRateSdk {
            feed: FeedClient::new(self.feed_url, self.timeout),
        }
    }
}

// ---------------------------------------------------------------------------
// EggRateSdk
// ---------------------------------------------------------------------------

/// The main entry point for the egg rate SDK.
///
/// Wraps a [`FeedClient`] and runs the two load phases: fetch-and-parse,
/// then derivation into a [`Dashboard`].
pub struct EggRateSdk {
    feed: FeedClient,
}

impl EggRateSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> EggRateSdkBuilder {
        EggRateSdkBuilder::default()
    }

    /// Download and parse the rate sheet, surfacing any error.
    pub fn fetch_rows(&mut self) -> Result<Vec<FeedRow>> {
        self.feed.fetch_rows()
    }

    /// Run one full page load.
    ///
    /// Starts from [`Dashboard::initial`] and applies the fetch outcome. A
    /// network or parse failure is logged and the fallback prices are kept.
    pub fn load(&mut self) -> Dashboard {
        let mut dashboard = Dashboard::initial();
        dashboard.apply(self.feed.fetch_rows());
        dashboard
    }

    /// Fetch the sheet and derive prices, falling back to the sample week
    /// when the sheet has no rows.
    pub fn snapshot(&mut self) -> Result<PriceSnapshot> {
        let rows = self.feed.fetch_rows()?;
        Ok(deriver::derive_or_sample(&rows))
    }

    /// URL the sheet is read from.
    pub fn feed_url(&self) -> &str {
        &self.feed.feed_url
    }

    /// Return a reference to the underlying [`FeedClient`].
    pub fn feed(&self) -> &FeedClient {
        &self.feed
    }

    /// Return a mutable reference to the underlying [`FeedClient`].
    pub fn feed_mut(&mut self) -> &mut FeedClient {
        &mut self.feed
    }

    /// Consume the SDK and release the HTTP client.
    pub fn close(mut self) {
        self.feed.close();
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for EggRateSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EggRateSdk(feed_url={})", self.feed.feed_url)
    }
}
