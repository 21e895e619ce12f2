//! Async wrapper around [`EggRateSdk`] for use in async runtimes (Tokio, etc.).
//!
//! The sheet download uses reqwest's blocking client, so every operation is
//! moved onto the blocking thread pool via [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```no_run
//! use eggrate_sdk::AsyncEggRateSdk;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncEggRateSdk::builder().build();
//!
//!     // Render the fallback prices now, pick up live ones when they land.
//!     let mut board = sdk.spawn_load();
//!     println!("{}", board.borrow().summary());
//!     if board.changed().await.is_ok() {
//!         println!("{}", board.borrow().summary());
//!     }
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;

use crate::dashboard::Dashboard;
use crate::error::{EggRateError, Result};
use crate::models::FeedRow;
use crate::EggRateSdk;

// ---------------------------------------------------------------------------
// AsyncEggRateSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncEggRateSdk`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncEggRateSdkBuilder {
    inner: crate::EggRateSdkBuilder,
}

impl AsyncEggRateSdkBuilder {
    /// Read the rate sheet from a different CSV URL.
    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.feed_url(url);
        self
    }

    /// Set the HTTP request timeout for the sheet download.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn build(self) -> AsyncEggRateSdk {
        AsyncEggRateSdk {
            inner: Arc::new(Mutex::new(self.inner.build())),
        }
    }
}

// ---------------------------------------------------------------------------
// AsyncEggRateSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`EggRateSdk`].
///
/// The underlying [`EggRateSdk`] sits behind a [`Mutex`] because its HTTP
/// client is created lazily through `&mut self`.
#[derive(Clone)]
pub struct AsyncEggRateSdk {
    inner: Arc<Mutex<EggRateSdk>>,
}

impl AsyncEggRateSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncEggRateSdkBuilder {
        AsyncEggRateSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut EggRateSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| EggRateError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| EggRateError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Download and parse the rate sheet asynchronously.
    pub async fn fetch_rows(&self) -> Result<Vec<FeedRow>> {
        self.run(|s| s.fetch_rows()).await
    }

    /// Run one full page load and wait for it.
    pub async fn load(&self) -> Result<Dashboard> {
        self.run(|s| Ok(s.load())).await
    }

    /// Start a page load in the background.
    ///
    /// The returned receiver holds [`Dashboard::initial`] right away. It is
    /// updated at most once, when the fetch succeeds with at least one row.
    /// There is no cancellation; dropping the receiver just discards the
    /// result. Must be called from within a Tokio runtime.
    pub fn spawn_load(&self) -> watch::Receiver<Dashboard> {
        let (tx, rx) = watch::channel(Dashboard::initial());
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let outcome = match sdk.lock() {
                Ok(mut guard) => guard.fetch_rows(),
                Err(_) => Err(EggRateError::InvalidArgument("SDK lock poisoned".into())),
            };
            tx.send_if_modified(|dashboard| dashboard.apply(outcome));
        });
        rx
    }
}
