use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FeedRow — One parsed line of the rate sheet
// ---------------------------------------------------------------------------

/// A single day of the published rate sheet.
///
/// Numeric fields have already been coerced at the ingestion boundary, so a
/// value the sheet could not express as a number shows up here as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRow {
    pub date: String,
    /// Per-piece wholesale rate. Every unit tier is derived from this.
    pub wholesale_price: f64,
    pub retail_price: f64,
    pub nattu_koli_price: f64,
}

impl FeedRow {
    pub fn new(
        date: impl Into<String>,
        wholesale_price: f64,
        retail_price: f64,
        nattu_koli_price: f64,
    ) -> Self {
        Self {
            date: date.into(),
            wholesale_price,
            retail_price,
            nattu_koli_price,
        }
    }
}
