use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// UnitTier — Sales units shown in the ticker
// ---------------------------------------------------------------------------

/// One of the four sales units. Declaration order is ticker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitTier {
    #[serde(rename = "Piece")]
    Piece,
    #[serde(rename = "Tray (30)")]
    Tray,
    #[serde(rename = "100 Pcs")]
    Hundred,
    #[serde(rename = "Peti (210)")]
    Peti,
}

impl UnitTier {
    pub const ALL: [UnitTier; 4] = [
        UnitTier::Piece,
        UnitTier::Tray,
        UnitTier::Hundred,
        UnitTier::Peti,
    ];

    /// Number of pieces in one unit of this tier.
    pub fn multiplier(self) -> f64 {
        match self {
            UnitTier::Piece => 1.0,
            UnitTier::Tray => 30.0,
            UnitTier::Hundred => 100.0,
            UnitTier::Peti => 210.0,
        }
    }

    /// Decimal places kept for prices and deltas of this tier.
    pub fn precision(self) -> u32 {
        match self {
            UnitTier::Peti => 0,
            _ => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UnitTier::Piece => "Piece",
            UnitTier::Tray => "Tray (30)",
            UnitTier::Hundred => "100 Pcs",
            UnitTier::Peti => "Peti (210)",
        }
    }
}

impl fmt::Display for UnitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// UnitQuote — Scaled price and day-over-day delta for one tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitQuote {
    #[serde(rename = "label")]
    pub tier: UnitTier,
    pub unit_price: f64,
    pub delta: f64,
}

impl UnitQuote {
    pub const fn new(tier: UnitTier, unit_price: f64, delta: f64) -> Self {
        Self {
            tier,
            unit_price,
            delta,
        }
    }

    pub fn unit_label(&self) -> &'static str {
        self.tier.label()
    }
}

impl fmt::Display for UnitQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.tier.precision() as usize;
        let arrow = if self.delta >= 0.0 { '▲' } else { '▼' };
        write!(
            f,
            "{}: ₹{:.*} {} {:.*}",
            self.tier.label(),
            places,
            self.unit_price,
            arrow,
            places,
            self.delta.abs()
        )
    }
}

// ---------------------------------------------------------------------------
// DisplaySummary — Headline rate for the Piece tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySummary {
    pub rate: f64,
    pub change: f64,
    pub percent_change: f64,
    /// A zero change counts as an increase.
    pub is_increase: bool,
}

impl fmt::Display for DisplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_increase { '+' } else { '-' };
        write!(
            f,
            "₹{:.2} {}{:.2} ({}{:.2}%)",
            self.rate,
            sign,
            self.change.abs(),
            sign,
            self.percent_change.abs()
        )
    }
}

// ---------------------------------------------------------------------------
// PriceSnapshot — Everything the deriver produces from one set of rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub quotes: BTreeMap<UnitTier, UnitQuote>,
    pub summary: DisplaySummary,
}

impl PriceSnapshot {
    pub fn quote(&self, tier: UnitTier) -> Option<&UnitQuote> {
        self.quotes.get(&tier)
    }

    /// Quotes in ticker order.
    pub fn ticker(&self) -> Vec<UnitQuote> {
        self.quotes.values().copied().collect()
    }
}
