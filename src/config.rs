use std::time::Duration;

/// Published CSV export of the daily rate sheet.
pub const FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTLvWxgNikb-cPpcniuYQoGPuJiFzWQj2hQLcX34NDYrIfdT8eQy8FDcIujsP4DCQbmOsS7jjoFxHYX/pub?output=csv";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The publish link answers with a redirect to the googleusercontent host.
pub const MAX_REDIRECTS: usize = 10;

// Feed columns
pub const COL_DATE: &str = "Date";
pub const COL_WHOLESALE: &str = "Normal_Wholesale";
pub const COL_RETAIL: &str = "Normal_Retail";
pub const COL_NATTU_KOLI: &str = "Nattu_Koli_Price";

// Outbound links
pub const WHATSAPP_NUMBER: &str = "919360432189";
pub const WHATSAPP_URL: &str = "https://wa.me/919360432189";
pub const MAPS_URL: &str = "https://maps.app.goo.gl/MiF429qLLU8qY8DC8?g_st=iw";
pub const INSTAGRAM_URL: &str =
    "https://www.instagram.com/shakthiveleggmart?igsh=MXFranM3ZWYwbHgyZg%3D%3D&utm_source=qr";

/// Shown in the "Date" stat card until live rows arrive.
pub const FALLBACK_DATE_LABEL: &str = "Jan 20";
