//! Shared test fixtures for the egg rate SDK integration tests.
//!
//! Provides sample sheet text and a one-shot HTTP server so fetch paths can
//! be exercised without reaching the published sheet.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use eggrate_sdk::FeedRow;

/// Three days of rates with an extra column the SDK ignores.
pub const SHEET_CSV: &str = "\
Date,Normal_Wholesale,Normal_Retail,Nattu_Koli_Price,Notes
2026-01-18,5.50,5.80,12.00,
2026-01-19,5.60,5.90,12.00,steady

2026-01-20,5.67,6.00,12.50,
";

/// Build a row with only the wholesale price set.
pub fn wholesale_row(date: &str, wholesale: f64) -> FeedRow {
    FeedRow::new(date, wholesale, 0.0, 0.0)
}

/// `count` consecutive daily rows, wholesale rising by one paisa per day.
pub fn daily_rows(count: usize) -> Vec<FeedRow> {
    (0..count)
        .map(|i| wholesale_row(&format!("d{}", i), 5.0 + i as f64 / 100.0))
        .collect()
}

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the URL to request. The server thread exits after the first
/// connection.
pub fn serve_once(status: &str, extra_headers: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n{}",
        status,
        body.len(),
        extra_headers,
        body
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/pub?output=csv", addr)
}

/// Serve the sample sheet once with a 200.
pub fn serve_sheet() -> String {
    serve_once("200 OK", "", SHEET_CSV)
}

/// A URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/pub?output=csv", addr)
}
