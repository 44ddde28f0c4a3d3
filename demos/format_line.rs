//! Renders a few records to stdout, showing the fixed segment order and the
//! effect of the two config toggles.
//!
//! Run with `cargo run --example format_line`.

use chrono::Utc;
use logline_formatter::level::Level;
use logline_formatter::line::{FormatterConfig, LineFormatter};
use logline_formatter::record::{CallerInfo, LogRecord};
use std::io::Write;

fn main() {
    let mut record = LogRecord {
        timestamp: Utc::now(),
        level: Level::Info,
        message: Some("accepted connection".to_string()),
        ..LogRecord::default()
    };
    record
        .fields
        .insert("peer".to_string(), serde_json::json!("10.0.0.7"));
    record
        .fields
        .insert("attempt".to_string(), serde_json::json!(1));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let full = LineFormatter::new(FormatterConfig::default());
    out.write_all(&full.format(&record)).unwrap();

    record.caller = Some(CallerInfo {
        function: "accept_loop".to_string(),
        file: "src/server.rs".to_string(),
        line: 42,
    });
    out.write_all(&full.format(&record)).unwrap();

    let quiet = LineFormatter::new(FormatterConfig {
        disable_timestamp: true,
        disable_pid: true,
    });
    out.write_all(&quiet.format(&record)).unwrap();
}
