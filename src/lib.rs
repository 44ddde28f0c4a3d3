//! Single-line log formatter with a fixed segment order.
//!
//! A [`line::LineFormatter`] turns one [`record::LogRecord`] into one
//! newline-terminated line of text:
//!
//! ```text
//! 2026-08-26T10:15:04+02:00 [INFO] [1a2b] [handle_request()] [server.rs:42] accepted [peer:10.0.0.7]
//! ```
//!
//! Segment order is fixed; the timestamp and process-id segments can be
//! disabled at construction, caller segments appear only when the host
//! pipeline captured a call site, and user fields render sorted by key.
//! Formatting never fails and performs no I/O; the host pipeline writes the
//! returned bytes to its sink.

pub mod env;
pub mod formatter;
pub mod level;
pub mod line;
pub mod record;
