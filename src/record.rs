use crate::level::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Call-site attribution captured by the host pipeline when its caller
/// capture feature is enabled.
#[derive(Debug, Clone, Serialize)]
pub struct CallerInfo {
    /// Fully qualified function name; the renderer keeps only the last
    /// `/`-separated path component.
    pub function: String,
    /// Source file path; rendered as its base name.
    pub file: String,
    pub line: u32,
}

/// One structured log entry, fully populated by the host pipeline before it
/// reaches the formatter.
///
/// Field keys are unique and iterate in ascending byte order via the
/// [`BTreeMap`]; that order is the output order for the variable section of
/// the rendered line. Insertion order is irrelevant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub caller: Option<CallerInfo>,
    pub message: Option<String>,
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogRecord {
    /// Whether caller capture populated this record. The renderer checks
    /// this before touching caller fields; the function and file:line
    /// segments always appear together or not at all.
    pub fn has_caller(&self) -> bool {
        self.caller.is_some()
    }
}
