use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a [`LogRecord`](crate::record::LogRecord), ordered from least
/// to most severe.
///
/// Every name is ASCII and at least 4 characters long; the line renderer
/// truncates the uppercased name to exactly 4 characters and relies on this
/// as a precondition rather than checking it at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Level {
    /// Lowercase name of the level, as the host pipeline spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
