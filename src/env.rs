//! Environment variable names for convenient construction of a
//! [`FormatterConfig`](crate::line::FormatterConfig) from process
//! environment.
//!
//! These are purely helpers; the formatter types remain decoupled from
//! environment access.

use crate::line::FormatterConfig;

/// Set to `1`/`true`/`yes` to omit the timestamp segment.
pub const LINE_FORMAT_DISABLE_TIMESTAMP_ENV: &str = "LINE_FORMAT_DISABLE_TIMESTAMP";

/// Set to `1`/`true`/`yes` to omit the process-id segment.
pub const LINE_FORMAT_DISABLE_PID_ENV: &str = "LINE_FORMAT_DISABLE_PID";

/// Read a boolean flag from the environment; unset or unrecognized values
/// read as `false`.
pub fn env_flag(key: &str) -> bool {
    match std::env::var(key) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ),
        Err(_) => false,
    }
}

/// Build a [`FormatterConfig`] from the two `LINE_FORMAT_*` variables.
pub fn config_from_env() -> FormatterConfig {
    FormatterConfig {
        disable_timestamp: env_flag(LINE_FORMAT_DISABLE_TIMESTAMP_ENV),
        disable_pid: env_flag(LINE_FORMAT_DISABLE_PID_ENV),
    }
}
