use crate::formatter::RecordFormatter;
use crate::level::Level;
use crate::record::LogRecord;
use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendered width of the level token, in characters.
const LEVEL_WIDTH: usize = 4;

/// Construction-time options of a [`LineFormatter`]. Immutable after the
/// formatter is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Omit the leading local-time timestamp segment.
    pub disable_timestamp: bool,
    /// Omit the bracketed hex process-id segment.
    pub disable_pid: bool,
}

/// Renders a [`LogRecord`] into one space-separated, newline-terminated
/// line with a fixed segment order:
///
/// ```text
/// <timestamp> [LEVL] [pid] [func()] [file:line] message [key:value]...
/// ```
///
/// The timestamp and pid segments can be disabled via [`FormatterConfig`];
/// caller segments appear only when the record carries caller info; the
/// message is omitted when it trims to empty. Field segments are sorted by
/// key in ascending byte order, so output is deterministic for a given
/// record and config.
///
/// The formatter holds no mutable state, only the config flags and the
/// process id captured at construction, so one instance can be shared
/// across threads and reused for any number of independent calls.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    config: FormatterConfig,
    pid: u32,
}

impl LineFormatter {
    /// Build a formatter that stamps lines with the current process id.
    pub fn new(config: FormatterConfig) -> Self {
        Self::with_pid(config, std::process::id())
    }

    /// Build a formatter with a fixed process id. Substituting a known
    /// value here makes output reproducible in tests.
    pub fn with_pid(config: FormatterConfig, pid: u32) -> Self {
        Self { config, pid }
    }

    /// Render `record` into a fresh buffer, trailing line break included.
    /// Never fails: an entirely empty record still yields a valid line.
    pub fn format(&self, record: &LogRecord) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);
        self.format_into(record, &mut buf);
        buf
    }

    /// Render `record` by appending to a caller-owned buffer.
    ///
    /// Only appends; existing buffer content is left untouched and does not
    /// cause a leading separator before the first segment of this line. The
    /// buffer is borrowed for the duration of the call and not retained.
    pub fn format_into(&self, record: &LogRecord, buf: &mut Vec<u8>) {
        let start = buf.len();

        if !self.config.disable_timestamp {
            let ts = record
                .timestamp
                .with_timezone(&Local)
                .to_rfc3339_opts(SecondsFormat::Secs, true);
            push_bare(buf, start, &ts);
        }

        push_bracketed(buf, start, &level_token(record.level));

        if !self.config.disable_pid {
            // Minimum width, not a cap: pids above 0xffff keep all digits.
            push_bracketed(buf, start, &format!("{:04x}", self.pid));
        }

        // The function and file:line segments appear together or not at all.
        if let Some(caller) = &record.caller {
            push_bracketed(buf, start, &format!("{}()", base_name(&caller.function)));
            push_bracketed(
                buf,
                start,
                &format!("{}:{}", base_name(&caller.file), caller.line),
            );
        }

        if let Some(message) = &record.message {
            let trimmed = message.trim();
            if !trimmed.is_empty() {
                push_bare(buf, start, trimmed);
            }
        }

        // BTreeMap iteration is already in ascending byte order. Keys that
        // trim to empty are dropped so no key-less "[:value]" artifact can
        // appear; surviving keys render untrimmed.
        for (key, value) in &record.fields {
            if key.trim().is_empty() {
                continue;
            }
            push_field(buf, start, key, value);
        }

        buf.push(b'\n');
    }
}

impl RecordFormatter for LineFormatter {
    fn format(&self, record: &LogRecord) -> Vec<u8> {
        LineFormatter::format(self, record)
    }
}

/// Uppercase the level name and truncate to [`LEVEL_WIDTH`] characters.
///
/// Relies on the [`Level`] precondition that every name is ASCII and at
/// least [`LEVEL_WIDTH`] characters long; a shorter custom name would be an
/// upstream contract violation, not a case handled here.
fn level_token(level: Level) -> String {
    let mut token = level.as_str().to_ascii_uppercase();
    token.truncate(LEVEL_WIDTH);
    token
}

/// Last `/`-separated component of a path or qualified name.
fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn push_separator(buf: &mut Vec<u8>, start: usize) {
    if buf.len() > start {
        buf.push(b' ');
    }
}

fn push_bare(buf: &mut Vec<u8>, start: usize, token: &str) {
    push_separator(buf, start);
    buf.extend_from_slice(token.as_bytes());
}

fn push_bracketed(buf: &mut Vec<u8>, start: usize, token: &str) {
    push_separator(buf, start);
    buf.push(b'[');
    buf.extend_from_slice(token.as_bytes());
    buf.push(b']');
}

fn push_field(buf: &mut Vec<u8>, start: usize, key: &str, value: &Value) {
    push_separator(buf, start);
    buf.push(b'[');
    buf.extend_from_slice(key.as_bytes());
    buf.push(b':');
    push_value(buf, value);
    buf.push(b']');
}

/// Natural text rendering per value variant: strings verbatim (unquoted),
/// integers in decimal, floats via their default formatting, booleans as
/// `true`/`false`, null as `null`, composites as compact JSON.
fn push_value(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::String(s) => buf.extend_from_slice(s.as_bytes()),
        Value::Bool(true) => buf.extend_from_slice(b"true"),
        Value::Bool(false) => buf.extend_from_slice(b"false"),
        Value::Number(n) => buf.extend_from_slice(n.to_string().as_bytes()),
        Value::Null => buf.extend_from_slice(b"null"),
        composite => buf.extend_from_slice(composite.to_string().as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_tokens_are_four_uppercase_chars() {
        let expected = [
            (Level::Trace, "TRAC"),
            (Level::Debug, "DEBU"),
            (Level::Info, "INFO"),
            (Level::Warn, "WARN"),
            (Level::Error, "ERRO"),
            (Level::Fatal, "FATA"),
            (Level::Panic, "PANI"),
        ];
        for (level, token) in expected {
            assert_eq!(level_token(level), token);
        }
    }

    #[test]
    fn base_name_keeps_last_path_component() {
        assert_eq!(base_name("github.com/user/pkg.Handler"), "pkg.Handler");
        assert_eq!(base_name("src/server/listener.rs"), "listener.rs");
        assert_eq!(base_name("main.rs"), "main.rs");
        assert_eq!(base_name(""), "");
    }

    #[test]
    fn separator_only_after_first_segment() {
        let mut buf = Vec::new();
        push_bare(&mut buf, 0, "first");
        push_bare(&mut buf, 0, "second");
        assert_eq!(buf, b"first second");
    }

    #[test]
    fn separator_ignores_content_before_start_offset() {
        let mut buf = b"previous line\n".to_vec();
        let start = buf.len();
        push_bare(&mut buf, start, "first");
        assert_eq!(&buf[start..], b"first");
    }

    #[test]
    fn value_rendering_per_variant() {
        let cases = [
            (serde_json::json!("plain"), "plain"),
            (serde_json::json!(1024), "1024"),
            (serde_json::json!(-7), "-7"),
            (serde_json::json!(2.5), "2.5"),
            (serde_json::json!(true), "true"),
            (serde_json::json!(false), "false"),
            (serde_json::json!(null), "null"),
            (serde_json::json!([1, 2]), "[1,2]"),
        ];
        for (value, expected) in cases {
            let mut buf = Vec::new();
            push_value(&mut buf, &value);
            assert_eq!(buf, expected.as_bytes());
        }
    }
}
