use crate::record::LogRecord;

/// Renderer of a single [`LogRecord`] into one line of bytes.
///
/// The host pipeline holds an implementation polymorphically and calls
/// `format` once per record it decides to emit; the pipeline owns the sink
/// that receives the returned bytes.
pub trait RecordFormatter: Send + Sync {
    /// Render one record into a single newline-terminated line.
    ///
    /// **Parameters**
    /// - `record`: fully-populated [`LogRecord`] produced by the pipeline.
    ///
    /// **Returns**
    ///
    /// The rendered bytes, including the trailing line break. This call has
    /// no error path: any record, including an entirely empty one, produces
    /// a valid line. Absent optional data is omitted, never substituted.
    fn format(&self, record: &LogRecord) -> Vec<u8>;
}
