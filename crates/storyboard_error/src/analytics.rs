//! Analytics error types.

/// Specific error conditions for analytics recording.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AnalyticsErrorKind {
    /// Failed to append a record to the sink
    #[display("Failed to append analytics record: {}", _0)]
    Append(String),
    /// Failed to read records back from the sink
    #[display("Failed to read analytics records: {}", _0)]
    Read(String),
}

/// Error type for analytics operations.
///
/// # Examples
///
/// ```
/// use storyboard_error::{AnalyticsError, AnalyticsErrorKind};
///
/// let err = AnalyticsError::new(AnalyticsErrorKind::Append("disk full".to_string()));
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analytics Error: {} at line {} in {}", kind, line, file)]
pub struct AnalyticsError {
    /// The specific error condition
    pub kind: AnalyticsErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AnalyticsError {
    /// Create a new AnalyticsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalyticsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
