//! Top-level error wrapper types.

use crate::{AnalyticsError, ConfigError, JsonError, StorageError};

/// Every failure the storyboard layers can report.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardError, JsonError};
///
/// let json_err = JsonError::new("trailing characters");
/// let err: StoryboardError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// History storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Analytics recording error
    #[from(AnalyticsError)]
    Analytics(AnalyticsError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardError, StoryboardResult, ConfigError};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryboardErrorKind
impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyboard operations.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardResult, ConfigError};
///
/// fn parse_split() -> StoryboardResult<String> {
///     Err(ConfigError::new("unknown split mode 'word'"))?
/// }
/// ```
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
