//! Layered configuration for the storyboard generator.
//!
//! Sources, later ones taking precedence:
//! 1. Bundled defaults (include_str! from storyboard.toml)
//! 2. `~/.config/storyboard/storyboard.toml`
//! 3. `./storyboard.toml`
//! 4. An explicit file, when one is given

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storyboard_core::SplitMode;
use storyboard_error::{ConfigError, StoryboardError, StoryboardResult};
use storyboard_storage::DEFAULT_HISTORY_CAPACITY;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

/// Generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Split mode used when the caller doesn't choose one
    #[serde(default)]
    pub default_split: SplitMode,
}

/// History settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Number of storyboards retained
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// History file, defaults to `<data dir>/storyboard/history.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            path: None,
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// Analytics settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// Whether generations are recorded at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Analytics file, defaults to `<data dir>/storyboard/analytics.jsonl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable logs
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}

/// Top-level storyboard configuration.
///
/// # Example
///
/// ```no_run
/// use storyboard::StoryboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load(None)?;
/// println!("Keeping {} storyboards", config.history.capacity);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct StoryboardConfig {
    /// Generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
    /// History settings
    #[serde(default)]
    pub history: HistoryConfig,
    /// Analytics settings
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoryboardConfig {
    /// Load the bundled defaults merged with a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder)
    }

    /// Load configuration with precedence: explicit file > current dir > home dir > bundled default.
    ///
    /// User config files are optional and skipped if not found. An explicit
    /// file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or validation fails.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyboard").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        Self::finish(builder)
    }

    /// Parse a configuration from TOML text layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or validation fails.
    pub fn from_toml_str(toml: &str) -> StoryboardResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StoryboardResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the types can't express.
    ///
    /// # Errors
    ///
    /// Returns an error if `history.capacity` is zero.
    pub fn validate(&self) -> StoryboardResult<()> {
        if self.history.capacity == 0 {
            return Err(ConfigError::new("history.capacity must be at least 1").into());
        }
        Ok(())
    }

    /// History file, falling back to the platform data directory.
    pub fn history_path(&self) -> PathBuf {
        self.history
            .path
            .clone()
            .unwrap_or_else(|| data_dir().join("history.json"))
    }

    /// Analytics file, falling back to the platform data directory.
    pub fn analytics_path(&self) -> PathBuf {
        self.analytics
            .path
            .clone()
            .unwrap_or_else(|| data_dir().join("analytics.jsonl"))
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storyboard")
}
