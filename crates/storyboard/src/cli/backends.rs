//! Backends assembled from configuration.

use std::sync::Arc;
use storyboard::{
    EnvIdentityProvider, FileSystemHistoryStore, IdentityProvider, JsonLinesAnalyticsRecorder,
    StoryboardConfig, StoryboardGenerator, StoryboardResult, StoryboardSession,
};

/// The file-backed collaborators the CLI works against.
#[derive(Debug, Clone)]
pub struct Backends {
    pub generator: StoryboardGenerator,
    pub history: Arc<FileSystemHistoryStore>,
    pub analytics: Option<Arc<JsonLinesAnalyticsRecorder>>,
    pub identity: Arc<EnvIdentityProvider>,
}

impl Backends {
    /// Open the history and analytics files named by `config`.
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &StoryboardConfig) -> StoryboardResult<Self> {
        let history = FileSystemHistoryStore::new(config.history_path(), config.history.capacity)?;

        let analytics = if config.analytics.enabled {
            Some(Arc::new(JsonLinesAnalyticsRecorder::new(config.analytics_path())?))
        } else {
            tracing::debug!("Analytics disabled");
            None
        };

        Ok(Self {
            generator: StoryboardGenerator::new(config.generation.default_split),
            history: Arc::new(history),
            analytics,
            identity: Arc::new(EnvIdentityProvider::default()),
        })
    }

    /// Session recording to these backends.
    pub fn session(&self) -> StoryboardSession {
        let session =
            StoryboardSession::new(self.generator, self.history.clone(), self.identity.clone());

        match &self.analytics {
            Some(analytics) => session.with_analytics(analytics.clone()),
            None => session,
        }
    }

    /// Id of the signed-in user, if any.
    pub fn current_user(&self) -> Option<String> {
        self.identity.current().map(|identity| identity.id().clone())
    }
}
