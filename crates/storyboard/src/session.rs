//! Generation session wiring the generator to its collaborators.

use std::sync::Arc;
use storyboard_core::SplitMode;
use storyboard_error::StoryboardResult;
use storyboard_interface::{AnalyticsRecorder, HistoryEntry, HistoryStore, IdentityProvider};
use storyboard_narrative::StoryboardGenerator;

/// A signed-in generation flow.
///
/// Generation is refused when nobody is signed in. Otherwise each storyboard
/// is pushed to history and, when a recorder is attached, reported to
/// analytics. Analytics failures are logged and never fail the generation.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use storyboard::{
///     InMemoryHistoryStore, StaticIdentityProvider, StoryboardGenerator, StoryboardSession,
///     UserIdentity,
/// };
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = StoryboardSession::new(
///     StoryboardGenerator::default(),
///     Arc::new(InMemoryHistoryStore::default()),
///     Arc::new(StaticIdentityProvider::signed_in(UserIdentity::new("alice"))),
/// );
///
/// let entry = session.generate("Alex wakes up. Alex finds a letter.", None).await?;
/// assert_eq!(entry.map(|entry| entry.scenes().len()), Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StoryboardSession {
    generator: StoryboardGenerator,
    history: Arc<dyn HistoryStore>,
    analytics: Option<Arc<dyn AnalyticsRecorder>>,
    identity: Arc<dyn IdentityProvider>,
}

impl std::fmt::Debug for StoryboardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryboardSession")
            .field("generator", &self.generator)
            .field("history_capacity", &self.history.capacity())
            .field("analytics", &self.analytics.is_some())
            .finish()
    }
}

impl StoryboardSession {
    /// Creates a session without analytics.
    pub fn new(
        generator: StoryboardGenerator,
        history: Arc<dyn HistoryStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            generator,
            history,
            analytics: None,
            identity,
        }
    }

    /// Attaches an analytics recorder.
    pub fn with_analytics(mut self, analytics: Arc<dyn AnalyticsRecorder>) -> Self {
        self.analytics = Some(analytics);
        self
    }

    /// The history store generations are pushed to.
    pub fn history(&self) -> &Arc<dyn HistoryStore> {
        &self.history
    }

    /// Generates a storyboard for the signed-in user.
    ///
    /// Returns `Ok(None)` without generating when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns error if the history store fails to persist the entry.
    #[tracing::instrument(skip(self, source), fields(len = source.len()))]
    pub async fn generate(
        &self,
        source: &str,
        split: Option<SplitMode>,
    ) -> StoryboardResult<Option<HistoryEntry>> {
        let Some(identity) = self.identity.current() else {
            tracing::info!("No signed-in user, refusing to generate");
            return Ok(None);
        };

        let scenes = self.generator.generate(source, split);
        let entry = self.history.push(source, &scenes).await?;

        if let Some(analytics) = &self.analytics {
            if let Err(e) = analytics.record(Some(&identity), source, scenes.len()).await {
                tracing::warn!(error = %e, "Failed to record analytics");
            }
        }

        tracing::info!(
            id = %entry.id(),
            user_id = %identity.id(),
            scene_count = scenes.len(),
            "Generated storyboard"
        );
        Ok(Some(entry))
    }
}
