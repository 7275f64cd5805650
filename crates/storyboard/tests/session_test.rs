//! Tests for the generation session.

use std::sync::Arc;
use storyboard::{
    AnalyticsRecorder, HistoryStore, InMemoryAnalyticsRecorder, InMemoryHistoryStore, SplitMode,
    StaticIdentityProvider, StoryboardGenerator, StoryboardSession, UserIdentity,
};

fn signed_in_session(
    history: Arc<InMemoryHistoryStore>,
    analytics: Arc<InMemoryAnalyticsRecorder>,
) -> StoryboardSession {
    StoryboardSession::new(
        StoryboardGenerator::default(),
        history,
        Arc::new(StaticIdentityProvider::signed_in(UserIdentity::new("alice"))),
    )
    .with_analytics(analytics)
}

#[tokio::test]
async fn test_generation_is_refused_without_identity() {
    let history = Arc::new(InMemoryHistoryStore::default());
    let analytics = Arc::new(InMemoryAnalyticsRecorder::new());
    let session = StoryboardSession::new(
        StoryboardGenerator::default(),
        history.clone(),
        Arc::new(StaticIdentityProvider::anonymous()),
    )
    .with_analytics(analytics.clone());

    let entry = session.generate("A knight rides out", None).await.unwrap();

    assert!(entry.is_none());
    assert!(history.list().await.unwrap().is_empty());
    assert_eq!(analytics.summary("alice").await.unwrap().total_prompts, 0);
}

#[tokio::test]
async fn test_generation_records_history_and_analytics() {
    let history = Arc::new(InMemoryHistoryStore::default());
    let analytics = Arc::new(InMemoryAnalyticsRecorder::new());
    let session = signed_in_session(history.clone(), analytics.clone());

    let entry = session
        .generate("A knight rides out", None)
        .await
        .unwrap()
        .unwrap();

    // One-line prompt expands to the eight-beat arc
    assert_eq!(entry.scenes().len(), 8);
    assert_eq!(entry.source_script(), "A knight rides out");

    let stored = history.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id(), entry.id());

    let summary = analytics.summary("alice").await.unwrap();
    assert_eq!(summary.total_prompts, 1);
    assert_eq!(summary.total_scenes, 8);
}

#[tokio::test]
async fn test_split_override_beats_generator_default() {
    let history = Arc::new(InMemoryHistoryStore::default());
    let analytics = Arc::new(InMemoryAnalyticsRecorder::new());
    let session = signed_in_session(history, analytics);
    let text = "First paragraph. Still first.\n\nSecond paragraph.";

    let by_sentence = session.generate(text, None).await.unwrap().unwrap();
    let by_paragraph = session
        .generate(text, Some(SplitMode::Paragraph))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(by_sentence.scenes().len(), 3);
    assert_eq!(by_paragraph.scenes().len(), 2);
}

#[tokio::test]
async fn test_session_without_analytics_still_saves() {
    let history = Arc::new(InMemoryHistoryStore::new(1));
    let session = StoryboardSession::new(
        StoryboardGenerator::new(SplitMode::Paragraph),
        history.clone(),
        Arc::new(StaticIdentityProvider::signed_in(UserIdentity::new("bob"))),
    );

    session.generate("Old story.", None).await.unwrap();
    session.generate("New story.", None).await.unwrap();

    let stored = history.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].source_script(), "New story.");
}
