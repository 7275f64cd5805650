//! Tests for analytics recorders.

use storyboard_interface::{AnalyticsRecorder, AnalyticsSummary, UserIdentity};
use storyboard_storage::{InMemoryAnalyticsRecorder, JsonLinesAnalyticsRecorder};
use tempfile::TempDir;

#[tokio::test]
async fn test_memory_recorder_skips_anonymous() {
    let recorder = InMemoryAnalyticsRecorder::new();

    let recorded = recorder.record(None, "A prompt", 8).await.unwrap();
    assert!(recorded.is_none());
    assert_eq!(recorder.summary("anyone").await.unwrap(), AnalyticsSummary::default());
}

#[tokio::test]
async fn test_memory_recorder_filters_by_user() {
    let recorder = InMemoryAnalyticsRecorder::new();
    let alice = UserIdentity::new("alice");
    let bob = UserIdentity::new("bob").with_email("bob@example.com");

    recorder.record(Some(&alice), "one", 3).await.unwrap();
    recorder.record(Some(&bob), "two", 8).await.unwrap();
    recorder.record(Some(&alice), "three", 2).await.unwrap();

    let records = recorder.list("alice").await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].prompt(), "three");
    assert_eq!(records[1].prompt(), "one");

    let summary = recorder.summary("alice").await.unwrap();
    assert_eq!(summary.total_prompts, 2);
    assert_eq!(summary.total_scenes, 5);
}

#[tokio::test]
async fn test_jsonl_recorder_appends_and_reads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("analytics.jsonl");
    let recorder = JsonLinesAnalyticsRecorder::new(&path).unwrap();
    let user = UserIdentity::new("writer");

    let record = recorder
        .record(Some(&user), "The storm rolls in", 4)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.user_id(), "writer");
    assert_eq!(*record.scenes_count(), 4);

    recorder.record(Some(&user), "Second", 1).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw.lines().count(), 2);

    let records = recorder.list("writer").await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].prompt(), "Second");

    let summary = recorder.summary("writer").await.unwrap();
    assert_eq!(summary.total_prompts, 2);
    assert_eq!(summary.total_scenes, 5);
}

#[tokio::test]
async fn test_jsonl_recorder_skips_anonymous() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("analytics.jsonl");
    let recorder = JsonLinesAnalyticsRecorder::new(&path).unwrap();

    assert!(recorder.record(None, "ignored", 2).await.unwrap().is_none());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_jsonl_recorder_skips_malformed_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("analytics.jsonl");
    let recorder = JsonLinesAnalyticsRecorder::new(&path).unwrap();
    let user = UserIdentity::new("writer");

    recorder.record(Some(&user), "good", 2).await.unwrap();
    let mut raw = std::fs::read_to_string(&path).unwrap();
    raw.push_str("garbage line\n\n");
    std::fs::write(&path, raw).unwrap();
    recorder.record(Some(&user), "also good", 3).await.unwrap();

    let records = recorder.list("writer").await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_jsonl_recorder_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let recorder = JsonLinesAnalyticsRecorder::new(temp_dir.path().join("none.jsonl")).unwrap();

    assert!(recorder.list("writer").await.unwrap().is_empty());
}
