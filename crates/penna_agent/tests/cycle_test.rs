//! Cycle orchestration tests: stage isolation and short-circuits.

mod test_utils;

use penna_agent::{
    BackupWriter, ContentGenerator, CycleOrchestrator, HistoryStore, Researcher, TopicSelector,
};
use penna_core::{Platform, PlatformLimits};
use penna_publish::PublishDispatcher;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_utils::{MockDriver, MockTarget, Received};

struct Harness {
    orchestrator: CycleOrchestrator<MockDriver>,
    linkedin_posts: Received,
    medium_posts: Received,
    // Held so the content dir outlives the cycle.
    _dir: TempDir,
}

fn harness(
    driver: MockDriver,
    topics: Vec<String>,
    linkedin_ok: bool,
    medium_ok: bool,
) -> Harness {
    let dir = TempDir::new().unwrap();
    let driver = Arc::new(driver);

    let researcher =
        Researcher::new(Arc::clone(&driver), topics, 2).with_pacing(Duration::ZERO);
    let selector = TopicSelector::new(Arc::clone(&driver));
    let generator = ContentGenerator::new(
        Arc::clone(&driver),
        PlatformLimits::default(),
        Vec::new(),
        2000,
    );

    let (linkedin, linkedin_posts) = MockTarget::new(Platform::LinkedIn, linkedin_ok);
    let (medium, medium_posts) = MockTarget::new(Platform::Medium, medium_ok);
    let mut dispatcher = PublishDispatcher::new();
    dispatcher.register(Box::new(linkedin));
    dispatcher.register(Box::new(medium));

    let backup = BackupWriter::new(dir.path().join("content")).unwrap();
    let history = HistoryStore::load(dir.path().join("content/history.json"));

    let orchestrator =
        CycleOrchestrator::new(researcher, selector, generator, dispatcher, backup, history, true)
            .with_publish_pause(Duration::ZERO);

    Harness {
        orchestrator,
        linkedin_posts,
        medium_posts,
        _dir: dir,
    }
}

fn topics() -> Vec<String> {
    vec!["AI agents".to_string(), "model evals".to_string()]
}

#[tokio::test]
async fn empty_research_aborts_before_publish_and_history() {
    // An empty topic pool is the one way research yields zero results.
    let mut h = harness(MockDriver::new_success("unused"), Vec::new(), true, true);

    let report = h.orchestrator.run_cycle().await;

    assert!(report.aborted);
    assert_eq!(report.research_count, 0);
    assert!(report.topic.is_none());
    assert!(h.linkedin_posts.lock().unwrap().is_empty());
    assert!(h.medium_posts.lock().unwrap().is_empty());
    assert!(h.orchestrator.history().is_empty());
}

#[tokio::test]
async fn successful_cycle_publishes_both_and_updates_history() {
    let text = "Why Agents Fail in Production\n\nLast week one fell over. Here's why.";
    let mut h = harness(MockDriver::new_success(text), topics(), true, true);

    let report = h.orchestrator.run_cycle().await;

    assert!(!report.aborted);
    assert_eq!(report.research_count, 2);
    assert!(!report.topic_was_fallback);
    assert!(report.short_form_published);
    assert!(report.long_form_published);
    assert!(report.history_updated);
    assert_eq!(h.linkedin_posts.lock().unwrap().len(), 1);
    assert_eq!(h.medium_posts.lock().unwrap().len(), 1);
    assert_eq!(h.orchestrator.history().len(), 1);
}

#[tokio::test]
async fn long_form_publish_failure_does_not_block_history() {
    let text = "A Title Line\n\nShort body. Done.";
    let mut h = harness(MockDriver::new_success(text), topics(), true, false);

    let report = h.orchestrator.run_cycle().await;

    assert!(report.short_form_published);
    assert!(report.long_form_generated);
    assert!(!report.long_form_published);
    // The failed Medium publish must not prevent the history entry.
    assert!(report.history_updated);
    assert_eq!(h.orchestrator.history().len(), 1);
    assert_eq!(h.medium_posts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn upstream_outage_runs_fallback_topic_and_skips_publish() {
    let mut h = harness(MockDriver::new_error(), topics(), true, true);

    let report = h.orchestrator.run_cycle().await;

    // Research survives on placeholder insights, so the cycle continues.
    assert!(!report.aborted);
    assert_eq!(report.research_count, 2);
    assert!(report.topic_was_fallback);
    // Generation failed on both platforms, so nothing was published or
    // recorded.
    assert!(!report.short_form_generated);
    assert!(!report.long_form_generated);
    assert!(!report.history_updated);
    assert!(h.linkedin_posts.lock().unwrap().is_empty());
    assert!(h.medium_posts.lock().unwrap().is_empty());
    assert!(h.orchestrator.history().is_empty());
}

#[tokio::test]
async fn generated_content_respects_platform_ceiling() {
    // Adversarial model output far over every ceiling.
    let oversized = format!("Big Title\n\n{}", "A sentence. ".repeat(1000));
    let mut h = harness(MockDriver::new_success(oversized.as_str()), topics(), true, true);

    let report = h.orchestrator.run_cycle().await;

    assert!(report.short_form_published);
    assert!(report.long_form_published);

    let limits = PlatformLimits::default();
    for post in h.linkedin_posts.lock().unwrap().iter() {
        assert!(post.character_count <= limits.max_length(Platform::LinkedIn));
        assert_eq!(post.character_count, post.content.chars().count());
    }
    for post in h.medium_posts.lock().unwrap().iter() {
        assert!(post.character_count <= limits.max_length(Platform::Medium));
        assert_eq!(post.character_count, post.content.chars().count());
    }
}
