//! History store persistence and eviction tests.

use penna_agent::{HISTORY_CAP, HistoryStore};
use penna_core::HistoryEntry;
use tempfile::tempdir;

#[test]
fn history_caps_at_fifty_with_fifo_eviction() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut store = HistoryStore::load(&path);

    for i in 0..60 {
        store
            .append(HistoryEntry::new(format!("title {i}"), format!("topic {i}")))
            .unwrap();
    }

    assert_eq!(store.len(), HISTORY_CAP);
    // The oldest ten were evicted in order.
    assert_eq!(store.entries()[0].topic, "topic 10");
    assert_eq!(store.entries()[HISTORY_CAP - 1].topic, "topic 59");
}

#[test]
fn appended_entries_survive_a_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::load(&path);
    store
        .append(HistoryEntry::new("Why Agents Fail", "agent reliability"))
        .unwrap();
    store
        .append(HistoryEntry::new("On Evals", "evaluation design"))
        .unwrap();
    drop(store);

    let reloaded = HistoryStore::load(&path);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.entries()[0].title, "Why Agents Fail");
    assert_eq!(reloaded.entries()[1].topic, "evaluation design");
}

#[test]
fn recent_topics_returns_newest_n_oldest_first() {
    let dir = tempdir().unwrap();
    let mut store = HistoryStore::load(dir.path().join("history.json"));

    for i in 0..15 {
        store
            .append(HistoryEntry::new(format!("title {i}"), format!("topic {i}")))
            .unwrap();
    }

    let recent = store.recent_topics(10);
    assert_eq!(recent.len(), 10);
    assert_eq!(recent.first().unwrap(), "topic 5");
    assert_eq!(recent.last().unwrap(), "topic 14");
}

#[test]
fn corrupt_history_file_starts_fresh() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = HistoryStore::load(&path);
    assert!(store.is_empty());
}

#[test]
fn missing_history_file_starts_fresh() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::load(dir.path().join("does_not_exist.json"));
    assert!(store.is_empty());
}
