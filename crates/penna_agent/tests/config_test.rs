//! Configuration loading and validation tests.

use penna_agent::AgentConfig;
use penna_core::Platform;
use std::io::Write;
use tempfile::NamedTempFile;

const VALID_CONFIG: &str = r#"
[research]
topics = ["AI agents", "model evals"]
queries_per_cycle = 2

[limits]
linkedin = 3000
medium = 5000

[agent]
platforms = ["linkedin", "medium"]
post_interval_hours = 6
content_dir = "content"

[api]
model = "sonar"
max_tokens = 2000

[guidelines]
avoid_phrases = ["delve"]
"#;

fn write_config(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn valid_config_loads_with_all_sections() {
    let file = write_config(VALID_CONFIG);
    let config = AgentConfig::from_file(file.path()).unwrap();

    assert_eq!(config.research.topics.len(), 2);
    assert_eq!(config.research.queries_per_cycle, 2);
    assert_eq!(config.limits.max_length(Platform::LinkedIn), 3000);
    assert!(config.platform_enabled(Platform::Medium));
    assert_eq!(config.agent.post_interval_hours, 6);
    assert_eq!(config.guidelines.avoid_phrases, vec!["delve"]);
    assert!(config.history_path().ends_with("content/history.json"));
}

#[test]
fn limits_default_when_section_is_absent() {
    let body = VALID_CONFIG.replace(
        "[limits]\nlinkedin = 3000\nmedium = 5000\n",
        "",
    );
    let file = write_config(&body);
    let config = AgentConfig::from_file(file.path()).unwrap();

    assert_eq!(config.limits.max_length(Platform::LinkedIn), 3000);
    assert_eq!(config.limits.max_length(Platform::Medium), 5000);
}

#[test]
fn empty_topic_list_is_rejected() {
    let body = VALID_CONFIG.replace(r#"topics = ["AI agents", "model evals"]"#, "topics = []");
    let file = write_config(&body);
    assert!(AgentConfig::from_file(file.path()).is_err());
}

#[test]
fn zero_queries_per_cycle_is_rejected() {
    let body = VALID_CONFIG.replace("queries_per_cycle = 2", "queries_per_cycle = 0");
    let file = write_config(&body);
    assert!(AgentConfig::from_file(file.path()).is_err());
}

#[test]
fn missing_config_file_is_an_error() {
    assert!(AgentConfig::from_file("/nonexistent/penna.toml").is_err());
}
