//! Penna binary.
//!
//! Loads configuration and credentials, wires the cycle pipeline together,
//! runs one cycle immediately, then repeats on the configured interval.
//! Cycles never overlap: the scheduler awaits each cycle to completion
//! before considering the next.

use clap::Parser;
use penna_agent::{
    AgentConfig, BackupWriter, ContentGenerator, Credentials, CycleOrchestrator, HistoryStore,
    Researcher, TopicSelector,
};
use penna_client::CompletionClient;
use penna_core::Platform;
use penna_publish::{LinkedInPublisher, MediumPublisher, PublishDispatcher};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "penna",
    about = "Autonomous content generation and publishing agent"
)]
struct Cli {
    /// Path to the agent configuration file
    #[arg(short, long, default_value = "config/penna.toml")]
    config: std::path::PathBuf,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    penna::telemetry::init(cli.verbose);

    let config = AgentConfig::from_file(&cli.config)?;
    let credentials = Credentials::from_env()?;
    info!(config = %cli.config.display(), "Penna agent starting");

    let mut orchestrator = build_orchestrator(&config, &credentials)?;

    // Run immediately on startup, then on the configured cadence.
    info!("Running initial content generation cycle");
    orchestrator.run_cycle().await;

    if cli.once {
        return Ok(());
    }

    let period = Duration::from_secs(config.agent.post_interval_hours * 3600);
    info!(
        interval_hours = config.agent.post_interval_hours,
        "Agent running continuously"
    );

    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick of an interval fires immediately; the startup cycle
    // already covered it.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        orchestrator.run_cycle().await;
    }
}

/// Wire the cycle pipeline from configuration and credentials.
fn build_orchestrator(
    config: &AgentConfig,
    credentials: &Credentials,
) -> Result<CycleOrchestrator<CompletionClient>, Box<dyn std::error::Error>> {
    let driver = Arc::new(CompletionClient::new(
        credentials.completion_api_key.clone(),
        config.api.model.clone(),
    ));

    let researcher = Researcher::new(
        Arc::clone(&driver),
        config.research.topics.clone(),
        config.research.queries_per_cycle,
    );
    let selector = TopicSelector::new(Arc::clone(&driver));
    let generator = ContentGenerator::new(
        Arc::clone(&driver),
        config.limits,
        config.guidelines.avoid_phrases.clone(),
        config.api.max_tokens,
    );

    let mut dispatcher = PublishDispatcher::new();
    if config.platform_enabled(Platform::LinkedIn) {
        match (
            &credentials.linkedin_access_token,
            &credentials.linkedin_person_urn,
        ) {
            (Some(token), Some(urn)) => {
                dispatcher.register(Box::new(LinkedInPublisher::new(
                    token.clone(),
                    urn.clone(),
                    config.limits.max_length(Platform::LinkedIn),
                )));
            }
            _ => warn!("LinkedIn enabled but credentials missing, short-form posts will fail"),
        }
    }
    if config.platform_enabled(Platform::Medium) {
        dispatcher.register(Box::new(MediumPublisher::new(
            credentials.medium_integration_token.clone(),
        )));
    }

    let backup = BackupWriter::new(&config.agent.content_dir)?;
    let history = HistoryStore::load(config.history_path());
    let long_form_enabled = config.platform_enabled(Platform::Medium);

    Ok(CycleOrchestrator::new(
        researcher,
        selector,
        generator,
        dispatcher,
        backup,
        history,
        long_form_enabled,
    ))
}
