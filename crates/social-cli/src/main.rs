//! Social agent command-line entry point
//!
//! Drafts YouTube / Instagram / TikTok content, tracks its review status and
//! exports approved drafts for downstream automation.

mod commands;

use social_core::{CampaignWorkflow, SocialConfig};
use std::io;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so RUST_LOG and credentials from it are visible; existing variables win
    let env_file = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match env_file {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No .env file found"),
        Err(e) => log::warn!("Ignoring unreadable .env file: {}", e),
    }

    let matches = commands::build_cli().get_matches();

    let mut config = SocialConfig::from_env()?;
    if let Some(db) = matches.get_one::<String>("db") {
        config = config.with_store_root(db);
    }
    log::info!("Using entry store at {}", config.store.root.display());

    let workflow = CampaignWorkflow::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&workflow, &matches, &mut out).await
}
