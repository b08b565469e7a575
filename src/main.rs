//! Contact Book - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout, loading the address
//! book at startup and saving it when the session ends.

use anyhow::Result;
use clap::Parser;
use contact_book::repositories::JsonFileStore;
use contact_book::{Bot, Config};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Personal address book assistant.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address book file (overrides CONTACT_BOOK_DATA_FILE)
    #[arg(long)]
    data_file: Option<String>,

    /// Log level (overrides LOG_LEVEL; RUST_LOG takes precedence over both)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?.with_overrides(args.data_file, args.log_level)?;

    // Logging goes to stderr; stdout carries the conversation
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(data_file = %config.data_file.display(), "Starting contact book");

    let store = JsonFileStore::new(&config.data_file);
    let mut bot = match Bot::load(store).await {
        Ok(bot) => bot,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    bot.run(stdin, &mut stdout).await?;

    info!("Contact book shutdown complete");
    Ok(())
}
