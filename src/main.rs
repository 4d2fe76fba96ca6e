use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inspire::theme::Appearance;
use inspire::{App, Config, Deck};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inspire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the configured appearance
    #[arg(long, value_enum)]
    appearance: Option<Appearance>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every quote in order
    List,
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "inspire=info".into())
}

/// Send logs to stderr (for plain commands)
fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Send logs to a file, since the TUI owns the terminal
fn init_file_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let deck = Deck::builtin();

    match cli.command {
        Some(Commands::List) => {
            init_stderr_logging();
            tracing::debug!(quotes = deck.len(), "Listing quotes");
            for (index, quote) in deck.iter().enumerate() {
                println!("{}. \"{}\" {}", index + 1, quote.text, quote.attribution());
            }
        }
        None => {
            // Launch TUI
            init_file_logging()?;
            let mut config = Config::load()?;
            if let Some(appearance) = cli.appearance {
                config.appearance = appearance;
            }
            let mut app = App::new(&config, deck)?;
            app.run()?;
        }
    }

    Ok(())
}
