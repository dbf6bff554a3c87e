mod extract;
mod input;
mod replay;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "drinkmap-cli")]
#[command(about = "Interpret drink recommendation answers into renderable segments")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract segments from a completed answer
    Extract {
        /// Answer text file, or `-` for stdin
        #[arg(long)]
        input: PathBuf,
        /// JSON array of `{ "uri", "title" }` reference candidates
        #[arg(long)]
        references: Option<PathBuf>,
    },
    /// Replay a recorded fragment stream (NDJSON) as one turn
    Replay {
        /// NDJSON file of fragments, or `-` for stdin
        #[arg(long)]
        fragments: PathBuf,
        /// Pause between fragments in milliseconds (overrides `DRINKMAP_REPLAY_DELAY_MS`)
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Print live text to stderr while streaming
        #[arg(long)]
        show_live: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = drinkmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pretty = cli.pretty || config.pretty_json;
    match cli.command {
        Commands::Extract { input, references } => {
            extract::run_extract(&input, references.as_deref(), pretty)?;
        }
        Commands::Replay {
            fragments,
            delay_ms,
            show_live,
        } => {
            let options = replay::ReplayOptions {
                delay_ms: delay_ms.unwrap_or(config.replay_delay_ms),
                show_live: show_live || config.show_live,
                pretty,
            };
            replay::run_replay(&fragments, options).await?;
        }
    }

    Ok(())
}
