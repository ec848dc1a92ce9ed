mod sample;
mod simulate;

use clap::{Parser, Subcommand};
use happydex_core::Source;
use happydex_sentiment::SentimentAnalyzer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "happydex-cli")]
#[command(about = "Internet happiness index command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single text and print the result as JSON
    Analyze {
        /// Text to score
        text: String,
    },
    /// Fetch one batch from a collector and score each post
    Sample {
        /// Source to collect from (e.g. reddit, mastodon, google_trends)
        #[arg(long)]
        source: Source,
    },
    /// Run collection cycles against an in-memory index and print its status
    Simulate {
        /// Number of cycles; sources rotate each cycle
        #[arg(long, default_value_t = 7)]
        cycles: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = happydex_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze { text }) => run_analyze(&text)?,
        Some(Commands::Sample { source }) => sample::run_sample(&config, source).await?,
        Some(Commands::Simulate { cycles }) => simulate::run_simulate(&config, cycles).await?,
        None => println!("happydex-cli ready; see --help for commands"),
    }

    Ok(())
}

fn run_analyze(text: &str) -> anyhow::Result<()> {
    // Ad-hoc text has no real origin; forums is the catch-all source.
    let scored = SentimentAnalyzer::default().analyze(Some(text), Source::Forums);
    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}

#[cfg(test)]
mod tests;
