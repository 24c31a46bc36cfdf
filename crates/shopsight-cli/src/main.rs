mod fetch;

use clap::{Parser, Subcommand};
use shopsight_core::FetchStrategy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopsight-cli")]
#[command(about = "Extract brand insights from a storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch insights for a storefront and print the record as JSON
    Fetch {
        /// Storefront root URL, e.g. `https://shop.example.com`
        url: String,

        /// Override `SHOPSIGHT_FETCH_STRATEGY` (sequential or concurrent)
        #[arg(long)]
        strategy: Option<FetchStrategy>,

        /// Print single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the resolved extractor configuration as YAML
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = shopsight_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let extractors = shopsight_core::load_extractor_config(config.extractors_path.as_deref())?;

    match cli.command {
        Commands::Fetch {
            url,
            strategy,
            compact,
        } => {
            let output = fetch::run_fetch(&url, &config, extractors, strategy, compact).await?;
            println!("{output}");
        }
        Commands::Config => print!("{}", serde_yaml::to_string(&extractors)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
