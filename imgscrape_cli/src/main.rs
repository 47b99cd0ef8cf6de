mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgscrape_lib::validation;
use imgscrape_lib::SearchClient;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "imgscrape")]
#[command(about = "Search images on Google, DuckDuckGo and Brave")]
struct Cli {
    /// Output format: table, json, csv, markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Maximum results per provider (1-100)
    #[arg(long, default_value = "20", global = true)]
    limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search Google Images
    Google(commands::google::GoogleArgs),
    /// Search DuckDuckGo images
    #[command(alias = "ddg")]
    Duckduckgo(commands::duckduckgo::DuckDuckGoArgs),
    /// Search Brave images
    Brave(commands::brave::BraveArgs),
    /// Search every provider concurrently
    All(commands::all::AllArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("imgscrape=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);
    let limit = validation::validate_limit(cli.limit)?;

    let client = SearchClient::new();

    match &cli.command {
        Commands::Google(args) => commands::google::run(args, &client, &format, limit).await?,
        Commands::Duckduckgo(args) => {
            commands::duckduckgo::run(args, &client, &format, limit).await?
        }
        Commands::Brave(args) => commands::brave::run(args, &client, &format, limit).await?,
        Commands::All(args) => commands::all::run(args, &client, &format, limit).await?,
    }

    Ok(())
}
