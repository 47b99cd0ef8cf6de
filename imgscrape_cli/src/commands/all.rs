use anyhow::{bail, Result};
use clap::Args;
use imgscrape_lib::types::ImageResult;
use imgscrape_lib::validation;
use imgscrape_lib::{ProviderOutcome, ProviderResults, SearchClient, SearchRequest};
use serde_json::{Map, Value};

use crate::output::{print_images, print_images_csv, print_json, OutputFormat};

#[derive(Args)]
pub struct AllArgs {
    /// Search text. DuckDuckGo rejects queries over 500 characters; the other
    /// providers still run
    pub query: String,

    /// Safe search level applied to every provider: off, moderate, strict
    #[arg(long)]
    pub safe_search: Option<String>,

    /// DuckDuckGo region code (e.g. us-en, de-de)
    #[arg(long)]
    pub region: Option<String>,

    /// Brave country code, or "all"
    #[arg(long)]
    pub country: Option<String>,

    /// Google language (e.g. en, de)
    #[arg(long)]
    pub language: Option<String>,
}

pub async fn run(
    args: &AllArgs,
    client: &SearchClient,
    format: &OutputFormat,
    limit: usize,
) -> Result<()> {
    let text = validation::validate_query(&args.query)?;
    let mut request = SearchRequest::new(&text).with_limit(limit);

    if let Some(ref level) = args.safe_search {
        request = request.with_safe_search(validation::validate_safe_search(level)?);
    }

    if let Some(ref region) = args.region {
        request = request.with_region(&validation::validate_region(region)?);
    }

    if let Some(ref country) = args.country {
        request = request.with_country(&validation::validate_country(country)?);
    }

    if let Some(ref language) = args.language {
        request = request.with_language(&validation::validate_language(language)?);
    }

    let (sections, failures) = split_outcomes(client.search_all(&request).await);
    for failure in &failures {
        eprintln!("{}", failure);
    }

    if sections.is_empty() {
        bail!("every provider failed");
    }

    match format {
        OutputFormat::Json => print_json(&json_by_provider(&sections)?),
        OutputFormat::Csv => {
            let combined: Vec<&ImageResult> =
                sections.iter().flat_map(ProviderResults::images).collect();
            print_images_csv(&combined)?;
        }
        OutputFormat::Table | OutputFormat::Markdown => {
            for section in &sections {
                eprintln!("{} results from {}", section.len(), section.provider());
                match section {
                    ProviderResults::Google(rows) => print_images(rows, format)?,
                    ProviderResults::DuckDuckGo(rows) => print_images(rows, format)?,
                    ProviderResults::Brave(rows) => print_images(rows, format)?,
                }
            }
        }
    }

    Ok(())
}

/// Separates successful sections from one message per failed provider.
fn split_outcomes(outcomes: Vec<ProviderOutcome>) -> (Vec<ProviderResults>, Vec<String>) {
    let mut sections = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome.results {
            Ok(results) => sections.push(results),
            Err(e) => failures.push(format!("{} failed: {}", outcome.provider, e)),
        }
    }
    (sections, failures)
}

/// JSON object keyed by provider name, each value keeping provider-specific fields.
fn json_by_provider(sections: &[ProviderResults]) -> Result<Value> {
    let mut by_provider = Map::new();
    for section in sections {
        let rows = match section {
            ProviderResults::Google(rows) => serde_json::to_value(rows)?,
            ProviderResults::DuckDuckGo(rows) => serde_json::to_value(rows)?,
            ProviderResults::Brave(rows) => serde_json::to_value(rows)?,
        };
        by_provider.insert(section.provider().to_string(), rows);
    }
    Ok(Value::Object(by_provider))
}
