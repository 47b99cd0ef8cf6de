use anyhow::Result;
use clap::Args;
use imgscrape_lib::validation;
use imgscrape_lib::{DuckDuckGoQuery, Query, SearchClient};

use crate::output::{print_images, OutputFormat};

#[derive(Args)]
pub struct DuckDuckGoArgs {
    /// Search text (at most 500 characters)
    pub query: String,

    /// Filter by upload time: day, week, month
    #[arg(long)]
    pub time: Option<String>,

    /// Filter by size: small, medium, large, wallpaper
    #[arg(long)]
    pub size: Option<String>,

    /// Filter by color: color, monochrome, red, orange, yellow, green, blue,
    /// purple, pink, brown, black, gray, teal, white
    #[arg(long)]
    pub color: Option<String>,

    /// Filter by type: photo, clipart, gif, transparent, line
    #[arg(long = "type")]
    pub image_type: Option<String>,

    /// Filter by layout: square, tall, wide
    #[arg(long)]
    pub layout: Option<String>,

    /// Filter by license: any, public, share, share-commercially, modify,
    /// modify-commercially
    #[arg(long)]
    pub license: Option<String>,

    /// Region code (e.g. us-en, de-de, wt-wt for no region)
    #[arg(long, default_value = "us-en")]
    pub region: String,

    /// Safe search level: off, moderate, strict (DuckDuckGo default: moderate)
    #[arg(long)]
    pub safe_search: Option<String>,
}

pub async fn run(
    args: &DuckDuckGoArgs,
    client: &SearchClient,
    format: &OutputFormat,
    limit: usize,
) -> Result<()> {
    let text = validation::validate_duckduckgo_query(&args.query)?;
    let region = validation::validate_region(&args.region)?;
    let mut query = DuckDuckGoQuery::new(&text).with_region(&region);

    if let Some(ref time) = args.time {
        query = query.with_time(validation::validate_duckduckgo_time(time)?);
    }

    if let Some(ref size) = args.size {
        query = query.with_size(validation::validate_duckduckgo_size(size)?);
    }

    if let Some(ref color) = args.color {
        query = query.with_color(validation::validate_duckduckgo_color(color)?);
    }

    if let Some(ref image_type) = args.image_type {
        query = query.with_image_type(validation::validate_duckduckgo_type(image_type)?);
    }

    if let Some(ref layout) = args.layout {
        query = query.with_layout(validation::validate_duckduckgo_layout(layout)?);
    }

    if let Some(ref license) = args.license {
        query = query.with_license(validation::validate_duckduckgo_license(license)?);
    }

    if let Some(ref level) = args.safe_search {
        query = query.with_safe_search(validation::validate_safe_search(level)?);
    }

    let results = client.duckduckgo(&query, limit).await?;

    eprintln!("{} results from DuckDuckGo", results.len());
    print_images(&results, format)
}
