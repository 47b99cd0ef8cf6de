use anyhow::Result;
use clap::Args;
use imgscrape_lib::validation;
use imgscrape_lib::{BraveQuery, Query, SearchClient};

use crate::output::{print_images, OutputFormat};

#[derive(Args)]
pub struct BraveArgs {
    /// Search text
    pub query: String,

    /// Filter by size: small, medium, large, wallpaper
    #[arg(long)]
    pub size: Option<String>,

    /// Filter by type: photo, cliparts, animated-gif-https, transparent
    #[arg(long = "type")]
    pub image_type: Option<String>,

    /// Filter by layout: square, tall, wide
    #[arg(long)]
    pub layout: Option<String>,

    /// Filter by color: monochrome, color-only, red, orange, yellow, green,
    /// blue, purple, pink, brown, black, gray, teal, white
    #[arg(long)]
    pub color: Option<String>,

    /// Filter by license: public, share, share-commercially, modify,
    /// modify-commercially
    #[arg(long)]
    pub license: Option<String>,

    /// Two-letter country code, or "all"
    #[arg(long)]
    pub country: Option<String>,

    /// Safe search level: off, moderate, strict (Brave default: moderate)
    #[arg(long)]
    pub safe_search: Option<String>,
}

pub async fn run(
    args: &BraveArgs,
    client: &SearchClient,
    format: &OutputFormat,
    limit: usize,
) -> Result<()> {
    let text = validation::validate_query(&args.query)?;
    let mut query = BraveQuery::new(&text);

    if let Some(ref size) = args.size {
        query = query.with_size(validation::validate_brave_size(size)?);
    }

    if let Some(ref image_type) = args.image_type {
        query = query.with_image_type(validation::validate_brave_type(image_type)?);
    }

    if let Some(ref layout) = args.layout {
        query = query.with_layout(validation::validate_brave_layout(layout)?);
    }

    if let Some(ref color) = args.color {
        query = query.with_color(validation::validate_brave_color(color)?);
    }

    if let Some(ref license) = args.license {
        query = query.with_license(validation::validate_brave_license(license)?);
    }

    if let Some(ref country) = args.country {
        let validated = validation::validate_country(country)?;
        query = query.with_country(&validated);
    }

    if let Some(ref level) = args.safe_search {
        query = query.with_safe_search(validation::validate_safe_search(level)?);
    }

    let results = client.brave(&query, limit).await?;

    eprintln!("{} results from Brave", results.len());
    print_images(&results, format)
}
