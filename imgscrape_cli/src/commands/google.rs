use anyhow::Result;
use clap::Args;
use imgscrape_lib::validation;
use imgscrape_lib::{GoogleQuery, Query, SearchClient};

use crate::output::{print_images, OutputFormat};

#[derive(Args)]
pub struct GoogleArgs {
    /// Search text
    pub query: String,

    /// Filter by size: any, large, medium, icon
    #[arg(long)]
    pub size: Option<String>,

    /// Filter by color: black-and-white, transparent, red, orange, yellow,
    /// green, teal, blue, purple, pink, white, gray, black, brown
    #[arg(long)]
    pub color: Option<String>,

    /// Filter by type: face, photo, clipart, lineart, animated
    #[arg(long = "type")]
    pub image_type: Option<String>,

    /// Filter by upload time: day, week, month, year
    #[arg(long)]
    pub time: Option<String>,

    /// Filter by usage rights: creative-commons, commercial
    #[arg(long)]
    pub license: Option<String>,

    /// Interface and result language (e.g. en, de, zh-TW)
    #[arg(long)]
    pub language: Option<String>,

    /// Safe search level: off, moderate, strict (Google default: off)
    #[arg(long)]
    pub safe_search: Option<String>,

    /// Scrape the regular results page instead of the JSON endpoint
    #[arg(long)]
    pub html: bool,
}

pub async fn run(
    args: &GoogleArgs,
    client: &SearchClient,
    format: &OutputFormat,
    limit: usize,
) -> Result<()> {
    let text = validation::validate_query(&args.query)?;
    let mut query = GoogleQuery::new(&text);

    if let Some(ref size) = args.size {
        query = query.with_size(validation::validate_google_size(size)?);
    }

    if let Some(ref color) = args.color {
        query = query.with_color(validation::validate_google_color(color)?);
    }

    if let Some(ref image_type) = args.image_type {
        query = query.with_image_type(validation::validate_google_type(image_type)?);
    }

    if let Some(ref time) = args.time {
        query = query.with_time(validation::validate_google_time(time)?);
    }

    if let Some(ref license) = args.license {
        query = query.with_license(validation::validate_google_license(license)?);
    }

    if let Some(ref language) = args.language {
        let validated = validation::validate_language(language)?;
        query = query.with_language(&validated);
    }

    if let Some(ref level) = args.safe_search {
        query = query.with_safe_search(validation::validate_safe_search(level)?);
    }

    let results = if args.html {
        client.google_html(&query, limit).await?
    } else {
        client.google(&query, limit).await?
    };

    eprintln!("{} results from Google", results.len());
    print_images(&results, format)
}
