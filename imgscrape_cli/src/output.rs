use anyhow::Result;
use imgscrape_lib::types::ImageResult;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const MAX_TITLE_CHARS: usize = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(input: &str) -> Self {
        match input {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct ImageRow {
    #[tabled(rename = "Provider")]
    #[serde(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Size")]
    #[serde(rename = "Size")]
    size: String,
    #[tabled(rename = "Image")]
    #[serde(rename = "Image")]
    url: String,
    #[tabled(rename = "Page")]
    #[serde(rename = "Page")]
    source_url: String,
}

// -- Row builders --

fn build_image_rows<T: AsRef<ImageResult>>(results: &[T], truncate_titles: bool) -> Vec<ImageRow> {
    results
        .iter()
        .map(|r| {
            let image = r.as_ref();
            ImageRow {
                provider: image.provider.to_string(),
                title: if truncate_titles {
                    truncate(&image.title, MAX_TITLE_CHARS)
                } else {
                    image.title.clone()
                },
                size: format_size(image.width, image.height),
                url: image.url.clone(),
                source_url: image.source_url.clone(),
            }
        })
        .collect()
}

/// Prints results in the requested format. JSON keeps every provider-specific field.
pub fn print_images<T>(results: &[T], format: &OutputFormat) -> Result<()>
where
    T: AsRef<ImageResult> + Serialize,
{
    match format {
        OutputFormat::Table => print_images_table(results),
        OutputFormat::Json => print_json(&results),
        OutputFormat::Csv => print_images_csv(results)?,
        OutputFormat::Markdown => print_images_markdown(results),
    }
    Ok(())
}

// -- Table output --

pub fn print_images_table<T: AsRef<ImageResult>>(results: &[T]) {
    println!("{}", Table::new(build_image_rows(results, true)));
}

// -- Markdown output --

pub fn print_images_markdown<T: AsRef<ImageResult>>(results: &[T]) {
    let mut table = Table::new(build_image_rows(results, true));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_images_csv<T: AsRef<ImageResult>>(results: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_image_rows(results, false) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_size(width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        "-".to_string()
    } else {
        format!("{}x{}", width, height)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
