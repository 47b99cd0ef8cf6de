use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use imgscrape_api::providers::{brave, duckduckgo, google};
use imgscrape_api::types::{ImageResult, Provider, Rgb};
use imgscrape_api::ExtractError;

fn load_fixture(name: &str) -> Vec<u8> {
    std::fs::read(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn google_json_skips_entry_without_url() {
    let mut iter = google::parse_json(&load_fixture("google.json")).unwrap();
    let results: Vec<_> = iter.by_ref().collect();
    assert_eq!(results.len(), 3);
    assert_eq!(iter.skipped(), 1);
    assert!(!iter.is_drifting());

    let first = &results[0];
    assert_eq!(first.image.url, "https://upload.example.org/wiki/tabby_cat.jpg");
    assert_eq!(first.image.title, "Tabby cat - Wikipedia");
    assert_eq!((first.image.width, first.image.height), (1600, 1200));
    assert_eq!(first.image.source_url, "https://en.example.org/wiki/Tabby_cat");
    assert_eq!(first.display_url, "en.example.org");
    assert_eq!(first.color, Some(Rgb::new(120, 144, 156)));

    let last = &results[2];
    assert_eq!(last.image.url, "https://photos.example.net/kitten.webp");
    assert_eq!(last.image.width, 0);
    assert_eq!(last.image.thumbnail_url, "");
    assert_eq!(last.color, None);
}

#[test]
fn google_json_results_keep_native_order() {
    let urls: Vec<String> = google::parse_json(&load_fixture("google.json"))
        .unwrap()
        .map(|r| r.image.url)
        .collect();
    assert_eq!(
        urls,
        vec![
            "https://upload.example.org/wiki/tabby_cat.jpg",
            "https://cdn.catsite.example.com/img/black-cat.png",
            "https://photos.example.net/kitten.webp",
        ]
    );
}

#[test]
fn google_json_bounded_consumption() {
    let mut iter = google::parse_json(&load_fixture("google.json")).unwrap();
    let first: Vec<ImageResult> = iter.by_ref().take(1).map(ImageResult::from).collect();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].provider, Provider::Google);
    assert_eq!(iter.remaining(), 3);
    assert_eq!(iter.skipped(), 0);
}

#[test]
fn google_html_block() {
    let page = String::from_utf8(load_fixture("google.html")).unwrap();
    let mut iter = google::parse_html(&page).unwrap();
    let results: Vec<_> = iter.by_ref().collect();
    assert_eq!(results.len(), 2);
    assert_eq!(iter.skipped(), 2);

    assert_eq!(results[0].image.url, "https://img.example.com/a=1.jpg");
    assert_eq!(results[0].image.title, "First <b>result</b>");
    assert_eq!(results[0].image.source_url, "https://a.example.com/post");
    assert_eq!(results[0].display_url, "a.example.com");
    assert_eq!(results[0].image.thumbnail_url, "https://encrypted-tbn0.gstatic.com/t1");

    assert_eq!(results[1].image.url, "https://img.example.com/b.png");
    assert_eq!(results[1].image.title, "Second");
    assert_eq!((results[1].image.width, results[1].image.height), (500, 400));
    assert!(results.iter().all(|r| r.color.is_none()));
}

#[test]
fn google_html_without_block_is_not_found() {
    let page = "<html><body><p>Our systems have detected unusual traffic</p></body></html>";
    assert!(matches!(
        google::parse_html(page),
        Err(ExtractError::BlockNotFound)
    ));
}

#[test]
fn google_html_truncated_page_is_unparseable() {
    let page = String::from_utf8(load_fixture("google.html")).unwrap();
    let cut = &page[..page.rfind("sideChannel").unwrap() - 40];
    assert!(matches!(
        google::parse_html(cut),
        Err(ExtractError::BlockUnparseable(_))
    ));
}

#[test]
fn google_json_without_prefix_still_parses() {
    let body = load_fixture("google.json");
    let stripped = &body[")]}'".len()..];
    assert_eq!(google::parse_json(stripped).unwrap().count(), 3);
}

#[test]
fn duckduckgo_token_from_landing_page() {
    let token = duckduckgo::parse_token(&load_fixture("duckduckgo_token.html")).unwrap();
    assert_eq!(token.as_str(), "4-98765432109876543210");
}

#[test]
fn duckduckgo_results() {
    let mut iter = duckduckgo::parse_results(&load_fixture("duckduckgo.json")).unwrap();
    let results: Vec<_> = iter.by_ref().collect();
    assert_eq!(results.len(), 2);
    assert_eq!(iter.skipped(), 1);
    assert_eq!(results[0].image.url, "https://images.example.com/orange-cat.jpg");
    assert_eq!(results[0].image.source_url, "https://www.example.com/orange-cat");
    assert_eq!(results[0].source, "Bing");
    assert_eq!(results[1].image.title, "Dancing cat");
    assert!(results.iter().all(|r| r.image.provider == Provider::DuckDuckGo));
}

#[test]
fn brave_results() {
    let mut iter = brave::parse_results(&load_fixture("brave.json")).unwrap();
    let results: Vec<_> = iter.by_ref().collect();
    assert_eq!(results.len(), 2);
    assert_eq!(iter.skipped(), 1);

    let first = &results[0];
    assert_eq!(first.image.url, "https://pets.example.org/images/grey-cat.jpg");
    assert_eq!(first.page_url, first.image.source_url);
    assert_eq!(first.page_url, "https://pets.example.org/grey-cat");
    assert_eq!(first.format, "jpeg");
    assert_eq!(first.color, Some(Rgb::new(0x6b, 0x6e, 0x70)));
    assert_eq!(first.page_age.to_rfc3339(), "2024-02-09T00:00:00+00:00");

    let second = &results[1];
    assert_eq!(second.image.width, 0);
    assert_eq!(second.page_age.timestamp(), 0);
    assert_eq!(second.resized_url, "");
}

#[test]
fn brave_results_serialize_flat() {
    let first = brave::parse_results(&load_fixture("brave.json"))
        .unwrap()
        .next()
        .unwrap();
    let json = serde_json::to_value(&first).unwrap();
    assert_eq!(json["url"], "https://pets.example.org/images/grey-cat.jpg");
    assert_eq!(json["provider"], "brave");
    assert_eq!(json["color"], "#6B6E70");
}

#[test]
fn cancelled_iteration_stops() {
    let cancel = Arc::new(AtomicBool::new(true));
    let iter = duckduckgo::parse_results(&load_fixture("duckduckgo.json"))
        .unwrap()
        .with_cancel(cancel);
    assert_eq!(iter.count(), 0);
}
