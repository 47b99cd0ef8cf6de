//! Retrying wrapper around the scraper client, and multi-provider search.

use std::time::Duration;

use imgscrape_api::types::{
    BraveImageResult, DuckDuckGoImageResult, GoogleImageResult, ImageResult, Provider,
    SafeSearchLevel,
};
use imgscrape_api::{
    BaseUrls, BraveQuery, Client, DuckDuckGoQuery, GoogleQuery, Query, ResultIter,
    DEFAULT_TIMEOUT,
};
use rand::Rng;

use crate::error::ImageScrapeError;
use crate::validation::MAX_LIMIT;

/// Retry policy for transient upstream failures.
///
/// Delays grow exponentially from `base_delay_ms`, are capped at
/// `max_delay_ms`, and carry ±20% jitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
            max_delay_ms: 15000,
        }
    }
}

impl RetryConfig {
    /// Reads `IMGSCRAPE_RETRY_MAX`, `IMGSCRAPE_RETRY_BASE_MS` and
    /// `IMGSCRAPE_RETRY_MAX_MS`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_retries: parse_or(&lookup, "IMGSCRAPE_RETRY_MAX", defaults.max_retries),
            base_delay_ms: parse_or(&lookup, "IMGSCRAPE_RETRY_BASE_MS", defaults.base_delay_ms),
            max_delay_ms: parse_or(&lookup, "IMGSCRAPE_RETRY_MAX_MS", defaults.max_delay_ms),
        }
    }

    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = self
            .base_delay_ms
            .saturating_mul(exp)
            .min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

/// Reads `IMGSCRAPE_TIMEOUT_SECS`, falling back to 30 seconds.
pub fn timeout_from_env() -> Duration {
    timeout_from_lookup(|key| std::env::var(key).ok())
}

fn timeout_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Duration {
    Duration::from_secs(parse_or(
        &lookup,
        "IMGSCRAPE_TIMEOUT_SECS",
        DEFAULT_TIMEOUT.as_secs(),
    ))
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Provider-neutral search parameters, applied to each provider's query builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub text: String,
    /// `None` keeps each provider's own default level.
    pub safe_search: Option<SafeSearchLevel>,
    pub limit: usize,
    /// DuckDuckGo region, e.g. `us-en`.
    pub region: Option<String>,
    /// Brave country, e.g. `us`.
    pub country: Option<String>,
    /// Google language, e.g. `en`.
    pub language: Option<String>,
}

impl SearchRequest {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            safe_search: None,
            limit: MAX_LIMIT,
            region: None,
            country: None,
            language: None,
        }
    }

    pub fn with_safe_search(mut self, safe_search: SafeSearchLevel) -> Self {
        self.safe_search = Some(safe_search);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn google_query(&self) -> GoogleQuery {
        let mut query = GoogleQuery::new(&self.text);
        if let Some(language) = &self.language {
            query = query.with_language(language);
        }
        apply_safe_search(query, self.safe_search)
    }

    pub fn duckduckgo_query(&self) -> DuckDuckGoQuery {
        let mut query = DuckDuckGoQuery::new(&self.text);
        if let Some(region) = &self.region {
            query = query.with_region(region);
        }
        apply_safe_search(query, self.safe_search)
    }

    pub fn brave_query(&self) -> BraveQuery {
        let mut query = BraveQuery::new(&self.text);
        if let Some(country) = &self.country {
            query = query.with_country(country);
        }
        apply_safe_search(query, self.safe_search)
    }
}

fn apply_safe_search<Q: Query>(query: Q, level: Option<SafeSearchLevel>) -> Q {
    match level {
        Some(level) => query.with_safe_search(level),
        None => query,
    }
}

/// Results of one provider, keeping its provider-specific fields.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderResults {
    Google(Vec<GoogleImageResult>),
    DuckDuckGo(Vec<DuckDuckGoImageResult>),
    Brave(Vec<BraveImageResult>),
}

impl ProviderResults {
    pub fn provider(&self) -> Provider {
        match self {
            Self::Google(_) => Provider::Google,
            Self::DuckDuckGo(_) => Provider::DuckDuckGo,
            Self::Brave(_) => Provider::Brave,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Google(rows) => rows.len(),
            Self::DuckDuckGo(rows) => rows.len(),
            Self::Brave(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Common view of every result, in provider order.
    pub fn images(&self) -> Vec<&ImageResult> {
        match self {
            Self::Google(rows) => rows.iter().map(|r| &r.image).collect(),
            Self::DuckDuckGo(rows) => rows.iter().map(|r| &r.image).collect(),
            Self::Brave(rows) => rows.iter().map(|r| &r.image).collect(),
        }
    }

    pub fn into_images(self) -> Vec<ImageResult> {
        match self {
            Self::Google(rows) => rows.into_iter().map(Into::into).collect(),
            Self::DuckDuckGo(rows) => rows.into_iter().map(Into::into).collect(),
            Self::Brave(rows) => rows.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result of one provider within a multi-provider search.
#[derive(Debug)]
pub struct ProviderOutcome {
    pub provider: Provider,
    pub results: Result<ProviderResults, ImageScrapeError>,
}

/// Scraper client wrapper that retries transient failures and bounds result counts.
///
/// Template drift and invalid queries are never retried: a second attempt
/// would get the same page back.
pub struct SearchClient {
    inner: Client,
    retry: RetryConfig,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchClient {
    /// Creates a client against the production endpoints, configured from the environment.
    pub fn new() -> Self {
        Self {
            inner: Client::new().with_timeout(timeout_from_env()),
            retry: RetryConfig::from_env(),
        }
    }

    /// Creates a client with custom endpoints. Used for testing.
    pub fn with_base_urls(base_urls: BaseUrls) -> Self {
        Self {
            inner: Client::with_base_urls(base_urls).with_timeout(timeout_from_env()),
            retry: RetryConfig::from_env(),
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    async fn with_retry<T, F, Fut>(&self, label: Provider, mut f: F) -> Result<T, ImageScrapeError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, ImageScrapeError>>,
    {
        let mut attempt = 0usize;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt > self.retry.max_retries || !err.is_retryable() {
                        return Err(err);
                    }
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{} request failed (attempt {}/{}), retrying in {:.1}s",
                        label,
                        attempt,
                        self.retry.max_retries,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Searches Google Images (JSON endpoint), keeping at most `limit` results.
    pub async fn google(
        &self,
        query: &GoogleQuery,
        limit: usize,
    ) -> Result<Vec<GoogleImageResult>, ImageScrapeError> {
        let iter = self
            .with_retry(Provider::Google, || async {
                Ok(self.inner.get_google_images(query).await?)
            })
            .await?;
        Ok(take_limited(iter, limit))
    }

    /// Searches Google Images through the HTML results page.
    pub async fn google_html(
        &self,
        query: &GoogleQuery,
        limit: usize,
    ) -> Result<Vec<GoogleImageResult>, ImageScrapeError> {
        let iter = self
            .with_retry(Provider::Google, || async {
                Ok(self.inner.get_google_images_html(query).await?)
            })
            .await?;
        Ok(take_limited(iter, limit))
    }

    /// Searches DuckDuckGo. Each attempt fetches a fresh session token.
    pub async fn duckduckgo(
        &self,
        query: &DuckDuckGoQuery,
        limit: usize,
    ) -> Result<Vec<DuckDuckGoImageResult>, ImageScrapeError> {
        let iter = self
            .with_retry(Provider::DuckDuckGo, || async {
                Ok(self.inner.get_duckduckgo_images(query).await?)
            })
            .await?;
        Ok(take_limited(iter, limit))
    }

    pub async fn brave(
        &self,
        query: &BraveQuery,
        limit: usize,
    ) -> Result<Vec<BraveImageResult>, ImageScrapeError> {
        let iter = self
            .with_retry(Provider::Brave, || async {
                Ok(self.inner.get_brave_images(query).await?)
            })
            .await?;
        Ok(take_limited(iter, limit))
    }

    /// Queries every provider concurrently. One provider failing never
    /// affects the others; outcomes come back in [`Provider::ALL`] order.
    /// Failures are returned, not logged, so the caller reports them once.
    pub async fn search_all(&self, request: &SearchRequest) -> Vec<ProviderOutcome> {
        let google_query = request.google_query();
        let duckduckgo_query = request.duckduckgo_query();
        let brave_query = request.brave_query();

        let (google, duckduckgo, brave) = tokio::join!(
            self.google(&google_query, request.limit),
            self.duckduckgo(&duckduckgo_query, request.limit),
            self.brave(&brave_query, request.limit),
        );

        vec![
            ProviderOutcome {
                provider: Provider::Google,
                results: google.map(ProviderResults::Google),
            },
            ProviderOutcome {
                provider: Provider::DuckDuckGo,
                results: duckduckgo.map(ProviderResults::DuckDuckGo),
            },
            ProviderOutcome {
                provider: Provider::Brave,
                results: brave.map(ProviderResults::Brave),
            },
        ]
    }
}

fn take_limited<T>(mut iter: ResultIter<T>, limit: usize) -> Vec<T> {
    let rows: Vec<T> = iter.by_ref().take(limit).collect();
    if iter.is_drifting() {
        tracing::warn!(
            "{}: all {} entries were skipped, the response layout may have changed",
            iter.provider(),
            iter.skipped()
        );
    } else if iter.skipped() > 0 {
        tracing::debug!("{}: skipped {} malformed entries", iter.provider(), iter.skipped());
    }
    rows
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn retry_config_defaults() {
        assert_eq!(RetryConfig::from_lookup(lookup(&[])), RetryConfig::default());
        assert_eq!(timeout_from_lookup(lookup(&[])), Duration::from_secs(30));
    }

    #[test]
    fn retry_config_env_overrides() {
        let cfg = RetryConfig::from_lookup(lookup(&[
            ("IMGSCRAPE_RETRY_MAX", "5"),
            ("IMGSCRAPE_RETRY_BASE_MS", " 250 "),
            ("IMGSCRAPE_RETRY_MAX_MS", "not a number"),
        ]));
        assert_eq!(cfg.max_retries, 5);
        assert_eq!(cfg.base_delay_ms, 250);
        assert_eq!(cfg.max_delay_ms, 15000);
        assert_eq!(
            timeout_from_lookup(lookup(&[("IMGSCRAPE_TIMEOUT_SECS", "7")])),
            Duration::from_secs(7)
        );
    }

    #[test]
    fn delay_grows_and_caps() {
        let cfg = RetryConfig {
            max_retries: 10,
            base_delay_ms: 100,
            max_delay_ms: 1000,
        };
        let first = cfg.delay_for_attempt(1).as_millis();
        assert!((80..=120).contains(&first));
        let third = cfg.delay_for_attempt(3).as_millis();
        assert!((320..=480).contains(&third));
        let capped = cfg.delay_for_attempt(40).as_millis();
        assert!(capped <= 1200);
    }

    fn image(provider: Provider, url: &str) -> ImageResult {
        ImageResult {
            url: url.to_string(),
            title: String::new(),
            width: 0,
            height: 0,
            thumbnail_url: String::new(),
            source_url: String::new(),
            provider,
        }
    }

    #[test]
    fn provider_results_keep_specific_fields_and_common_view() {
        let results = ProviderResults::DuckDuckGo(vec![DuckDuckGoImageResult {
            image: image(Provider::DuckDuckGo, "https://img.example.com/a.jpg"),
            source: "Bing".to_string(),
        }]);
        assert_eq!(results.provider(), Provider::DuckDuckGo);
        assert_eq!(results.len(), 1);
        assert!(!results.is_empty());
        assert_eq!(results.images()[0].url, "https://img.example.com/a.jpg");
        match &results {
            ProviderResults::DuckDuckGo(rows) => assert_eq!(rows[0].source, "Bing"),
            other => panic!("expected DuckDuckGo results, got {:?}", other),
        }
        let images = results.into_images();
        assert_eq!(images[0].provider, Provider::DuckDuckGo);
    }

    #[test]
    fn empty_provider_results() {
        let results = ProviderResults::Brave(Vec::new());
        assert!(results.is_empty());
        assert!(results.images().is_empty());
    }

    #[test]
    fn request_applies_to_each_provider() {
        let request = SearchRequest::new("cats")
            .with_safe_search(SafeSearchLevel::Strict)
            .with_region("de-de")
            .with_country("de")
            .with_language("de");
        assert!(request.google_query().path().contains("&safe=active&lr=lang_de&hl=de"));
        assert_eq!(request.duckduckgo_query().region, "de-de");
        assert_eq!(
            request.brave_query().path(),
            "images?q=cats&safesearch=strict&country=de"
        );
    }

    #[test]
    fn request_without_safe_search_keeps_provider_defaults() {
        let request = SearchRequest::new("cats");
        assert_eq!(request.limit, 100);
        assert_eq!(request.google_query().common.safe_search, SafeSearchLevel::Off);
        assert_eq!(
            request.duckduckgo_query().common.safe_search,
            SafeSearchLevel::Moderate
        );
        assert_eq!(request.brave_query().path(), "images?q=cats");
    }
}
