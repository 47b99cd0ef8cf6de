//! HTTP transport for the three image search providers.

use std::time::Duration;

use url::Url;

use crate::{
    providers::{brave, duckduckgo, google},
    query::{BraveQuery, DuckDuckGoQuery, GoogleQuery, Query, MAX_QUERY_LENGTH},
    results::ResultIter,
    types::{BraveImageResult, DuckDuckGoImageResult, GoogleImageResult, Provider, SessionToken},
    user_agent::{get_user_agent, GOOGLE_APP_USER_AGENT},
    Error,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoint of each provider. Overridable so tests can point at a mock server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrls {
    pub google: String,
    pub duckduckgo: String,
    pub brave: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            google: "https://www.google.com/search".to_string(),
            duckduckgo: "https://duckduckgo.com".to_string(),
            brave: "https://search.brave.com/api".to_string(),
        }
    }
}

impl BaseUrls {
    /// Points every provider at the same host, each under its usual path.
    pub fn all(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            google: format!("{}/search", base_url),
            duckduckgo: base_url.to_string(),
            brave: format!("{}/api", base_url),
        }
    }

    fn get(&self, provider: Provider) -> &str {
        match provider {
            Provider::Google => &self.google,
            Provider::DuckDuckGo => &self.duckduckgo,
            Provider::Brave => &self.brave,
        }
    }
}

/// HTTP client for Google, DuckDuckGo and Brave image search.
///
/// Holds no connection state: each request builds a fresh `reqwest::Client`
/// with the provider's user agent and the configured timeout. Responses are
/// handed to the provider's extractor, which returns a lazy [`ResultIter`].
pub struct Client {
    base_urls: BaseUrls,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production endpoints.
    pub fn new() -> Self {
        Self {
            base_urls: BaseUrls::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a new client with custom endpoints. Used for testing with wiremock.
    pub fn with_base_urls(base_urls: BaseUrls) -> Self {
        Self {
            base_urls,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    fn get_url(&self, provider: Provider, path: &str) -> Result<Url, Error> {
        let base = self.base_urls.get(provider);
        let raw = if path.starts_with('?') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base.trim_end_matches('/'), path)
        };
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidQuery {
                provider,
                reason: format!("invalid request URL: {}", e),
            }
        })
    }

    async fn get(
        &self,
        provider: Provider,
        path: &str,
        user_agent: &str,
    ) -> Result<Vec<u8>, Error> {
        let url = self.get_url(provider, path)?;
        let transport = |source: reqwest::Error| Error::Transport { provider, source };

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(self.timeout)
            .gzip(true)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                transport(e)
            })?;
        let mut request = client
            .get(url.clone())
            .header("accept", "*/*")
            .header("accept-language", "en-US,en;q=0.9");
        if provider == Provider::DuckDuckGo {
            request = request.header("referer", self.base_urls.get(provider));
        }

        tracing::debug!("{} GET {}", provider, url);
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            transport(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                provider,
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body.to_vec())
    }

    /// Searches Google Images through the JSON endpoint.
    pub async fn get_google_images(
        &self,
        query: &GoogleQuery,
    ) -> Result<ResultIter<GoogleImageResult>, Error> {
        check_text(Provider::Google, query)?;
        let body = self
            .get(Provider::Google, &query.path(), GOOGLE_APP_USER_AGENT)
            .await?;
        google::parse_json(&body).map_err(|e| Error::extract(Provider::Google, e))
    }

    /// Searches Google Images by scraping the classic HTML results page.
    pub async fn get_google_images_html(
        &self,
        query: &GoogleQuery,
    ) -> Result<ResultIter<GoogleImageResult>, Error> {
        check_text(Provider::Google, query)?;
        let body = self
            .get(Provider::Google, &query.html_path(), get_user_agent())
            .await?;
        google::parse_html(&String::from_utf8_lossy(&body))
            .map_err(|e| Error::extract(Provider::Google, e))
    }

    /// Fetches a fresh DuckDuckGo session token for `query`.
    pub async fn get_duckduckgo_token(&self, query: &DuckDuckGoQuery) -> Result<SessionToken, Error> {
        check_duckduckgo(query)?;
        let body = self
            .get(Provider::DuckDuckGo, &query.token_path(), get_user_agent())
            .await?;
        duckduckgo::parse_token(&body).map_err(|e| Error::extract(Provider::DuckDuckGo, e))
    }

    /// Searches DuckDuckGo. Every call fetches its own session token first.
    pub async fn get_duckduckgo_images(
        &self,
        query: &DuckDuckGoQuery,
    ) -> Result<ResultIter<DuckDuckGoImageResult>, Error> {
        let token = self.get_duckduckgo_token(query).await?;
        let body = self
            .get(Provider::DuckDuckGo, &query.path(&token), get_user_agent())
            .await?;
        duckduckgo::parse_results(&body).map_err(|e| Error::extract(Provider::DuckDuckGo, e))
    }

    /// Searches Brave.
    pub async fn get_brave_images(
        &self,
        query: &BraveQuery,
    ) -> Result<ResultIter<BraveImageResult>, Error> {
        check_text(Provider::Brave, query)?;
        let body = self
            .get(Provider::Brave, &query.path(), get_user_agent())
            .await?;
        brave::parse_results(&body).map_err(|e| Error::extract(Provider::Brave, e))
    }
}

fn check_text(provider: Provider, query: &impl Query) -> Result<(), Error> {
    if query.text().trim().is_empty() {
        return Err(Error::InvalidQuery {
            provider,
            reason: "query text is empty".to_string(),
        });
    }
    Ok(())
}

fn check_duckduckgo(query: &DuckDuckGoQuery) -> Result<(), Error> {
    check_text(Provider::DuckDuckGo, query)?;
    if !query.is_within_length() {
        return Err(Error::InvalidQuery {
            provider: Provider::DuckDuckGo,
            reason: format!("query text exceeds {} characters", MAX_QUERY_LENGTH),
        });
    }
    if query.region.trim().is_empty() {
        return Err(Error::InvalidQuery {
            provider: Provider::DuckDuckGo,
            reason: "region is empty".to_string(),
        });
    }
    Ok(())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
