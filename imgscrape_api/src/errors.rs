//! Error types for the scrapers.

use crate::extract::ExtractError;
use crate::types::Provider;

/// Fatal, page-level failures. Each variant names the provider it came from so
/// callers querying several providers can tell which one broke.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The response was fetched but its payload could not be recovered.
    #[error("{provider}: {source}")]
    Extract {
        provider: Provider,
        #[source]
        source: ExtractError,
    },
    /// The HTTP request failed (network error, timeout, TLS, body read).
    #[error("{provider}: request failed: {source}")]
    Transport {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },
    /// The provider answered with a non-success status.
    #[error("{provider}: request failed with status {status}")]
    HttpStatus {
        provider: Provider,
        status: u16,
        body: String,
    },
    /// The query was rejected before any request was sent.
    #[error("{provider}: invalid query: {reason}")]
    InvalidQuery { provider: Provider, reason: String },
}

impl Error {
    pub(crate) fn extract(provider: Provider, source: ExtractError) -> Self {
        Self::Extract { provider, source }
    }

    /// Provider that produced this error.
    pub fn provider(&self) -> Provider {
        match self {
            Self::Extract { provider, .. }
            | Self::Transport { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::InvalidQuery { provider, .. } => *provider,
        }
    }

    /// True when the page arrived but no longer has the expected structure,
    /// i.e. the provider changed its template.
    pub fn is_template_drift(&self) -> bool {
        matches!(self, Self::Extract { .. })
    }

    /// True for failures that may succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::Extract { .. } | Self::InvalidQuery { .. } => false,
        }
    }
}
