use thiserror::Error;

/// Errors produced by a single analytics API request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Any of the four overview-family requests failed, so the whole batch did.
///
/// Carries the endpoint that failed first and the underlying cause. No
/// partial results survive the failure.
#[derive(Debug, Error)]
#[error("aggregate fetch failed at {endpoint}: {source}")]
pub struct AggregateFetchError {
    pub endpoint: &'static str,
    #[source]
    pub source: ClientError,
}

/// The on-demand sentiment analysis request failed.
#[derive(Debug, Error)]
pub enum AnalysisRequestError {
    /// Precondition violation: the text was empty or whitespace-only. No
    /// request is issued in this case.
    #[error("analysis text must not be empty")]
    EmptyText,

    /// Transport failure, non-2xx status, or a malformed response body.
    #[error("analysis request failed: {source}")]
    Request {
        #[from]
        source: ClientError,
    },
}
