//! HTTP client for the analytics REST API.
//!
//! Wraps `reqwest` with typed response deserialization and the error taxonomy
//! in [`crate::error`]. Every analytics endpoint returns a
//! `{"success": true, "data": ...}` envelope which is unwrapped uniformly;
//! transport failures and non-2xx statuses surface as [`ClientError::Http`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AggregateFetchError, AnalysisRequestError, ClientError};
use crate::types::{
    ApiEnvelope, DashboardBundle, EngagementRecord, HealthStatus, OverviewSnapshot,
    SentimentDetail, SentimentResult, TrendingTag,
};

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Client for the analytics REST API.
///
/// Manages the HTTP client and base URL. Use [`AnalyticsClient::new`] for the
/// default service address or [`AnalyticsClient::with_base_url`] to point at
/// a mock server in tests.
pub struct AnalyticsClient {
    client: Client,
    base_url: Url,
}

impl AnalyticsClient {
    /// Creates a new client pointed at the default analytics service.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, ClientError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("pulsedash/0.1 (analytics-dashboard)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends path segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetches the aggregate overview snapshot.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_overview(&self) -> Result<OverviewSnapshot, ClientError> {
        self.get_json("analytics/overview").await
    }

    /// Fetches the detailed sentiment payload (timeline plus recent posts).
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AnalyticsClient::fetch_overview`].
    pub async fn fetch_sentiment(&self) -> Result<SentimentDetail, ClientError> {
        self.get_json("analytics/sentiment").await
    }

    /// Fetches trending tags, pre-ranked by the service.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AnalyticsClient::fetch_overview`].
    pub async fn fetch_trending(&self) -> Result<Vec<TrendingTag>, ClientError> {
        self.get_json("analytics/trending").await
    }

    /// Fetches per-day engagement records, newest-first by service contract.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AnalyticsClient::fetch_overview`].
    pub async fn fetch_engagement(&self) -> Result<Vec<EngagementRecord>, ClientError> {
        self.get_json("analytics/engagement").await
    }

    /// Issues the four overview-family requests concurrently and joins them
    /// all-or-nothing.
    ///
    /// All four GETs are in flight simultaneously; the join resumes exactly
    /// once, either with a complete [`DashboardBundle`] or with the first
    /// failure. On failure no partial results escape — a half-populated
    /// bundle would be indistinguishable from real data downstream. No retry
    /// is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateFetchError`] naming the endpoint that failed first
    /// and carrying the underlying [`ClientError`].
    pub async fn fetch_all(&self) -> Result<DashboardBundle, AggregateFetchError> {
        let tag = |endpoint: &'static str| {
            move |source: ClientError| AggregateFetchError { endpoint, source }
        };

        let (overview, sentiment, trending, engagement) = tokio::try_join!(
            async { self.fetch_overview().await.map_err(tag("overview")) },
            async { self.fetch_sentiment().await.map_err(tag("sentiment")) },
            async { self.fetch_trending().await.map_err(tag("trending")) },
            async { self.fetch_engagement().await.map_err(tag("engagement")) },
        )?;

        tracing::debug!(
            trending = trending.len(),
            engagement = engagement.len(),
            "aggregate fetch complete"
        );

        Ok(DashboardBundle {
            overview,
            sentiment,
            trending,
            engagement,
        })
    }

    /// Scores a single text via the service classifier.
    ///
    /// Callers must pass non-empty, non-whitespace text; the precondition is
    /// checked here and violations never reach the wire.
    ///
    /// # Errors
    ///
    /// - [`AnalysisRequestError::EmptyText`] if `text` is empty or
    ///   whitespace-only (no request is issued).
    /// - [`AnalysisRequestError::Request`] on transport failure, non-2xx
    ///   status, or a malformed response body.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResult, AnalysisRequestError> {
        if text.trim().is_empty() {
            return Err(AnalysisRequestError::EmptyText);
        }

        let url = self.endpoint_url("analytics/analyze")?;
        let response = self
            .client
            .post(url)
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(ClientError::from)?;
        let response = response.error_for_status().map_err(ClientError::from)?;

        let body = response.text().await.map_err(ClientError::from)?;
        let envelope: ApiEnvelope<SentimentResult> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: "analytics/analyze".to_owned(),
                source: e,
            })?;

        Ok(envelope.data)
    }

    /// Pings the service liveness endpoint.
    ///
    /// `/health` lives at the server root beside the API base path and is not
    /// wrapped in the usual envelope.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ClientError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self
            .base_url
            .join("/health")
            .map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: "health".to_owned(),
            source: e,
        })
    }

    /// Resolves a path relative to the configured base URL.
    fn endpoint_url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("'{path}': {e}")))
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and unwraps the
    /// `{"success": ..., "data": ...}` envelope into the payload type.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on network failure or a non-2xx status,
    /// [`ClientError::Deserialize`] if the body does not match the envelope.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint_url(path)?;
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: path.to_owned(),
                source: e,
            })?;
        Ok(envelope.data)
    }
}
