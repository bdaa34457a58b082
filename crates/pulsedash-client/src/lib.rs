//! Typed HTTP client for the social analytics service.
//!
//! Exposes one GET per analytics endpoint, an all-or-nothing concurrent
//! aggregate fetch over the four overview-family endpoints, and the on-demand
//! `analyze` POST for single-text sentiment scoring.

pub mod client;
pub mod error;
pub mod types;

pub use client::AnalyticsClient;
pub use error::{AggregateFetchError, AnalysisRequestError, ClientError};
pub use types::{
    DashboardBundle, EngagementRecord, HealthStatus, OverviewSnapshot, PlatformStats, RecentPost,
    Sentiment, SentimentDetail, SentimentDistribution, SentimentResult, SentimentTimelinePoint,
    TrendingTag,
};
