//! Analytics service response types.
//!
//! All types model the JSON structures returned by the analytics REST API.
//! The service wraps every response in a `{"success": true, "data": ...}`
//! envelope; [`ApiEnvelope`] captures that pattern generically and callers
//! unwrap `.data` uniformly.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level envelope for all analytics API responses.
///
/// `success` is informational only — transport status and body shape decide
/// failure; `data` is the payload proper.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: T,
}

fn default_success() -> bool {
    true
}

// ---------------------------------------------------------------------------
// /analytics/overview
// ---------------------------------------------------------------------------

/// Aggregate analytics summary for the whole dataset at fetch time.
///
/// Replaced wholesale on refetch. Every numeric field is serde-defaulted so a
/// partially-populated snapshot deserializes with zeros rather than failing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OverviewSnapshot {
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub total_engagement: u64,
    /// Mean classifier polarity across all posts, in `[-1.0, 1.0]`.
    #[serde(default)]
    pub avg_sentiment_score: f64,
    #[serde(default)]
    pub sentiment_distribution: SentimentDistribution,
    /// Per-platform post and engagement totals, keyed by platform name.
    #[serde(default)]
    pub platform_stats: BTreeMap<String, PlatformStats>,
}

/// Post counts per sentiment category.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct SentimentDistribution {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub negative: u64,
    #[serde(default)]
    pub neutral: u64,
}

/// Post and engagement totals for one platform.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub struct PlatformStats {
    #[serde(default)]
    pub posts: u64,
    #[serde(default)]
    pub engagement: u64,
}

// ---------------------------------------------------------------------------
// /analytics/sentiment
// ---------------------------------------------------------------------------

/// Detailed sentiment payload: a per-day category timeline plus the most
/// recent classified posts.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SentimentDetail {
    #[serde(default)]
    pub timeline: Vec<SentimentTimelinePoint>,
    #[serde(default)]
    pub recent_posts: Vec<RecentPost>,
}

/// Sentiment category counts for a single day.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SentimentTimelinePoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub negative: u64,
    #[serde(default)]
    pub neutral: u64,
}

/// A single classified post from the recent-posts feed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecentPost {
    pub id: i64,
    pub platform: String,
    pub content: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    /// ISO-8601 timestamp as sent by the service.
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// /analytics/engagement
// ---------------------------------------------------------------------------

/// Per-day interaction counts.
///
/// The service returns these newest-first; that ordering is a collaborator
/// contract, not something this client verifies. Consumers reverse a window
/// of records to get chronological order.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct EngagementRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub reach: u64,
}

// ---------------------------------------------------------------------------
// /analytics/trending
// ---------------------------------------------------------------------------

/// A hashtag with its mention count, ranked by the source service.
///
/// The sequence arrives pre-sorted by relevance; consumers take a prefix and
/// never re-sort.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TrendingTag {
    pub tag: String,
    #[serde(default)]
    pub count: u64,
    /// Week-over-week growth percentage.
    #[serde(default)]
    pub growth: f64,
}

// ---------------------------------------------------------------------------
// /analytics/analyze
// ---------------------------------------------------------------------------

/// Sentiment category assigned by the classifier.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Classifier output for a single user-submitted text.
///
/// Transient: holds only for the current analyzer invocation and is replaced
/// wholesale by the next call.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Polarity in `[-1.0, 1.0]`.
    pub score: f64,
    /// Classifier confidence in `[0.0, 100.0]`.
    pub confidence: f64,
    #[serde(default)]
    pub subjectivity: Option<f64>,
}

// ---------------------------------------------------------------------------
// /health
// ---------------------------------------------------------------------------

/// Service liveness report. Unlike the analytics endpoints, `/health` is not
/// wrapped in an [`ApiEnvelope`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
}

/// The four overview-family payloads committed together by a successful
/// aggregate fetch. All-or-nothing: no partially-populated bundle exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardBundle {
    pub overview: OverviewSnapshot,
    pub sentiment: SentimentDetail,
    pub trending: Vec<TrendingTag>,
    pub engagement: Vec<EngagementRecord>,
}
