//! Pure mappers from raw analytics payloads to chart-ready datasets.
//!
//! Each mapper is stateless, total over well-formed input, and idempotent:
//! identical input produces identical output on every call, so datasets can
//! be re-derived from the store on every render. Each output holds parallel
//! arrays where index `i` of every array refers to the same source record as
//! `labels[i]`.

use chrono::NaiveDate;
use pulsedash_client::types::{EngagementRecord, OverviewSnapshot, TrendingTag};

/// Default number of newest engagement records charted.
pub const ENGAGEMENT_WINDOW: usize = 10;

/// Default number of top trending tags charted.
pub const TRENDING_WINDOW: usize = 8;

/// Fixed category order for the sentiment distribution chart.
pub const SENTIMENT_LABELS: [&str; 3] = ["Positive", "Negative", "Neutral"];

/// Sentiment category counts in [`SENTIMENT_LABELS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionChart {
    pub labels: [&'static str; 3],
    pub counts: [u64; 3],
}

/// Chronologically ordered engagement series with index-aligned metric arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngagementSeries {
    pub labels: Vec<NaiveDate>,
    pub likes: Vec<u64>,
    pub shares: Vec<u64>,
    pub comments: Vec<u64>,
}

/// Trending tag bars in service ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendingBars {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

/// Maps an overview snapshot to the sentiment distribution triple.
///
/// Category order is fixed to `[Positive, Negative, Neutral]`. A missing
/// snapshot yields `[0, 0, 0]`; missing numeric fields were already defaulted
/// to zero at deserialization.
#[must_use]
pub fn sentiment_distribution(overview: Option<&OverviewSnapshot>) -> DistributionChart {
    let counts = overview.map_or([0, 0, 0], |o| {
        let d = o.sentiment_distribution;
        [d.positive, d.negative, d.neutral]
    });
    DistributionChart {
        labels: SENTIMENT_LABELS,
        counts,
    }
}

/// Maps engagement records to a chronological time series.
///
/// Takes the first `window` records — the service sends newest-first, a
/// collaborator contract this layer does not re-verify — and reverses them so
/// dates ascend. Shorter inputs chart in full.
#[must_use]
pub fn engagement_series(records: &[EngagementRecord], window: usize) -> EngagementSeries {
    let take = window.min(records.len());
    let mut series = EngagementSeries {
        labels: Vec::with_capacity(take),
        likes: Vec::with_capacity(take),
        shares: Vec::with_capacity(take),
        comments: Vec::with_capacity(take),
    };
    for record in records[..take].iter().rev() {
        series.labels.push(record.date);
        series.likes.push(record.likes);
        series.shares.push(record.shares);
        series.comments.push(record.comments);
    }
    series
}

/// Maps trending tags to ranked bars.
///
/// Takes the first `window` tags in input order; the service ranking is
/// authoritative and is never re-sorted here.
#[must_use]
pub fn trending_bars(tags: &[TrendingTag], window: usize) -> TrendingBars {
    let take = window.min(tags.len());
    let mut bars = TrendingBars {
        labels: Vec::with_capacity(take),
        counts: Vec::with_capacity(take),
    };
    for tag in &tags[..take] {
        bars.labels.push(tag.tag.clone());
        bars.counts.push(tag.count);
    }
    bars
}
