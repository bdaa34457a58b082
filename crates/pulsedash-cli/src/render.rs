//! Text rendering of the dashboard state.
//!
//! Pure presentation: consumes store snapshots and the chart mappers'
//! outputs, produces aligned text. Nothing here touches the network or
//! mutates state.

use std::fmt::Write as _;

use pulsedash_client::types::{HealthStatus, SentimentResult};
use pulsedash_core::charts::{engagement_series, sentiment_distribution, trending_bars};
use pulsedash_core::store::{DashboardPhase, DashboardStore};

const BAR_WIDTH: usize = 40;

/// Renders the whole dashboard for the current store phase.
///
/// The `Failed` phase renders an explicit error banner — a failed fetch must
/// be distinguishable from an empty dataset.
#[must_use]
pub fn render_dashboard(
    store: &DashboardStore,
    engagement_window: usize,
    trending_window: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Social Media Analytics ==");

    match store.phase() {
        DashboardPhase::Loading => {
            let _ = writeln!(out, "loading analytics...");
        }
        DashboardPhase::Failed(message) => {
            let _ = writeln!(out, "fetch failed: {message}");
        }
        DashboardPhase::Ready(bundle) => {
            let overview = &bundle.overview;
            let _ = writeln!(out);
            let _ = writeln!(out, "Total posts:      {}", overview.total_posts);
            let _ = writeln!(out, "Total engagement: {}", overview.total_engagement);
            let _ = writeln!(out, "Avg sentiment:    {:.2}", overview.avg_sentiment_score);
            let _ = writeln!(out, "Platforms:        {}", overview.platform_stats.len());

            let distribution = sentiment_distribution(Some(overview));
            let max = distribution.counts.iter().copied().max().unwrap_or(0);
            let _ = writeln!(out, "\n-- Sentiment distribution --");
            for (label, count) in distribution.labels.iter().zip(distribution.counts) {
                let _ = writeln!(out, "{label:<8} {count:>6} {}", bar(count, max));
            }

            let series = engagement_series(&bundle.engagement, engagement_window);
            let _ = writeln!(out, "\n-- Engagement (last {} days) --", series.labels.len());
            for i in 0..series.labels.len() {
                let _ = writeln!(
                    out,
                    "{}  likes {:>6}  shares {:>6}  comments {:>6}",
                    series.labels[i], series.likes[i], series.shares[i], series.comments[i]
                );
            }

            let bars = trending_bars(&bundle.trending, trending_window);
            let max = bars.counts.iter().copied().max().unwrap_or(0);
            let _ = writeln!(out, "\n-- Trending tags --");
            for (label, count) in bars.labels.iter().zip(bars.counts) {
                let _ = writeln!(out, "{label:<18} {count:>6} {}", bar(count, max));
            }

            let _ = writeln!(out, "\n-- Platform performance --");
            for (platform, stats) in &overview.platform_stats {
                let _ = writeln!(
                    out,
                    "{platform:<12} posts {:>5}  engagement {:>8}",
                    stats.posts, stats.engagement
                );
            }
        }
    }

    if let Some(result) = store.analysis() {
        let _ = writeln!(out, "\n-- Last analysis --");
        out.push_str(&render_analysis(result));
    }

    out
}

/// Renders a single analyzer result.
#[must_use]
pub fn render_analysis(result: &SentimentResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sentiment:  {}", result.sentiment);
    let _ = writeln!(out, "Score:      {:.3}", result.score);
    let _ = writeln!(out, "Confidence: {:.1}%", result.confidence);
    if let Some(subjectivity) = result.subjectivity {
        let _ = writeln!(out, "Subjectivity: {subjectivity:.3}");
    }
    out
}

/// Renders the liveness report.
#[must_use]
pub fn render_health(health: &HealthStatus) -> String {
    format!("service {} at {}\n", health.status, health.timestamp)
}

/// A proportional bar, scaled so the largest value fills [`BAR_WIDTH`].
/// Non-zero values always render at least one mark.
fn bar(count: u64, max: u64) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}

#[cfg(test)]
mod tests {
    use pulsedash_client::types::{
        DashboardBundle, OverviewSnapshot, Sentiment, SentimentDistribution, TrendingTag,
    };
    use pulsedash_core::store::DashboardEvent;

    use super::*;

    fn ready_store() -> DashboardStore {
        let mut store = DashboardStore::new();
        store.apply(DashboardEvent::RefreshSucceeded(DashboardBundle {
            overview: OverviewSnapshot {
                total_posts: 42,
                total_engagement: 1000,
                avg_sentiment_score: 0.5,
                sentiment_distribution: SentimentDistribution {
                    positive: 10,
                    negative: 5,
                    neutral: 25,
                },
                ..OverviewSnapshot::default()
            },
            trending: vec![TrendingTag {
                tag: "#AI".to_string(),
                count: 1250,
                growth: 15.5,
            }],
            ..DashboardBundle::default()
        }));
        store
    }

    #[test]
    fn ready_dashboard_shows_overview_and_charts() {
        let rendered = render_dashboard(&ready_store(), 10, 8);
        assert!(rendered.contains("Total posts:      42"));
        assert!(rendered.contains("Positive"));
        assert!(rendered.contains("#AI"));
        assert!(!rendered.contains("fetch failed"));
    }

    #[test]
    fn failed_dashboard_shows_error_banner() {
        let mut store = DashboardStore::new();
        store.apply(DashboardEvent::RefreshFailed("connection refused".into()));
        let rendered = render_dashboard(&store, 10, 8);
        assert!(rendered.contains("fetch failed: connection refused"));
    }

    #[test]
    fn distribution_renders_in_fixed_category_order() {
        let rendered = render_dashboard(&ready_store(), 10, 8);
        let positive = rendered.find("Positive").unwrap();
        let negative = rendered.find("Negative").unwrap();
        let neutral = rendered.find("Neutral").unwrap();
        assert!(positive < negative && negative < neutral);
    }

    #[test]
    fn analysis_section_appears_once_stored() {
        let mut store = ready_store();
        store.apply(DashboardEvent::AnalysisSucceeded(SentimentResult {
            sentiment: Sentiment::Positive,
            score: 0.87,
            confidence: 91.0,
            subjectivity: Some(0.6),
        }));
        let rendered = render_dashboard(&store, 10, 8);
        assert!(rendered.contains("-- Last analysis --"));
        assert!(rendered.contains("Sentiment:  positive"));
        assert!(rendered.contains("Confidence: 91.0%"));
        assert!(rendered.contains("Subjectivity: 0.600"));
    }

    #[test]
    fn bar_scales_to_width_and_keeps_nonzero_visible() {
        assert_eq!(bar(1250, 1250).len(), BAR_WIDTH);
        assert_eq!(bar(1, 1250), "#");
        assert_eq!(bar(0, 1250), "");
        assert_eq!(bar(0, 0), "");
    }
}
