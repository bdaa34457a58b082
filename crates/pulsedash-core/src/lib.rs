//! Dashboard data-orchestration layer.
//!
//! Owns the configuration, the dashboard state machine, the pure chart-data
//! mappers, and the refresh/analyze orchestration over
//! [`pulsedash_client::AnalyticsClient`]. Presentation (the CLI renderer)
//! consumes only store snapshots and mapper outputs.

pub mod charts;
pub mod config;
pub mod refresh;
pub mod store;

pub use charts::{
    engagement_series, sentiment_distribution, trending_bars, DistributionChart, EngagementSeries,
    TrendingBars, ENGAGEMENT_WINDOW, TRENDING_WINDOW,
};
pub use config::{load_config, load_config_from_env, ConfigError, DashboardConfig};
pub use refresh::{run_analysis, run_refresh};
pub use store::{DashboardEvent, DashboardPhase, DashboardStore};
