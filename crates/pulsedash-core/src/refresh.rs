//! Orchestration of the fetch and analyze cycles.
//!
//! Ties [`AnalyticsClient`] to [`DashboardStore`]: claims the in-flight slot,
//! awaits the client, and applies exactly one terminal event per accepted
//! cycle. Errors are logged and absorbed into the store's `Failed` phase —
//! they never propagate to the presentation layer and the loading phase can
//! never get stuck.
//!
//! The store lock is taken only in the start and resumption continuations,
//! never held across an await, so store mutations are always serialized
//! against renders.

use std::sync::Mutex;

use pulsedash_client::AnalyticsClient;

use crate::store::{DashboardEvent, DashboardStore};

fn lock(store: &Mutex<DashboardStore>) -> std::sync::MutexGuard<'_, DashboardStore> {
    store.lock().expect("dashboard store mutex poisoned")
}

/// Runs one aggregate fetch cycle.
///
/// Returns `false` if a refresh was already in flight (the call is rejected,
/// not queued). Otherwise awaits `fetch_all` and commits either the complete
/// bundle or the failure message, releasing the in-flight slot either way.
pub async fn run_refresh(client: &AnalyticsClient, store: &Mutex<DashboardStore>) -> bool {
    if !lock(store).begin_refresh() {
        tracing::warn!("refresh already in flight; skipping");
        return false;
    }

    let event = match client.fetch_all().await {
        Ok(bundle) => DashboardEvent::RefreshSucceeded(bundle),
        Err(e) => {
            tracing::error!(endpoint = e.endpoint, error = %e, "aggregate fetch failed");
            DashboardEvent::RefreshFailed(e.to_string())
        }
    };

    lock(store).apply(event);
    true
}

/// Runs one analyzer cycle for `text`.
///
/// Whitespace-only input is skipped before the slot is claimed — the
/// non-empty precondition is enforced here as well as in the client, so it
/// never reaches the wire. Returns `false` when the call is skipped or an
/// analysis is already in flight. A failed request keeps the previous result.
pub async fn run_analysis(
    client: &AnalyticsClient,
    store: &Mutex<DashboardStore>,
    text: &str,
) -> bool {
    let text = text.trim();
    if text.is_empty() {
        tracing::warn!("empty analysis text; skipping");
        return false;
    }

    if !lock(store).begin_analysis() {
        tracing::warn!("analysis already in flight; skipping");
        return false;
    }

    let event = match client.analyze(text).await {
        Ok(result) => {
            tracing::debug!(sentiment = %result.sentiment, score = result.score, "analysis complete");
            DashboardEvent::AnalysisSucceeded(result)
        }
        Err(e) => {
            tracing::error!(error = %e, "analysis request failed");
            DashboardEvent::AnalysisFailed
        }
    };

    lock(store).apply(event);
    true
}
