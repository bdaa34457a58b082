//! Dashboard state machine.
//!
//! `DashboardStore` is the single source of truth for fetched analytics data.
//! Failure is a distinct phase rather than ready-with-empty-data, so a failed
//! fetch is never mistaken for a successful fetch of an empty dataset, and
//! the loading phase resolves exactly once per accepted refresh cycle.

use pulsedash_client::{DashboardBundle, SentimentResult};

/// UI-visible phase of the fetched dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardPhase {
    /// Initial phase: the first fetch cycle has not resolved yet.
    Loading,
    /// The last fetch cycle committed a complete bundle.
    Ready(DashboardBundle),
    /// The last fetch cycle failed; carries a display message.
    Failed(String),
}

/// State transitions applied through [`DashboardStore::apply`].
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// The aggregate fetch resolved with a complete bundle.
    RefreshSucceeded(DashboardBundle),
    /// The aggregate fetch rejected; carries the error message.
    RefreshFailed(String),
    /// The analyzer call resolved.
    AnalysisSucceeded(SentimentResult),
    /// The analyzer call rejected; the previous result is kept.
    AnalysisFailed,
}

/// Owns the dashboard phase, the last analysis result, and the in-flight
/// guards for the two operations.
///
/// Mutation happens only through [`DashboardStore::apply`] and the
/// `begin_*` guards, so every transition is observable and testable in
/// isolation.
#[derive(Debug)]
pub struct DashboardStore {
    phase: DashboardPhase,
    analysis: Option<SentimentResult>,
    refresh_in_flight: bool,
    analysis_in_flight: bool,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardStore {
    /// Creates a store in the initial mount state: loading, no data, no
    /// analysis result.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: DashboardPhase::Loading,
            analysis: None,
            refresh_in_flight: false,
            analysis_in_flight: false,
        }
    }

    /// Claims the refresh slot.
    ///
    /// Returns `false` if a refresh is already in flight — the new call must
    /// be skipped, never raced against the pending one. The slot is released
    /// by the matching `RefreshSucceeded`/`RefreshFailed` event.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refresh_in_flight {
            return false;
        }
        self.refresh_in_flight = true;
        true
    }

    /// Claims the analysis slot. Same contract as
    /// [`DashboardStore::begin_refresh`].
    pub fn begin_analysis(&mut self) -> bool {
        if self.analysis_in_flight {
            return false;
        }
        self.analysis_in_flight = true;
        true
    }

    /// Applies one state transition.
    ///
    /// A refresh replaces the bundle wholesale. A failed analysis keeps the
    /// previous result; the analysis result survives refreshes.
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::RefreshSucceeded(bundle) => {
                self.phase = DashboardPhase::Ready(bundle);
                self.refresh_in_flight = false;
            }
            DashboardEvent::RefreshFailed(message) => {
                self.phase = DashboardPhase::Failed(message);
                self.refresh_in_flight = false;
            }
            DashboardEvent::AnalysisSucceeded(result) => {
                self.analysis = Some(result);
                self.analysis_in_flight = false;
            }
            DashboardEvent::AnalysisFailed => {
                self.analysis_in_flight = false;
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> &DashboardPhase {
        &self.phase
    }

    /// The committed bundle, present only in the `Ready` phase.
    #[must_use]
    pub fn bundle(&self) -> Option<&DashboardBundle> {
        match &self.phase {
            DashboardPhase::Ready(bundle) => Some(bundle),
            DashboardPhase::Loading | DashboardPhase::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&SentimentResult> {
        self.analysis.as_ref()
    }

    /// True until the first fetch cycle resolves, success or failure.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DashboardPhase::Loading)
    }

    #[must_use]
    pub fn refresh_in_flight(&self) -> bool {
        self.refresh_in_flight
    }

    #[must_use]
    pub fn analysis_in_flight(&self) -> bool {
        self.analysis_in_flight
    }
}
