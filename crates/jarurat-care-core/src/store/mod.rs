//! In-memory patient store.
//!
//! Owns the canonical record list and mediates the two supported mutations:
//! bulk replace via [`PatientStore::fetch_patients`] and local prepend via
//! [`PatientStore::add_patient`]. Views read the state through accessors and
//! never mutate it directly.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;
use crate::source::PatientSource;

/// Lifecycle marker of the most recent fetch attempt.
///
/// `Idle -> Loading -> Succeeded | Failed`; a later fetch re-enters
/// `Loading` from either terminal state. There is no `Idle` re-entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Canonical patient state for one application session.
///
/// Created once at application start and owned by the event loop driving the
/// UI; `&mut self` on the mutating operations is what serializes them. A
/// fetch resolving after local adds replaces the list wholesale, so those
/// adds are lost. That matches the upstream behavior and is deliberate.
#[derive(Debug, Clone)]
pub struct PatientStore {
    data: Vec<PatientRecord>,
    status: FetchStatus,
    error: Option<String>,
}

impl PatientStore {
    /// Create an empty store in the `Idle` state.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            status: FetchStatus::Idle,
            error: None,
        }
    }

    /// Records in display order (most recently added first).
    pub fn data(&self) -> &[PatientRecord] {
        &self.data
    }

    /// Status of the most recent fetch attempt.
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Failure message from the most recent fetch, set only in `Failed`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True until the first fetch is dispatched. Views fetch exactly once
    /// while this holds.
    pub fn is_idle(&self) -> bool {
        self.status == FetchStatus::Idle
    }

    /// Replace the record list from the source.
    ///
    /// Transitions to `Loading` before suspending, then to `Succeeded` with
    /// the list replaced wholesale, or to `Failed` with the message in the
    /// error slot and the list untouched. Callable repeatedly; each call
    /// drives the same three-state transition.
    pub async fn fetch_patients<S: PatientSource>(&mut self, source: &S) -> FetchStatus {
        self.status = FetchStatus::Loading;
        self.error = None;
        debug!("patient fetch started");

        match source.fetch_patients().await {
            Ok(records) => {
                info!("patient fetch succeeded: {} records", records.len());
                self.data = records;
                self.status = FetchStatus::Succeeded;
            }
            Err(err) => {
                warn!("patient fetch failed: {err}");
                self.error = Some(err.to_string());
                self.status = FetchStatus::Failed;
            }
        }

        self.status
    }

    /// Prepend a locally created record.
    ///
    /// Synchronous, no validation (callers validate first), and never
    /// touches `status` or `error`.
    pub fn add_patient(&mut self, record: PatientRecord) {
        debug!("patient added locally: id={}", record.id);
        self.data.insert(0, record);
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        Self::new()
    }
}
