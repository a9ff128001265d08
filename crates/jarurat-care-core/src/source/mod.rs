//! Patient data source abstraction.
//!
//! The store never talks to the network directly; it pulls records through
//! [`PatientSource`]. The HTTP implementation lives in the
//! `jarurat-care-remote` crate, and [`MockSource`] covers tests.

use std::future::Future;

use thiserror::Error;

use crate::models::PatientRecord;

/// Data source errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Transport-level failure. Display is the bare message so the store's
    /// error slot carries exactly what the transport reported.
    #[error("{0}")]
    Network(String),

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// A source of patient records.
pub trait PatientSource {
    /// Fetch the full record collection from the source.
    fn fetch_patients(&self) -> impl Future<Output = SourceResult<Vec<PatientRecord>>> + Send;
}

/// Fixed-outcome source for testing without a network.
#[derive(Debug, Clone)]
pub struct MockSource {
    outcome: SourceResult<Vec<PatientRecord>>,
}

impl MockSource {
    /// A source that always resolves with the given records.
    pub fn ok(records: Vec<PatientRecord>) -> Self {
        Self {
            outcome: Ok(records),
        }
    }

    /// A source that always fails with a transport error message.
    pub fn network_error(message: &str) -> Self {
        Self {
            outcome: Err(SourceError::Network(message.into())),
        }
    }

    /// A source that always fails with the given error.
    pub fn failing(error: SourceError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl PatientSource for MockSource {
    async fn fetch_patients(&self) -> SourceResult<Vec<PatientRecord>> {
        self.outcome.clone()
    }
}
