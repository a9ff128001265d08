//! Jarurat Care Core Library
//!
//! In-memory patient records store with a fetch-and-cache lifecycle,
//! synchronous local adds, and the view-side contracts around them.
//!
//! # Data flow
//!
//! ```text
//! View (first mount, status == idle)
//!          │ fetch intent
//!          ▼
//!   PatientStore ── idle → loading ──► PatientSource (HTTP, mock)
//!          │                                  │
//!          │       succeeded: data replaced   │
//!          │◄── failed: error set, data kept ─┘
//!          ▼
//!   View re-renders  (filter ▸ cards ▸ detail overlay)
//!          │ validated add-form submit
//!          ▼
//!   PatientStore.add_patient  (synchronous prepend, no network)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, Address)
//! - [`store`]: Canonical state container and its two mutations
//! - [`source`]: Data-source trait, errors, and the test mock
//! - [`view`]: Search filter, form validation, detail overlay, display
//!   heuristics
//! - [`logging`]: Process-wide logger bootstrap

pub mod logging;
pub mod models;
pub mod source;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use logging::{default_log_level, init_logging};
pub use models::{Address, PatientRecord};
pub use source::{MockSource, PatientSource, SourceError, SourceResult};
pub use store::{FetchStatus, PatientStore};
pub use view::{
    avatar_url, derived_age, display_age, display_contact, filter_by_name, AddPatientForm,
    DetailOverlay, FieldErrors, MISSING_FIELD, PLACEHOLDER_AVATAR,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
