//! View-layer contracts: search filter, add-form validation, detail
//! overlay, and display heuristics.
//!
//! Nothing in this module mutates the store; the form hands a finished
//! record back to its caller, which dispatches it to
//! [`crate::store::PatientStore::add_patient`].

mod detail;
mod display;
mod filter;
mod form;

pub use detail::*;
pub use display::*;
pub use filter::*;
pub use form::*;
