//! Detail overlay selection state.

use crate::models::PatientRecord;

/// Presentation toggle for the record detail overlay.
///
/// Opening selects a record and shows the overlay; closing clears both.
/// Pure presentation state, no store mutation.
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    selected: Option<PatientRecord>,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a record and show the overlay.
    pub fn open(&mut self, record: PatientRecord) {
        self.selected = Some(record);
    }

    /// Hide the overlay and clear the selection.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The record on display, when the overlay is open.
    pub fn selected(&self) -> Option<&PatientRecord> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PatientRecord {
        PatientRecord {
            id: 1,
            name: name.into(),
            username: None,
            age: None,
            phone: None,
            email: None,
            address: None,
            image: None,
        }
    }

    #[test]
    fn test_open_close_cycle() {
        let mut overlay = DetailOverlay::new();
        assert!(!overlay.is_open());
        assert!(overlay.selected().is_none());

        overlay.open(record("Leanne Graham"));
        assert!(overlay.is_open());
        assert_eq!(overlay.selected().unwrap().name, "Leanne Graham");

        overlay.close();
        assert!(!overlay.is_open());
        assert!(overlay.selected().is_none());
    }

    #[test]
    fn test_reopen_replaces_selection() {
        let mut overlay = DetailOverlay::new();
        overlay.open(record("First"));
        overlay.open(record("Second"));
        assert_eq!(overlay.selected().unwrap().name, "Second");
    }
}
