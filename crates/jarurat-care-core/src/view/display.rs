//! Display heuristics for record fields the data model leaves optional.
//!
//! These are presentation-layer inferences, not domain rules; they live
//! behind small pure functions so a view can drop or swap them without
//! touching the model.

use crate::models::PatientRecord;

/// Fallback avatar shown when a record carries no image URL.
pub const PLACEHOLDER_AVATAR: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";

/// Glyph shown for a field with no value and no usable inference.
pub const MISSING_FIELD: &str = "—";

/// Pseudo-age derived deterministically from a directory-assigned id.
pub fn derived_age(id: i64) -> i64 {
    20 + id % 30
}

/// Age string for display.
///
/// A stored age wins. Records that came from the remote directory (marked
/// by `username`) get a derived pseudo-age; anything else shows the
/// missing-field glyph.
pub fn display_age(record: &PatientRecord) -> String {
    if let Some(age) = &record.age {
        return age.clone();
    }
    if record.is_remote() {
        derived_age(record.id).to_string()
    } else {
        MISSING_FIELD.to_string()
    }
}

/// Avatar URL with the placeholder fallback.
pub fn avatar_url(record: &PatientRecord) -> &str {
    record.image.as_deref().unwrap_or(PLACEHOLDER_AVATAR)
}

/// Contact line: phone when present, else email, else the missing glyph.
pub fn display_contact(record: &PatientRecord) -> &str {
    record
        .phone
        .as_deref()
        .or(record.email.as_deref())
        .unwrap_or(MISSING_FIELD)
}
