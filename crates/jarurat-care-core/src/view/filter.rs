//! Client-side name filter.

use crate::models::PatientRecord;

/// Filter records by case-insensitive substring match on `name`.
///
/// The query is trimmed and lowercased; an empty or whitespace-only query
/// returns every record unfiltered. No fuzzy matching.
pub fn filter_by_name<'a>(records: &'a [PatientRecord], query: &str) -> Vec<&'a PatientRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&q))
        .collect()
}
