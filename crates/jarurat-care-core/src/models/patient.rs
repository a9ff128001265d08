//! Patient record models.

use serde::{Deserialize, Serialize};

/// Postal address attached to a record. The remote directory sends the full
/// shape; locally added records only ever carry a placeholder city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    /// City name, always present (placeholder "N/A" for local adds).
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

impl Address {
    /// Placeholder address used for records created from the add form.
    pub fn placeholder() -> Self {
        Self {
            street: None,
            suite: None,
            city: "N/A".into(),
            zipcode: None,
        }
    }
}

/// A patient record with dual-origin id support.
///
/// Fetched records carry server-assigned small-integer ids; locally added
/// records carry millisecond-timestamp ids. The two id spaces are disjoint
/// and never reconciled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Server-assigned integer, or ms-timestamp for local adds
    pub id: i64,
    /// Display name, required for all records
    pub name: String,
    /// Directory username - present only on remote-origin records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Age as entered in the add form; remote records do not carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Phone number; 10 digits for local adds, free-form for remote records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Address, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Avatar URL; display layers fall back to a fixed placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PatientRecord {
    /// Create a locally added record from validated form fields.
    ///
    /// The id is the current unix timestamp in milliseconds, which keeps it
    /// outside the small-integer id space used by the remote directory.
    pub fn new_local(name: String, age: String, phone: String, email: String) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            name,
            username: None,
            age: Some(age),
            phone: Some(phone),
            email: Some(email),
            address: Some(Address::placeholder()),
            image: None,
        }
    }

    /// Check whether this record came from the remote directory.
    pub fn is_remote(&self) -> bool {
        self.username.is_some()
    }
}
