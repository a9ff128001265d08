//! HTTP-backed patient source.
//!
//! Implements the core crate's [`PatientSource`] against the remote user
//! directory. This is the only crate that touches the network; body parsing
//! is split out into [`parse_patients`] so it stays testable offline.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use jarurat_care_core::{PatientRecord, PatientSource, SourceError, SourceResult};

/// Directory endpoint queried when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Default per-request timeout. Keeps a dead endpoint from leaving the
/// store in `Loading` indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Full URL of the record collection endpoint
    pub endpoint: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Patient source issuing one GET per fetch against the configured
/// endpoint.
#[derive(Debug, Clone)]
pub struct HttpPatientSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPatientSource {
    /// Source against the default endpoint with the default timeout.
    pub fn new() -> SourceResult<Self> {
        Self::with_config(RemoteConfig::default())
    }

    /// Source against a specific endpoint and timeout.
    pub fn with_config(config: RemoteConfig) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.endpoint,
            client,
        })
    }

    /// Endpoint this source queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PatientSource for HttpPatientSource {
    async fn fetch_patients(&self) -> SourceResult<Vec<PatientRecord>> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        parse_patients(&body)
    }
}

/// Decode a directory response body into patient records.
pub fn parse_patients(body: &str) -> SourceResult<Vec<PatientRecord>> {
    serde_json::from_str(body).map_err(|e| SourceError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RemoteConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_source_uses_configured_endpoint() {
        let source = HttpPatientSource::with_config(RemoteConfig {
            endpoint: "http://localhost:9/users".into(),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(source.endpoint(), "http://localhost:9/users");
    }

    #[test]
    fn test_parse_patients_directory_shape() {
        let body = r#"[
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": {
                    "street": "Kulas Light",
                    "suite": "Apt. 556",
                    "city": "Gwenborough",
                    "zipcode": "92998-3874",
                    "geo": { "lat": "-37.3159", "lng": "81.1496" }
                },
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "company": { "name": "Romaguera-Crona" }
            },
            {
                "id": 2,
                "name": "Ervin Howell",
                "username": "Antonette",
                "email": "Shanna@melissa.tv",
                "address": { "city": "Wisokyburgh" },
                "phone": "010-692-6593 x09125"
            }
        ]"#;

        let records = parse_patients(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Leanne Graham");
        assert_eq!(records[0].username.as_deref(), Some("Bret"));
        assert_eq!(records[0].age, None);
        assert_eq!(records[1].address.as_ref().unwrap().city, "Wisokyburgh");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        // Discard port on loopback: the connection fails without leaving
        // the machine.
        let source = HttpPatientSource::with_config(RemoteConfig {
            endpoint: "http://127.0.0.1:9/users".into(),
            timeout_secs: 2,
        })
        .unwrap();

        let err = source.fetch_patients().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
    }

    #[test]
    fn test_parse_patients_rejects_malformed_body() {
        let err = parse_patients("<html>502</html>").unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn test_parse_patients_rejects_non_collection() {
        let err = parse_patients(r#"{"id":1,"name":"solo"}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }
}
