//! Response envelope shared by both upstream services
//!
//! ```json
//! {"result": true, "listings": [...]}
//! {"result": true, "user": {...}}
//! {"result": false, "error": "User not found"}
//! ```

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::SourceError;

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub result: bool,
    #[serde(default, alias = "listings", alias = "users")]
    pub records: Option<Vec<T>>,
    #[serde(default, alias = "listing", alias = "user")]
    pub record: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Turn a `result: false` envelope into an error.
    pub fn accepted(self, service: &'static str) -> Result<Self, SourceError> {
        if self.result {
            Ok(self)
        } else {
            Err(SourceError::Rejected {
                service,
                message: self.error.unwrap_or_else(|| "no error message".to_string()),
            })
        }
    }

    /// Page payloads may omit the array entirely when empty.
    pub fn into_records(self) -> Vec<T> {
        self.records.unwrap_or_default()
    }

    pub fn into_record(self, service: &'static str) -> Result<T, SourceError> {
        self.record.ok_or_else(|| SourceError::Rejected {
            service,
            message: "response is missing the record".to_string(),
        })
    }
}

/// Check the status and decode an accepted envelope.
pub async fn read_envelope<T: DeserializeOwned>(
    service: &'static str,
    response: Response,
) -> Result<Envelope<T>, SourceError> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(SourceError::Status { service, status });
    }

    response
        .json::<Envelope<T>>()
        .await
        .map_err(|source| SourceError::Decode { service, source })?
        .accepted(service)
}
