//! Envelopes shared by most endpoints.

use serde::{Deserialize, Serialize};

use crate::protocol::schema::{impl_record, Record};
use crate::protocol::vocabulary::{Outcome, ResultKind, Status};

/// A measurement with its unit, e.g. `{"value": 51.2, "unit": "V"}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueAndUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ValueAndUnit {
    /// `"51.2 V"`, or `-` when no value was reported.
    pub fn display(&self) -> String {
        match (self.value, self.unit.as_deref()) {
            (Some(value), Some(unit)) => format!("{} {}", value, unit),
            (Some(value), None) => value.to_string(),
            (None, _) => "-".to_string(),
        }
    }
}

/// Completion of a gateway side job, such as a device claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultKind>,
    pub percent: f64,
}

/// Outcome of starting a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub result: ResultKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Error envelope the gateway sends with 4xx/5xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Failure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Failure {
    /// Human readable text for a failed response body.
    ///
    /// Prefers the envelope's `status`, then the trimmed raw body, then
    /// `no details` for an empty body.
    pub fn describe_body(body: &str) -> String {
        if let Ok(Failure { status: Some(status) }) = Failure::from_slice(body.as_bytes()) {
            if !status.trim().is_empty() {
                return status;
            }
        }

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "{}" {
            "no details".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Plain `{"status": "ok"}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Acknowledgement of a diagnostic run being started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSucceed {
    pub result: Outcome,
}

/// Acknowledgement that carries no data beyond its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatalessResponse {
    pub result: ResultKind,
    /// Source line on the gateway that produced an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl_record!(
    ValueAndUnit,
    Progress,
    OperationResult,
    Failure,
    StatusResponse,
    ResultSucceed,
    DatalessResponse,
);
