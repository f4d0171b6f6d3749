//! Error types for PVS-Link core.
//!
//! `ClientError` is what every gateway call returns. It splits into three
//! families: payloads that do not match their schema, network/HTTP level
//! failures, and structured failures the gateway reported for a specific
//! endpoint.

use thiserror::Error;
use tracing::warn;

use crate::protocol::records::{CertMqttFailed, Failure};

/// Error returned by every gateway call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ClientError {
    /// Turn a raw HTTP status failure into a domain error when the status is
    /// one of `codes`. Anything else passes through untouched.
    pub(crate) fn escalate(self, codes: &[u16], kind: FailureKind, context: &'static str) -> Self {
        match self {
            ClientError::Transport(TransportError::Status { status, body, .. })
                if codes.contains(&status) =>
            {
                let message = Failure::describe_body(&body);
                warn!(status, %message, "{}", context);
                ClientError::Gateway(kind.into_error(context, status, message))
            }
            other => other,
        }
    }

    /// HTTP status attached to this error, if the gateway answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ClientError::Schema(_) => None,
            ClientError::Transport(e) => e.status(),
            ClientError::Gateway(e) => Some(e.http_status()),
        }
    }
}

/// A JSON payload did not match the record it was parsed as.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {record} at `{path}`: {message}")]
pub struct SchemaError {
    /// Short type name of the record being parsed, e.g. `Vec<DeviceDetail>`.
    pub record: String,
    /// Field path inside the payload, `.` for the root.
    pub path: String,
    pub message: String,
}

impl SchemaError {
    pub(crate) fn from_path_error<T>(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        Self {
            record: record_name::<T>(),
            path,
            message: err.into_inner().to_string(),
        }
    }

    pub(crate) fn json<T>(err: serde_json::Error) -> Self {
        Self {
            record: record_name::<T>(),
            path: ".".to_string(),
            message: err.to_string(),
        }
    }
}

/// Strip module paths from a type name, keeping generics readable.
fn record_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or_default());
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or_default());

    out
}

/// Network level failures and HTTP statuses no endpoint maps to a domain error.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("gateway returned HTTP {status} for {path}: {}", Failure::describe_body(.body))]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
}

impl TransportError {
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        let url = url.to_string();
        if source.is_timeout() {
            TransportError::Timeout { url, source }
        } else if source.is_connect() {
            TransportError::Connect { url, source }
        } else {
            TransportError::Request { url, source }
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Which domain error a degraded status code turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureKind {
    Config,
    Tunnel,
    Busy,
    Claim,
    Operation,
}

impl FailureKind {
    fn into_error(self, context: &'static str, http_status: u16, message: String) -> GatewayError {
        match self {
            FailureKind::Config => GatewayError::Config {
                context,
                http_status,
                message,
            },
            FailureKind::Tunnel => GatewayError::Tunnel {
                context,
                http_status,
                message,
            },
            FailureKind::Busy => GatewayError::Busy {
                context,
                http_status,
                message,
            },
            FailureKind::Claim => GatewayError::Claim {
                context,
                http_status,
                message,
            },
            FailureKind::Operation => GatewayError::Operation {
                context,
                http_status,
                message,
            },
        }
    }
}

/// Structured failure reported by the gateway for a known endpoint.
///
/// `message` is the `status` text of the gateway's failure body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{context}: {}", .failure.describe())]
    CertRenewalFailed {
        context: &'static str,
        failure: CertMqttFailed,
    },

    #[error("{context}: {message}")]
    Config {
        context: &'static str,
        http_status: u16,
        message: String,
    },

    #[error("{context}: {message}")]
    Tunnel {
        context: &'static str,
        http_status: u16,
        message: String,
    },

    #[error("{context}: {message}")]
    Busy {
        context: &'static str,
        http_status: u16,
        message: String,
    },

    #[error("{context}: {message}")]
    Claim {
        context: &'static str,
        http_status: u16,
        message: String,
    },

    #[error("{context}: {message}")]
    Operation {
        context: &'static str,
        http_status: u16,
        message: String,
    },
}

impl GatewayError {
    pub fn http_status(&self) -> u16 {
        match self {
            GatewayError::CertRenewalFailed { .. } => 500,
            GatewayError::Config { http_status, .. }
            | GatewayError::Tunnel { http_status, .. }
            | GatewayError::Busy { http_status, .. }
            | GatewayError::Claim { http_status, .. }
            | GatewayError::Operation { http_status, .. } => *http_status,
        }
    }

    /// The gateway's own failure text.
    pub fn message(&self) -> String {
        match self {
            GatewayError::CertRenewalFailed { failure, .. } => failure.describe(),
            GatewayError::Config { message, .. }
            | GatewayError::Tunnel { message, .. }
            | GatewayError::Busy { message, .. }
            | GatewayError::Claim { message, .. }
            | GatewayError::Operation { message, .. } => message.clone(),
        }
    }
}

/// Result type for gateway calls
pub type Result<T> = std::result::Result<T, ClientError>;
