//! Ping, traceroute and support tunnel payloads.

use serde::{Deserialize, Serialize};

use crate::protocol::schema::impl_record;
use crate::protocol::vocabulary::DiagnosticStatus;

/// Start a ping from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingOptions {
    pub address: String,
    /// Gateway interface to ping through. Any interface when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(rename = "pingCount", default, skip_serializing_if = "Option::is_none")]
    pub ping_count: Option<u32>,
}

/// Output of the last ping. Keep polling while `status` is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingData {
    pub status: DiagnosticStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracerouteOptions {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRouteObject {
    pub status: DiagnosticStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Open a support tunnel to `hostname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunnelOptions {
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TunnelStatus {
    /// `hostname:port` of every open tunnel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostlist: Option<Vec<String>>,
}

impl_record!(
    PingOptions,
    PingData,
    TracerouteOptions,
    TraceRouteObject,
    TunnelOptions,
    TunnelStatus,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::schema::Record;
    use serde_json::json;

    #[test]
    fn test_ping_options_defaults_left_to_gateway() {
        let options = PingOptions {
            address: "8.8.8.8".to_string(),
            interface: None,
            ping_count: None,
        };
        assert_eq!(options.to_json().unwrap(), json!({"address": "8.8.8.8"}));
    }

    #[test]
    fn test_ping_options_require_address() {
        let err = PingOptions::from_json(&json!({"pingCount": 3})).unwrap_err();
        assert!(err.message.contains("address"));
    }

    #[test]
    fn test_traceroute_status() {
        let result = TraceRouteObject::from_json(&json!({"status": "pending"})).unwrap();
        assert_eq!(result.status, DiagnosticStatus::Pending);
        assert!(TraceRouteObject::from_json(&json!({"status": "done"})).is_err());
    }

    #[test]
    fn test_tunnel_options() {
        let options = TunnelOptions::from_json(&json!({"hostname": "support.example", "port": 2222}))
            .unwrap();
        assert_eq!(options.port, Some(2222));
        assert!(TunnelOptions::from_json(&json!({"port": 2222})).is_err());
    }
}
