//! Firmware state and update requests.

use serde::{Deserialize, Serialize};

use super::devices::SupervisorInfo;
use crate::protocol::schema::impl_record;

/// Firmware update progress together with the running supervisor build.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataFwResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<SupervisorInfo>,
    #[serde(rename = "ATTEMPTS", default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(rename = "STATE", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "PERCENT", default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<String>,
}

/// Ask the gateway to download and install a firmware image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareUpdateRequest {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "VERSION")]
    pub version: String,
}

impl_record!(DataFwResponse, FirmwareUpdateRequest);
