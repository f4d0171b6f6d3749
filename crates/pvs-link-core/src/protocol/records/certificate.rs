//! MQTT certificate renewal outcome.

use serde::{Deserialize, Serialize};

use crate::protocol::schema::impl_record;
use crate::protocol::vocabulary::{CertInfo, CertStatus};

/// Body of a failed MQTT certificate renewal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertMqttFailed {
    pub status: CertStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<CertInfo>,
}

impl CertMqttFailed {
    pub fn describe(&self) -> String {
        match self.info {
            Some(info) => format!("{}: {}", self.status, info),
            None => self.status.to_string(),
        }
    }
}

impl_record!(CertMqttFailed);
