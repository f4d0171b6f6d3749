//! Utility grid compliance profiles.

use serde::{Deserialize, Serialize};

use crate::protocol::schema::impl_record;
use crate::protocol::vocabulary::{GridProfileDevice, GridSystem};

/// Inclusive range of zip codes a profile applies to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Zipcode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfsupply: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcodes: Option<Vec<Zipcode>>,
}

/// Profile rollout state of one device driver.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridProfileDeviceStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<GridProfileDevice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridProfileSystemStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<GridSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<GridProfileDeviceStatus>>,
}

impl GridProfileSystemStatus {
    /// True once the active profile is the one that was requested.
    pub fn is_settled(&self) -> bool {
        self.active_id.is_some() && self.active_id == self.target_id
    }
}

/// Body that selects a profile by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridProfileSelection {
    pub id: String,
}

impl_record!(
    Zipcode,
    GridProfile,
    GridProfileDeviceStatus,
    GridProfileSystemStatus,
    GridProfileSelection,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::schema::Record;
    use serde_json::json;

    #[test]
    fn test_profile_list() {
        let profiles = Vec::<GridProfile>::from_json(&json!([{
            "default": false,
            "filename": "8c9c4170.meta",
            "id": "8c9c4170457c88f6dcee7216357681d580a3b9bd",
            "name": "HECO OMH R14H (Legacy)",
            "selfsupply": false,
            "zipcodes": [{"max": 96898, "min": 96701}]
        }]))
        .unwrap();
        assert_eq!(profiles[0].zipcodes.as_ref().unwrap()[0].min, Some(96701.0));
    }

    #[test]
    fn test_system_status() {
        let status = GridProfileSystemStatus::from_json(&json!({
            "system": "SITE_PV",
            "active_id": "a816",
            "target_id": "a816",
            "devices": [{"device": "DEV_MIME", "percent": 100, "status": "success"}]
        }))
        .unwrap();
        assert!(status.is_settled());
        assert_eq!(
            status.devices.unwrap()[0].device,
            Some(GridProfileDevice::Mime)
        );
    }

    #[test]
    fn test_unknown_driver_rejected() {
        let err = GridProfileSystemStatus::from_json(&json!({"devices": [{"device": "DEV_TOASTER"}]}))
            .unwrap_err();
        assert_eq!(err.path, "devices[0].device");
    }
}
