//! Power control system limits.

use serde::{Deserialize, Serialize};

use crate::protocol::schema::impl_record;

/// Breaker and busbar ratings, in amps, that bound storage charge and export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PcsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_service_panel_breaker: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_service_panel_busbar: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hubplus_breaker: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hubplus_busbar: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_pcs: Option<bool>,
}

impl PcsSettings {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl_record!(PcsSettings);
