//! System health checks.

use serde::{Deserialize, Serialize};

use crate::protocol::schema::impl_record;
use crate::protocol::vocabulary::{HealthCategory, HealthCheckStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckListItem {
    /// Mandatory checks always run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_name: Option<String>,
}

/// Checks available in one category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemHealthCheckListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<HealthCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_list: Option<Vec<CheckListItem>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemHealthCheckListStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<HealthCheckStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Body that starts a run of the named checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckRequest {
    pub checks: Vec<String>,
    pub category: HealthCategory,
}

impl_record!(
    CheckListItem,
    SystemHealthCheckListItem,
    SystemHealthCheckListStatus,
    HealthCheckRequest,
);
