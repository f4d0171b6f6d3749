use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{
    DatalessResponse, HealthCheckRequest, SystemHealthCheckListItem, SystemHealthCheckListStatus,
};
use crate::protocol::vocabulary::HealthCategory;
use crate::protocol::Endpoints;

impl GatewayClient {
    pub async fn health_checklist(&self, category: HealthCategory) -> Result<Vec<SystemHealthCheckListItem>> {
        self.get(Endpoints::health_checklist(), &[("category", category.as_str())])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get system health checklist"))
    }

    pub async fn start_health_check(&self, request: &HealthCheckRequest) -> Result<DatalessResponse> {
        self.post(Endpoints::health_check(), Some(request))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to start system health check"))
    }

    pub async fn health_check_status(&self) -> Result<Vec<SystemHealthCheckListStatus>> {
        self.get(Endpoints::health_status(), &[])
            .await
            .map_err(|e| {
                e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get system health check status")
            })
    }
}
