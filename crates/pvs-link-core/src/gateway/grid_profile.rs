use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{
    DatalessResponse, GridProfile, GridProfileSelection, GridProfileSystemStatus,
};
use crate::protocol::Endpoints;

impl GatewayClient {
    pub async fn grid_profiles(&self) -> Result<Vec<GridProfile>> {
        self.get(Endpoints::grid_profiles(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get grid profiles"))
    }

    pub async fn grid_profile_status(&self) -> Result<GridProfileSystemStatus> {
        self.get(Endpoints::grid_profile_status(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get grid profile status"))
    }

    pub async fn set_grid_profile(&self, id: &str) -> Result<DatalessResponse> {
        let body = GridProfileSelection { id: id.to_string() };
        self.post(Endpoints::grid_profiles(), Some(&body))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to set grid profile"))
    }
}
