use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{PcsSettings, StatusResponse};
use crate::protocol::Endpoints;

impl GatewayClient {
    pub async fn pcs_settings(&self) -> Result<PcsSettings> {
        self.get(Endpoints::pcs_settings(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get PCS settings"))
    }

    pub async fn update_pcs_settings(&self, settings: &PcsSettings) -> Result<StatusResponse> {
        self.post(Endpoints::pcs_settings(), Some(settings))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to update PCS settings"))
    }
}
