use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{StatusResponse, Whitelist};
use crate::protocol::Endpoints;

impl GatewayClient {
    pub async fn whitelist(&self) -> Result<Whitelist> {
        self.get(Endpoints::whitelist(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get whitelist"))
    }

    pub async fn update_whitelist(&self, whitelist: &Whitelist) -> Result<StatusResponse> {
        self.post(Endpoints::whitelist(), Some(whitelist))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to update whitelist"))
    }
}
