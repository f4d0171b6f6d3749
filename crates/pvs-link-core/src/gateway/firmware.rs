use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{DataFwResponse, DatalessResponse, FirmwareUpdateRequest};
use crate::protocol::Endpoints;

impl GatewayClient {
    pub async fn firmware_info(&self) -> Result<DataFwResponse> {
        self.get(Endpoints::firmware(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get firmware info"))
    }

    pub async fn start_firmware_update(&self, request: &FirmwareUpdateRequest) -> Result<DatalessResponse> {
        self.post(Endpoints::firmware(), Some(request))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to start firmware update"))
    }
}
