use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{EquinoxSystemStatus, EssStatusReport};
use crate::protocol::Endpoints;

/// 404 means the site has no storage.
const ESS_FAILED: &[u16] = &[404, 500];

impl GatewayClient {
    pub async fn ess_status(&self) -> Result<EssStatusReport> {
        self.get(Endpoints::ess_status(), &[])
            .await
            .map_err(|e| e.escalate(ESS_FAILED, FailureKind::Operation, "Failed to get ESS status"))
    }

    pub async fn equinox_status(&self) -> Result<EquinoxSystemStatus> {
        self.get(Endpoints::equinox_status(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get Equinox status"))
    }
}
