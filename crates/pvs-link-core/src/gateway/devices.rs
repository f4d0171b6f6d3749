use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{
    ClaimOperation, DatalessResponse, DeviceList, DiscoveryInverters, DiscoveryProgress,
    DiscoveryRequest, OperationResult, Progress,
};
use crate::protocol::Endpoints;

/// Discovery or claim already running.
const BUSY: &[u16] = &[503];
const CLAIM_FAILED: &[u16] = &[500, 503];

impl GatewayClient {
    pub async fn discovery_progress(&self) -> Result<DiscoveryProgress> {
        self.get(Endpoints::discovery(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get discovery progress"))
    }

    /// Start a discovery run. Fails with a busy error if one is already running.
    pub async fn start_discovery(&self, request: &DiscoveryRequest) -> Result<DatalessResponse> {
        self.post(Endpoints::discovery(), Some(request))
            .await
            .map_err(|e| e.escalate(BUSY, FailureKind::Busy, "Failed to start discovery"))
    }

    /// Every device the gateway knows, with optional attributes when `detailed`.
    pub async fn list_devices(&self, detailed: bool) -> Result<DeviceList> {
        let detailed = if detailed { "true" } else { "false" };
        self.get(Endpoints::device_list(), &[("detailed", detailed)])
            .await
            .map_err(|e| e.escalate(BUSY, FailureKind::Busy, "Cannot get devices"))
    }

    pub async fn start_claim(&self, operations: &[ClaimOperation]) -> Result<OperationResult> {
        self.post(Endpoints::claim(), Some(operations))
            .await
            .map_err(|e| e.escalate(CLAIM_FAILED, FailureKind::Claim, "Failed to start claim"))
    }

    pub async fn claim_progress(&self) -> Result<Progress> {
        self.get(Endpoints::claim(), &[])
            .await
            .map_err(|e| e.escalate(CLAIM_FAILED, FailureKind::Claim, "Failed to get claim progress"))
    }

    /// Inverters found and missing since the last discovery.
    pub async fn inverters(&self) -> Result<DiscoveryInverters> {
        self.get(Endpoints::inverters(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get inverters"))
    }
}
