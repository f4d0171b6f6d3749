use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{
    PingData, PingOptions, ResultSucceed, StatusResponse, TraceRouteObject, TracerouteOptions,
    TunnelOptions, TunnelStatus,
};
use crate::protocol::Endpoints;

impl GatewayClient {
    /// Output of the last ping started with [`start_ping`](Self::start_ping).
    pub async fn ping_status(&self) -> Result<PingData> {
        self.get(Endpoints::ping(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get ping status"))
    }

    pub async fn start_ping(&self, options: &PingOptions) -> Result<ResultSucceed> {
        self.post(Endpoints::ping(), Some(options))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to start ping"))
    }

    pub async fn traceroute_status(&self) -> Result<TraceRouteObject> {
        self.get(Endpoints::traceroute(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get traceroute status"))
    }

    pub async fn start_traceroute(&self, options: &TracerouteOptions) -> Result<ResultSucceed> {
        self.post(Endpoints::traceroute(), Some(options))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to start traceroute"))
    }

    pub async fn tunnel_status(&self) -> Result<TunnelStatus> {
        self.get(Endpoints::tunnel(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Tunnel, "Failed to get tunnel status"))
    }

    pub async fn start_tunnel(&self, options: &TunnelOptions) -> Result<StatusResponse> {
        self.post(Endpoints::tunnel(), Some(options))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Tunnel, "Failed to start tunnel"))
    }

    /// Close every open support tunnel.
    pub async fn delete_tunnels(&self) -> Result<StatusResponse> {
        self.delete(Endpoints::tunnel())
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Tunnel, "Failed to delete tunnel"))
    }
}
