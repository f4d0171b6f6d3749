use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{
    CommunicationAp, CommunicationsInterfaces, P2pClientPaired, P2pPairRequest, P2pPairingInfo,
};
use crate::protocol::Endpoints;

impl GatewayClient {
    pub async fn comm_interfaces(&self) -> Result<CommunicationsInterfaces> {
        self.get(Endpoints::comm_interfaces(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get interfaces"))
    }

    pub async fn scan_wifi(&self) -> Result<CommunicationAp> {
        self.get(Endpoints::wifi_scan(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to scan WiFi"))
    }

    pub async fn p2p_pairing_info(&self) -> Result<P2pPairingInfo> {
        self.get(Endpoints::p2p_pairing_info(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get P2P pairing info"))
    }

    pub async fn pair_p2p_client(&self, client_name: &str) -> Result<P2pClientPaired> {
        let body = P2pPairRequest {
            client_name: client_name.to_string(),
        };
        self.post(Endpoints::p2p_pair(), Some(&body))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to pair P2P client"))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ClientError, GatewayError};
    use crate::gateway::test_support::client_for;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_pair_client() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/communication/p2p/pair")
            .match_body(Matcher::Json(json!({"client_name": "CM2"})))
            .with_status(200)
            .with_body(r#"{"status": 200, "body": {"message": "p2p client paired."}}"#)
            .create_async()
            .await;

        let paired = client_for(&server).pair_p2p_client("CM2").await.unwrap();
        mock.assert_async().await;
        assert_eq!(paired.status, Some(200));
        assert_eq!(
            paired.body.unwrap().message.as_deref(),
            Some("p2p client paired.")
        );
    }

    #[tokio::test]
    async fn test_scan_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dl_cgi/communication/wifi/scan")
            .with_status(500)
            .with_body(r#"{"status": "radio off"}"#)
            .create_async()
            .await;

        let err = client_for(&server).scan_wifi().await.unwrap_err();
        assert!(matches!(err, ClientError::Gateway(GatewayError::Operation { .. })));
        assert_eq!(err.to_string(), "Failed to scan WiFi: radio off");
    }
}
