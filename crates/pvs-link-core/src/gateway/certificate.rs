use tracing::warn;

use super::transport::{GatewayClient, NO_BODY};
use crate::error::{ClientError, GatewayError, Result, TransportError};
use crate::protocol::records::{CertMqttFailed, StatusResponse};
use crate::protocol::{Endpoints, Record};

impl GatewayClient {
    /// Renew the MQTT client certificate and check that it is valid.
    ///
    /// A 500 carries a [`CertMqttFailed`] body, returned as
    /// [`GatewayError::CertRenewalFailed`].
    pub async fn renew_mqtt_cert(&self) -> Result<StatusResponse> {
        match self.post(Endpoints::mqtt_cert(), NO_BODY).await {
            Err(ClientError::Transport(TransportError::Status {
                status: 500, body, ..
            })) => {
                let failure = CertMqttFailed::from_slice(body.as_bytes())?;
                warn!(failure = %failure.describe(), "MQTT certificate renewal failed");
                Err(GatewayError::CertRenewalFailed {
                    context: "MQTT certificate renewal failed",
                    failure,
                }
                .into())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ClientError, GatewayError};
    use crate::gateway::test_support::client_for;
    use crate::protocol::vocabulary::{CertInfo, Status};

    #[tokio::test]
    async fn test_renewal_ok() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/dl_cgi/cert/mqtt")
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create_async()
            .await;

        let status = client_for(&server).renew_mqtt_cert().await.unwrap();
        assert_eq!(status.status, Some(Status::Ok));
    }

    #[tokio::test]
    async fn test_renewal_failure_is_parsed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/dl_cgi/cert/mqtt")
            .with_status(500)
            .with_body(r#"{"status": "failed", "info": "MQTT certificate was created and is invalid."}"#)
            .create_async()
            .await;

        let err = client_for(&server).renew_mqtt_cert().await.unwrap_err();
        match &err {
            ClientError::Gateway(GatewayError::CertRenewalFailed { failure, .. }) => {
                assert_eq!(failure.info, Some(CertInfo::CreatedInvalid));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.http_status(), Some(500));
        assert_eq!(
            err.to_string(),
            "MQTT certificate renewal failed: failed: MQTT certificate was created and is invalid."
        );
    }

    #[tokio::test]
    async fn test_renewal_failure_with_unexpected_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/dl_cgi/cert/mqtt")
            .with_status(500)
            .with_body(r#"{"status": "exploded"}"#)
            .create_async()
            .await;

        let err = client_for(&server).renew_mqtt_cert().await.unwrap_err();
        assert!(matches!(err, ClientError::Schema(_)));
    }
}
