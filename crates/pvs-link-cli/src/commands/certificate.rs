//! Certificate command implementation.

use pvs_link_core::GatewayClient;

use crate::cli::{CertificateArgs, CertificateCommands};
use crate::error::Result;
use crate::output::{render, OutputFormatter};

/// Run the certificate command
pub async fn run_certificate(
    args: CertificateArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        CertificateCommands::RenewMqtt => render(output, &client.renew_mqtt_cert().await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{client_for, json_output};
    use crate::error::exit_codes;

    #[tokio::test]
    async fn test_renewal_failure_exit_code() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/dl_cgi/cert/mqtt")
            .with_status(500)
            .with_body(r#"{"status": "failed", "info": "MQTT certificate was created and is invalid."}"#)
            .create_async()
            .await;

        let args = CertificateArgs {
            command: CertificateCommands::RenewMqtt,
        };
        let err = run_certificate(args, &client_for(&server), &json_output())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::GATEWAY_ERROR);
        assert!(err.to_string().contains("created and is invalid"));
    }
}
