//! Ping command implementation.

use pvs_link_core::protocol::records::PingOptions;
use pvs_link_core::GatewayClient;

use crate::cli::{PingArgs, PingCommands};
use crate::error::Result;
use crate::input;
use crate::output::{render, OutputFormatter};

/// Run the ping command
pub async fn run_ping(
    args: PingArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        PingCommands::GetStatus => render(output, &client.ping_status().await?),
        PingCommands::Start {
            config_file,
            destination,
            count,
            interface,
        } => {
            let options = input::file_or_flags(config_file.as_deref(), || {
                Ok(PingOptions {
                    address: input::required(destination, "destination")?,
                    interface,
                    ping_count: count,
                })
            })?;
            render(output, &client.start_ping(&options).await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{client_for, json_output};
    use crate::error::CliError;

    #[tokio::test]
    async fn test_start_needs_destination() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/network/ping")
            .expect(0)
            .create_async()
            .await;

        let args = PingArgs {
            command: PingCommands::Start {
                config_file: None,
                destination: None,
                count: Some(3),
                interface: None,
            },
        };
        let err = run_ping(args, &client_for(&server), &json_output())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Usage(ref m) if m.contains("--destination")));
        mock.assert_async().await;
    }
}
