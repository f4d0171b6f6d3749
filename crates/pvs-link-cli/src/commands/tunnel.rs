//! Tunnel command implementation.

use pvs_link_core::protocol::records::TunnelOptions;
use pvs_link_core::GatewayClient;

use crate::cli::{TunnelArgs, TunnelCommands};
use crate::error::Result;
use crate::input;
use crate::output::{render, OutputFormatter};

/// Run the tunnel command
pub async fn run_tunnel(
    args: TunnelArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        TunnelCommands::GetStatus => render(output, &client.tunnel_status().await?),
        TunnelCommands::Start {
            config_file,
            server,
            port,
        } => {
            let options = input::file_or_flags(config_file.as_deref(), || {
                Ok(TunnelOptions {
                    hostname: input::required(server, "server")?,
                    port,
                })
            })?;
            render(output, &client.start_tunnel(&options).await?)
        }
        TunnelCommands::DeleteAll => render(output, &client.delete_tunnels().await?),
    }
}
