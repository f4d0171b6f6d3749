//! Traceroute command implementation.

use pvs_link_core::protocol::records::TracerouteOptions;
use pvs_link_core::GatewayClient;

use crate::cli::{TracerouteArgs, TracerouteCommands};
use crate::error::Result;
use crate::input;
use crate::output::{render, OutputFormatter};

/// Run the traceroute command
pub async fn run_traceroute(
    args: TracerouteArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        TracerouteCommands::GetStatus => render(output, &client.traceroute_status().await?),
        TracerouteCommands::Start {
            config_file,
            destination,
            interface,
        } => {
            let options = input::file_or_flags(config_file.as_deref(), || {
                Ok(TracerouteOptions {
                    address: input::required(destination, "destination")?,
                    interface,
                })
            })?;
            render(output, &client.start_traceroute(&options).await?)
        }
    }
}
