//! Status command implementation.

use pvs_link_core::GatewayClient;

use crate::cli::{StatusArgs, StatusCommands};
use crate::error::Result;
use crate::output::{render, OutputFormatter};

/// Run the status command
pub async fn run_status(
    args: StatusArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        StatusCommands::GetEss => render(output, &client.ess_status().await?),
        StatusCommands::GetEquinox => render(output, &client.equinox_status().await?),
    }
}
