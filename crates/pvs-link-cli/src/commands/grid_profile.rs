//! Grid profile command implementation.

use pvs_link_core::GatewayClient;

use crate::cli::{GridProfileArgs, GridProfileCommands};
use crate::error::Result;
use crate::output::{render, OutputFormatter};

/// Run the grid-profile command
pub async fn run_grid_profile(
    args: GridProfileArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        GridProfileCommands::GetList => render(output, &client.grid_profiles().await?),
        GridProfileCommands::GetStatus => render(output, &client.grid_profile_status().await?),
        GridProfileCommands::SetProfile { id } => {
            render(output, &client.set_grid_profile(&id).await?)
        }
    }
}
