//! Inverter command implementation.

use pvs_link_core::GatewayClient;

use crate::cli::{InverterArgs, InverterCommands};
use crate::error::Result;
use crate::output::{render, OutputFormatter};

/// Run the inverter command
pub async fn run_inverter(
    args: InverterArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        InverterCommands::GetList => render(output, &client.inverters().await?),
    }
}
