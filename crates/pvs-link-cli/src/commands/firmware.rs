//! Firmware command implementation.

use pvs_link_core::protocol::records::FirmwareUpdateRequest;
use pvs_link_core::GatewayClient;

use crate::cli::{FirmwareArgs, FirmwareCommands};
use crate::error::Result;
use crate::output::{render, OutputFormatter};

/// Run the firmware command
pub async fn run_firmware(
    args: FirmwareArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        FirmwareCommands::GetInfo => render(output, &client.firmware_info().await?),
        FirmwareCommands::StartUpdate { url, version } => {
            let request = FirmwareUpdateRequest { url, version };
            render(output, &client.start_firmware_update(&request).await?)
        }
    }
}
