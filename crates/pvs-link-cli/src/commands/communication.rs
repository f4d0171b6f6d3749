//! Communication command implementation.

use pvs_link_core::GatewayClient;

use crate::cli::{CommunicationArgs, CommunicationCommands};
use crate::error::Result;
use crate::output::{render, OutputFormatter};

/// Run the communication command
pub async fn run_communication(
    args: CommunicationArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        CommunicationCommands::GetInterfaces => render(output, &client.comm_interfaces().await?),
        CommunicationCommands::ScanWifi => render(output, &client.scan_wifi().await?),
        CommunicationCommands::GetP2pPairingInfo => {
            render(output, &client.p2p_pairing_info().await?)
        }
        CommunicationCommands::PairP2pClient { name } => {
            render(output, &client.pair_p2p_client(&name).await?)
        }
    }
}
