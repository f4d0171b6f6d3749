//! System health command implementation.

use pvs_link_core::protocol::records::HealthCheckRequest;
use pvs_link_core::GatewayClient;

use crate::cli::{SystemHealthArgs, SystemHealthCommands};
use crate::error::Result;
use crate::output::{render, OutputFormatter};

/// Run the system-health command
pub async fn run_system_health(
    args: SystemHealthArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        SystemHealthCommands::GetChecklist { category } => {
            render(output, &client.health_checklist(category).await?)
        }
        SystemHealthCommands::StartCheck { checks, category } => {
            let request = HealthCheckRequest { checks, category };
            render(output, &client.start_health_check(&request).await?)
        }
        SystemHealthCommands::GetCheckStatus => {
            render(output, &client.health_check_status().await?)
        }
    }
}
