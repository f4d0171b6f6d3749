//! Whitelist command implementation.

use pvs_link_core::protocol::records::Whitelist;
use pvs_link_core::GatewayClient;

use crate::cli::{WhitelistArgs, WhitelistCommands};
use crate::error::Result;
use crate::input;
use crate::output::{render, OutputFormatter};

/// Run the whitelist command
pub async fn run_whitelist(
    args: WhitelistArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        WhitelistCommands::Get => render(output, &client.whitelist().await?),
        WhitelistCommands::Update {
            config_file,
            hostname,
        } => {
            let whitelist = input::file_or_flags(config_file.as_deref(), || {
                Ok(Whitelist {
                    hostname: Some(input::required(hostname, "hostname")?),
                })
            })?;
            render(output, &client.update_whitelist(&whitelist).await?)
        }
    }
}
