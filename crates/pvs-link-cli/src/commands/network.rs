//! Network command implementation.

use pvs_link_core::protocol::records::{
    FirewallSettingsConfiguration, GeneralSettings, InterfaceConfiguration, PowerProductionSetting,
};
use pvs_link_core::protocol::vocabulary::PowerProduction;
use pvs_link_core::GatewayClient;

use crate::cli::{NetworkArgs, NetworkCommands, UpdateInterfaceConfigArgs};
use crate::error::{CliError, Result};
use crate::input;
use crate::output::{render, OutputFormatter};

/// Run the network command
pub async fn run_network(
    args: NetworkArgs,
    client: &GatewayClient,
    output: &dyn OutputFormatter,
) -> Result<String> {
    match args.command {
        NetworkCommands::RenewDhcpLease { network } => {
            render(output, &client.renew_dhcp_lease(network).await?)
        }
        NetworkCommands::ReleaseDhcpLease { network } => {
            render(output, &client.release_dhcp_lease(network).await?)
        }
        NetworkCommands::GetPowerProduction => render(output, &client.power_production().await?),
        NetworkCommands::SetPowerProduction(state) => {
            let setting = PowerProductionSetting {
                power_production: Some(if state.on {
                    PowerProduction::On
                } else {
                    PowerProduction::Off
                }),
            };
            render(output, &client.set_power_production(&setting).await?)
        }
        NetworkCommands::StartCellPrimaryCheck { address } => {
            render(output, &client.check_cell_primary(&address).await?)
        }
        NetworkCommands::GetInterfaceConfig { network } => {
            render(output, &client.interface_config(network).await?)
        }
        NetworkCommands::UpdateInterfaceConfig(args) => {
            let network = args.network;
            let config = interface_config(args)?;
            render(output, &client.update_interface_config(network, &config).await?)
        }
        NetworkCommands::GetFirewallSettings => render(output, &client.firewall_settings().await?),
        NetworkCommands::UpdateFirewallSettings { config_file } => {
            let settings: FirewallSettingsConfiguration = input::read_record(&config_file)?;
            render(output, &client.update_firewall_settings(&settings).await?)
        }
        NetworkCommands::GetNetworkSettings => render(output, &client.network_settings().await?),
        NetworkCommands::UpdateNetworkSettings { config_file } => {
            let settings: GeneralSettings = input::read_record(&config_file)?;
            render(output, &client.update_network_settings(&settings).await?)
        }
        NetworkCommands::GetInterfaces => render(output, &client.network_interfaces().await?),
        NetworkCommands::GetPingableDevices => render(output, &client.pingable_devices().await?),
    }
}

fn interface_config(args: UpdateInterfaceConfigArgs) -> Result<InterfaceConfiguration> {
    input::file_or_flags(args.config_file.as_deref(), || {
        let config = InterfaceConfiguration {
            network_type: args.network_type_value,
            configuration_type: args.configuration_type,
            ip_address: args.ip_address,
            subnet_mask: args.subnet_mask,
            gateway: args.gateway,
            dns_server: args.dns_server,
        };
        if config.is_empty() {
            return Err(CliError::Usage(
                "give --config-file or at least one interface configuration field".to_string(),
            ));
        }
        Ok(config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SetPowerProductionArgs;
    use crate::commands::test_support::{client_for, json_output};
    use mockito::Matcher;
    use pvs_link_core::protocol::vocabulary::{ConfigurationType, NetworkType};
    use serde_json::json;

    fn update_args() -> UpdateInterfaceConfigArgs {
        UpdateInterfaceConfigArgs {
            network: NetworkType::Eth,
            config_file: None,
            network_type_value: None,
            configuration_type: None,
            ip_address: None,
            subnet_mask: None,
            gateway: None,
            dns_server: None,
        }
    }

    #[tokio::test]
    async fn test_update_interface_config_needs_a_field() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/network/interfaceConfig/eth")
            .expect(0)
            .create_async()
            .await;

        let args = NetworkArgs {
            command: NetworkCommands::UpdateInterfaceConfig(update_args()),
        };
        let err = run_network(args, &client_for(&server), &json_output())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_interface_config_from_flags() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/network/interfaceConfig/eth")
            .match_body(Matcher::Json(json!({
                "configurationType": "STATIC",
                "ipAddress": "192.168.1.20"
            })))
            .with_status(200)
            .with_body(r#"{"configurationType": "STATIC", "ipAddress": "192.168.1.20"}"#)
            .create_async()
            .await;

        let mut update = update_args();
        update.configuration_type = Some(ConfigurationType::Static);
        update.ip_address = Some("192.168.1.20".parse().unwrap());
        let args = NetworkArgs {
            command: NetworkCommands::UpdateInterfaceConfig(update),
        };
        run_network(args, &client_for(&server), &json_output())
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_power_production_off() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dl_cgi/network/powerProduction")
            .match_body(Matcher::Json(json!({"powerProduction": "Off"})))
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create_async()
            .await;

        let args = NetworkArgs {
            command: NetworkCommands::SetPowerProduction(SetPowerProductionArgs {
                on: false,
                off: true,
            }),
        };
        run_network(args, &client_for(&server), &json_output())
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
