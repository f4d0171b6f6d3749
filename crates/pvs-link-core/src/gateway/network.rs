use super::transport::GatewayClient;
use super::SERVER_ERROR;
use crate::error::{FailureKind, Result};
use crate::protocol::records::{
    CellPrimaryCheck, FirewallSettingsConfiguration, GeneralSettings, InterfaceConfiguration,
    NetworkInterface, PingableDevice, PowerProductionSetting, PowerProductionStatus,
    StatusResponse,
};
use crate::protocol::vocabulary::NetworkType;
use crate::protocol::Endpoints;

impl GatewayClient {
    pub async fn renew_dhcp_lease(&self, network: NetworkType) -> Result<StatusResponse> {
        self.get(&Endpoints::dhcp_lease(network), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to renew DHCP lease"))
    }

    pub async fn release_dhcp_lease(&self, network: NetworkType) -> Result<StatusResponse> {
        self.delete(&Endpoints::dhcp_lease(network))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to release DHCP lease"))
    }

    pub async fn power_production(&self) -> Result<PowerProductionStatus> {
        self.get(Endpoints::power_production(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get power production"))
    }

    pub async fn set_power_production(&self, setting: &PowerProductionSetting) -> Result<StatusResponse> {
        self.post(Endpoints::power_production(), Some(setting))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to set power production"))
    }

    /// Start checking whether the cell modem can reach `address` as primary uplink.
    pub async fn check_cell_primary(&self, address: &str) -> Result<StatusResponse> {
        let body = CellPrimaryCheck {
            address: address.to_string(),
        };
        self.post(Endpoints::check_cell_primary(), Some(&body))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to start cell primary check"))
    }

    /// Errors from this endpoint are passed through as raw HTTP statuses.
    pub async fn interface_config(&self, network: NetworkType) -> Result<InterfaceConfiguration> {
        self.get(&Endpoints::interface_config(network), &[]).await
    }

    pub async fn update_interface_config(
        &self,
        network: NetworkType,
        config: &InterfaceConfiguration,
    ) -> Result<InterfaceConfiguration> {
        self.post(&Endpoints::interface_config(network), Some(config)).await
    }

    pub async fn firewall_settings(&self) -> Result<FirewallSettingsConfiguration> {
        self.get(Endpoints::firewall_settings(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Config, "Failed to get firewall settings"))
    }

    pub async fn update_firewall_settings(
        &self,
        settings: &FirewallSettingsConfiguration,
    ) -> Result<FirewallSettingsConfiguration> {
        self.post(Endpoints::firewall_settings(), Some(settings))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Config, "Failed to update firewall settings"))
    }

    pub async fn network_settings(&self) -> Result<GeneralSettings> {
        self.get(Endpoints::network_settings(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Config, "Failed to get network settings"))
    }

    pub async fn update_network_settings(&self, settings: &GeneralSettings) -> Result<GeneralSettings> {
        self.post(Endpoints::network_settings(), Some(settings))
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Config, "Failed to update network settings"))
    }

    pub async fn network_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        self.get(Endpoints::network_interfaces(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get network interfaces"))
    }

    pub async fn pingable_devices(&self) -> Result<Vec<PingableDevice>> {
        self.get(Endpoints::pingable_devices(), &[])
            .await
            .map_err(|e| e.escalate(SERVER_ERROR, FailureKind::Operation, "Failed to get pingable devices"))
    }
}
