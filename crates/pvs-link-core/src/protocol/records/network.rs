//! Network interface, firewall and LAN settings.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::protocol::schema::{blank_ip, impl_record};
use crate::protocol::vocabulary::{ConfigurationType, NetworkType, PowerProduction};

/// Addressing of one network interface.
///
/// Every field is optional so a partial update leaves the rest untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterfaceConfiguration {
    #[serde(rename = "networkType", default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<NetworkType>,
    #[serde(rename = "configurationType", default, skip_serializing_if = "Option::is_none")]
    pub configuration_type: Option<ConfigurationType>,
    /// `""` from the gateway means no address is assigned.
    #[serde(
        rename = "ipAddress",
        default,
        deserialize_with = "blank_ip::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_address: Option<IpAddr>,
    #[serde(rename = "subnetMask", default, skip_serializing_if = "Option::is_none")]
    pub subnet_mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(rename = "dnsServer", default, skip_serializing_if = "Option::is_none")]
    pub dns_server: Option<String>,
}

impl InterfaceConfiguration {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One side of a port forwarding rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FirewallEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FirewallSetting {
    /// Unique key of this rule within the list.
    #[serde(rename = "firewallSettingsId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<FirewallEndpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal: Option<FirewallEndpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FirewallSettingsConfiguration {
    #[serde(rename = "FirewallSettings", default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<FirewallSetting>>,
}

/// LAN side settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(rename = "lan2PortMode", default, skip_serializing_if = "Option::is_none")]
    pub lan2_port_mode: Option<String>,
    #[serde(rename = "lan1IpAddress", default, skip_serializing_if = "Option::is_none")]
    pub lan1_ip_address: Option<String>,
    #[serde(rename = "lan1Netmask", default, skip_serializing_if = "Option::is_none")]
    pub lan1_netmask: Option<String>,
    #[serde(rename = "lan1dhcpRange", default, skip_serializing_if = "Option::is_none")]
    pub lan1_dhcp_range: Option<String>,
    #[serde(rename = "dhcpStatus", default, skip_serializing_if = "Option::is_none")]
    pub dhcp_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerProductionSetting {
    #[serde(rename = "powerProduction", default, skip_serializing_if = "Option::is_none")]
    pub power_production: Option<PowerProduction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerProductionStatus {
    #[serde(rename = "powerProduction", default, skip_serializing_if = "Option::is_none")]
    pub power_production: Option<PowerProduction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Start checking whether the cell modem can reach `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPrimaryCheck {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkInterface {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    /// Name shown to users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PingableDevice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl_record!(
    InterfaceConfiguration,
    FirewallEndpoint,
    FirewallSetting,
    FirewallSettingsConfiguration,
    GeneralSettings,
    PowerProductionSetting,
    PowerProductionStatus,
    CellPrimaryCheck,
    NetworkInterface,
    PingableDevice,
);
