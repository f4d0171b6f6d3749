//! REST paths exposed by the gateway, relative to the base URL.

use super::vocabulary::NetworkType;

/// Path builders for the gateway API
pub struct Endpoints;

impl Endpoints {
    // ==================== Certificate ====================

    pub fn mqtt_cert() -> &'static str {
        "/dl_cgi/cert/mqtt"
    }

    // ==================== Network ====================

    /// Renew (GET) or release (DELETE) the DHCP lease of an interface
    pub fn dhcp_lease(network: NetworkType) -> String {
        format!("/dl_cgi/network/interfaceConfig/dhcp/{}", network.path_segment())
    }

    pub fn interface_config(network: NetworkType) -> String {
        format!("/dl_cgi/network/interfaceConfig/{}", network.path_segment())
    }

    pub fn power_production() -> &'static str {
        "/dl_cgi/network/powerProduction"
    }

    pub fn check_cell_primary() -> &'static str {
        "/dl_cgi/network/checkCellPrimary"
    }

    pub fn firewall_settings() -> &'static str {
        "/dl_cgi/network/firewallSettings"
    }

    pub fn network_settings() -> &'static str {
        "/dl_cgi/network/settings"
    }

    pub fn network_interfaces() -> &'static str {
        "/dl_cgi/network/interfaces"
    }

    pub fn pingable_devices() -> &'static str {
        "/dl_cgi/network/getPingableDevices"
    }

    // ==================== Diagnostics ====================

    pub fn ping() -> &'static str {
        "/dl_cgi/network/ping"
    }

    pub fn traceroute() -> &'static str {
        "/dl_cgi/network/traceroute"
    }

    pub fn tunnel() -> &'static str {
        "/dl_cgi/network/tunnel"
    }

    // ==================== Devices ====================

    /// Discovery progress (GET) and start (POST)
    pub fn discovery() -> &'static str {
        "/dl_cgi/discovery"
    }

    pub fn device_list() -> &'static str {
        "/dl_cgi/devices/list"
    }

    /// Claim progress (GET) and start (POST)
    pub fn claim() -> &'static str {
        "/dl_cgi/devices"
    }

    pub fn inverters() -> &'static str {
        "/dl_cgi/inverters"
    }

    // ==================== Communication ====================

    pub fn comm_interfaces() -> &'static str {
        "/dl_cgi/communication/interfaces"
    }

    pub fn wifi_scan() -> &'static str {
        "/dl_cgi/communication/wifi/scan"
    }

    pub fn p2p_pairing_info() -> &'static str {
        "/dl_cgi/communication/p2p/pairingInfo"
    }

    pub fn p2p_pair() -> &'static str {
        "/dl_cgi/communication/p2p/pair"
    }

    // ==================== Firmware & grid ====================

    pub fn firmware() -> &'static str {
        "/dl_cgi/fw"
    }

    pub fn grid_profiles() -> &'static str {
        "/dl_cgi/gridprofiles"
    }

    pub fn grid_profile_status() -> &'static str {
        "/dl_cgi/gridprofiles/status"
    }

    pub fn pcs_settings() -> &'static str {
        "/dl_cgi/pcs/settings"
    }

    // ==================== Status & health ====================

    pub fn ess_status() -> &'static str {
        "/dl_cgi/status/ess"
    }

    pub fn equinox_status() -> &'static str {
        "/dl_cgi/status/equinox"
    }

    pub fn health_checklist() -> &'static str {
        "/dl_cgi/system/health/checklist"
    }

    pub fn health_check() -> &'static str {
        "/dl_cgi/system/health/check"
    }

    pub fn health_status() -> &'static str {
        "/dl_cgi/system/health/status"
    }

    pub fn whitelist() -> &'static str {
        "/dl_cgi/whitelist"
    }
}
