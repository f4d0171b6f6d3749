//! CLI argument definitions using clap.

use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use pvs_link_core::gateway::DEFAULT_BASE_URL;
use pvs_link_core::protocol::vocabulary::{
    ConfigurationType, DiscoveryInterface, DiscoveryScope, HealthCategory, MiType, NetworkType,
    UnknownValue,
};

/// PVS-Link CLI - command-line access to the local REST API of a PVS gateway
#[derive(Parser, Debug)]
#[command(name = "pvs-link")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// How responses are printed
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output_format: OutputFormat,

    /// Base URL of the gateway API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL, env = "PVS_LINK_BASE_URL")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value = "30000", env = "PVS_LINK_TIMEOUT")]
    pub timeout: u64,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// MQTT certificate management
    Certificate(CertificateArgs),

    /// Uplink interfaces, WiFi and P2P pairing
    Communication(CommunicationArgs),

    /// Device list, discovery and claims
    Device(DeviceArgs),

    /// Gateway firmware
    Firmware(FirmwareArgs),

    /// Grid profile selection
    GridProfile(GridProfileArgs),

    /// Inverter inventory
    Inverter(InverterArgs),

    /// Network configuration
    Network(NetworkArgs),

    /// Power control system limits
    Pcs(PcsArgs),

    /// Ping from the gateway
    Ping(PingArgs),

    /// Storage and system status
    Status(StatusArgs),

    /// System health checks
    SystemHealth(SystemHealthArgs),

    /// Traceroute from the gateway
    Traceroute(TracerouteArgs),

    /// Support tunnels
    Tunnel(TunnelArgs),

    /// Hosts the gateway may reach
    Whitelist(WhitelistArgs),
}

/// Parse a vocabulary value, accepting its upper-case spelling too.
fn vocabulary<T: FromStr<Err = UnknownValue>>(s: &str) -> Result<T, UnknownValue> {
    s.parse()
        .or_else(|err| s.to_ascii_uppercase().parse().map_err(|_| err))
}

// ==================== Certificate ====================

#[derive(Args, Debug)]
pub struct CertificateArgs {
    #[command(subcommand)]
    pub command: CertificateCommands,
}

#[derive(Subcommand, Debug)]
pub enum CertificateCommands {
    /// Renew the MQTT client certificate
    RenewMqtt,
}

// ==================== Communication ====================

#[derive(Args, Debug)]
pub struct CommunicationArgs {
    #[command(subcommand)]
    pub command: CommunicationCommands,
}

#[derive(Subcommand, Debug)]
pub enum CommunicationCommands {
    /// Show the state of every uplink
    GetInterfaces,

    /// Scan for WiFi access points
    ScanWifi,

    /// Show the P2P pairing identity
    GetP2pPairingInfo,

    /// Pair a P2P client
    PairP2pClient {
        /// Client name
        name: String,
    },
}

// ==================== Device ====================

#[derive(Args, Debug)]
pub struct DeviceArgs {
    #[command(subcommand)]
    pub command: DeviceCommands,
}

#[derive(Subcommand, Debug)]
pub enum DeviceCommands {
    /// List every known device
    List {
        /// Ask for the detailed list
        #[arg(long)]
        detailed: bool,
    },

    /// Show the gateway itself
    Pvs,

    /// Show inverters
    Inverters,

    /// Show power meters
    Meters,

    /// Start a discovery run
    StartDiscovery(StartDiscoveryArgs),

    /// Show progress of the current discovery run
    DiscoveryProgress,

    /// Add, remove or keep devices in the managed list
    StartClaim(StartClaimArgs),

    /// Show progress of the current claim
    ClaimProgress,
}

#[derive(Args, Debug)]
pub struct StartDiscoveryArgs {
    /// Number of devices to look for
    #[arg(long, default_value = "200")]
    pub num_devices: u32,

    /// Micro inverter vendor
    #[arg(long, default_value = "ALL", value_parser = vocabulary::<MiType>)]
    pub mi_type: MiType,

    /// Device classes to discover
    #[arg(long, default_value = "all", value_parser = vocabulary::<DiscoveryScope>)]
    pub device: DiscoveryScope,

    /// Restrict discovery to an interface (repeatable)
    #[arg(long = "interface", value_parser = vocabulary::<DiscoveryInterface>)]
    pub interfaces: Vec<DiscoveryInterface>,

    /// Persist the result to the gateway's configuration file
    #[arg(long)]
    pub save_config_file: bool,

    /// Keep previously known devices
    #[arg(long)]
    pub keep_devices: bool,
}

#[derive(Args, Debug)]
pub struct StartClaimArgs {
    /// Claim a device, as MODEL:SERIAL:TYPE (repeatable)
    #[arg(long = "add", value_name = "M:S:T")]
    pub add: Vec<String>,

    /// Release a device, as MODEL:SERIAL:TYPE (repeatable)
    #[arg(long = "delete", value_name = "M:S:T")]
    pub delete: Vec<String>,

    /// Leave a device as is, as MODEL:SERIAL:TYPE (repeatable)
    #[arg(long = "noop", value_name = "M:S:T")]
    pub noop: Vec<String>,

    /// JSON file with the list of claim operations
    #[arg(long)]
    pub operations_file: Option<PathBuf>,
}

// ==================== Firmware ====================

#[derive(Args, Debug)]
pub struct FirmwareArgs {
    #[command(subcommand)]
    pub command: FirmwareCommands,
}

#[derive(Subcommand, Debug)]
pub enum FirmwareCommands {
    /// Show firmware and update state
    GetInfo,

    /// Start a firmware update
    #[command(disable_version_flag = true)]
    StartUpdate {
        /// Firmware image URL
        #[arg(long)]
        url: String,

        /// Version being installed
        #[arg(long)]
        version: String,
    },
}

// ==================== Grid profile ====================

#[derive(Args, Debug)]
pub struct GridProfileArgs {
    #[command(subcommand)]
    pub command: GridProfileCommands,
}

#[derive(Subcommand, Debug)]
pub enum GridProfileCommands {
    /// List available grid profiles
    GetList,

    /// Show the active and target profile
    GetStatus,

    /// Select a grid profile
    SetProfile {
        /// Profile id
        id: String,
    },
}

// ==================== Inverter ====================

#[derive(Args, Debug)]
pub struct InverterArgs {
    #[command(subcommand)]
    pub command: InverterCommands,
}

#[derive(Subcommand, Debug)]
pub enum InverterCommands {
    /// List found and missing inverters
    GetList,
}

// ==================== Network ====================

#[derive(Args, Debug)]
pub struct NetworkArgs {
    #[command(subcommand)]
    pub command: NetworkCommands,
}

#[derive(Subcommand, Debug)]
pub enum NetworkCommands {
    /// Renew the DHCP lease of an interface
    RenewDhcpLease {
        /// eth, wifi or plc
        #[arg(value_parser = vocabulary::<NetworkType>)]
        network: NetworkType,
    },

    /// Release the DHCP lease of an interface
    ReleaseDhcpLease {
        /// eth, wifi or plc
        #[arg(value_parser = vocabulary::<NetworkType>)]
        network: NetworkType,
    },

    /// Show whether the inverters may produce
    GetPowerProduction,

    /// Allow or stop power production
    SetPowerProduction(SetPowerProductionArgs),

    /// Check whether the cell modem reaches an address
    StartCellPrimaryCheck {
        address: String,
    },

    /// Show the addressing of an interface
    GetInterfaceConfig {
        /// eth, wifi or plc
        #[arg(value_parser = vocabulary::<NetworkType>)]
        network: NetworkType,
    },

    /// Change the addressing of an interface
    UpdateInterfaceConfig(UpdateInterfaceConfigArgs),

    /// Show port forwarding rules
    GetFirewallSettings,

    /// Replace port forwarding rules
    UpdateFirewallSettings {
        /// JSON file with the firewall settings
        #[arg(long)]
        config_file: PathBuf,
    },

    /// Show LAN settings
    GetNetworkSettings,

    /// Change LAN settings
    UpdateNetworkSettings {
        /// JSON file with the LAN settings
        #[arg(long)]
        config_file: PathBuf,
    },

    /// List network interfaces
    GetInterfaces,

    /// List devices the gateway can ping
    GetPingableDevices,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("state").required(true).args(["on", "off"])))]
pub struct SetPowerProductionArgs {
    #[arg(long)]
    pub on: bool,

    #[arg(long)]
    pub off: bool,
}

#[derive(Args, Debug)]
pub struct UpdateInterfaceConfigArgs {
    /// eth, wifi or plc
    #[arg(value_parser = vocabulary::<NetworkType>)]
    pub network: NetworkType,

    /// JSON file with the interface configuration
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Value of the networkType field
    #[arg(long, value_parser = vocabulary::<NetworkType>)]
    pub network_type_value: Option<NetworkType>,

    /// DHCP or STATIC
    #[arg(long, value_parser = vocabulary::<ConfigurationType>)]
    pub configuration_type: Option<ConfigurationType>,

    #[arg(long)]
    pub ip_address: Option<IpAddr>,

    #[arg(long)]
    pub subnet_mask: Option<String>,

    #[arg(long)]
    pub gateway: Option<String>,

    #[arg(long)]
    pub dns_server: Option<String>,
}

// ==================== PCS ====================

#[derive(Args, Debug)]
pub struct PcsArgs {
    #[command(subcommand)]
    pub command: PcsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PcsCommands {
    /// Show breaker and busbar limits
    GetSettings,

    /// Change breaker and busbar limits
    UpdateSettings(UpdatePcsArgs),
}

#[derive(Args, Debug)]
pub struct UpdatePcsArgs {
    /// JSON file with the PCS settings
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Main service panel breaker rating (A)
    #[arg(long)]
    pub main_service_panel_breaker: Option<i64>,

    /// Main service panel busbar rating (A)
    #[arg(long)]
    pub main_service_panel_busbar: Option<i64>,

    /// Hub+ breaker rating (A)
    #[arg(long)]
    pub hubplus_breaker: Option<i64>,

    /// Hub+ busbar rating (A)
    #[arg(long)]
    pub hubplus_busbar: Option<i64>,

    #[arg(long)]
    pub enable_pcs: Option<bool>,
}

// ==================== Ping ====================

#[derive(Args, Debug)]
pub struct PingArgs {
    #[command(subcommand)]
    pub command: PingCommands,
}

#[derive(Subcommand, Debug)]
pub enum PingCommands {
    /// Show output of the last ping
    GetStatus,

    /// Start a ping
    Start {
        /// JSON file with the ping options
        #[arg(long)]
        config_file: Option<PathBuf>,

        /// Address to ping
        #[arg(long)]
        destination: Option<String>,

        /// Number of echo requests
        #[arg(long)]
        count: Option<u32>,

        /// Interface to ping through
        #[arg(long)]
        interface: Option<String>,
    },
}

// ==================== Status ====================

#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(subcommand)]
    pub command: StatusCommands,
}

#[derive(Subcommand, Debug)]
pub enum StatusCommands {
    /// Energy storage system status
    GetEss,

    /// Production and consumption summary
    GetEquinox,
}

// ==================== System health ====================

#[derive(Args, Debug)]
pub struct SystemHealthArgs {
    #[command(subcommand)]
    pub command: SystemHealthCommands,
}

#[derive(Subcommand, Debug)]
pub enum SystemHealthCommands {
    /// List the checks available for a category
    GetChecklist {
        #[arg(long, default_value = "ALL", value_parser = vocabulary::<HealthCategory>)]
        category: HealthCategory,
    },

    /// Run health checks
    StartCheck {
        /// Check name (repeatable)
        #[arg(long = "check", required = true)]
        checks: Vec<String>,

        #[arg(long, default_value = "ALL", value_parser = vocabulary::<HealthCategory>)]
        category: HealthCategory,
    },

    /// Show progress of running checks
    GetCheckStatus,
}

// ==================== Traceroute ====================

#[derive(Args, Debug)]
pub struct TracerouteArgs {
    #[command(subcommand)]
    pub command: TracerouteCommands,
}

#[derive(Subcommand, Debug)]
pub enum TracerouteCommands {
    /// Show output of the last traceroute
    GetStatus,

    /// Start a traceroute
    Start {
        /// JSON file with the traceroute options
        #[arg(long)]
        config_file: Option<PathBuf>,

        /// Address to trace
        #[arg(long)]
        destination: Option<String>,

        /// Interface to trace through
        #[arg(long)]
        interface: Option<String>,
    },
}

// ==================== Tunnel ====================

#[derive(Args, Debug)]
pub struct TunnelArgs {
    #[command(subcommand)]
    pub command: TunnelCommands,
}

#[derive(Subcommand, Debug)]
pub enum TunnelCommands {
    /// List open tunnels
    GetStatus,

    /// Open a support tunnel
    Start {
        /// JSON file with the tunnel options
        #[arg(long)]
        config_file: Option<PathBuf>,

        /// Tunnel server host name
        #[arg(long)]
        server: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Close every open tunnel
    DeleteAll,
}

// ==================== Whitelist ====================

#[derive(Args, Debug)]
pub struct WhitelistArgs {
    #[command(subcommand)]
    pub command: WhitelistCommands,
}

#[derive(Subcommand, Debug)]
pub enum WhitelistCommands {
    /// Show the whitelist
    Get,

    /// Replace the whitelist
    Update {
        /// JSON file with the whitelist
        #[arg(long)]
        config_file: Option<PathBuf>,

        #[arg(long)]
        hostname: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lowercase_network_type() {
        let cli = Cli::try_parse_from(["pvs-link", "network", "get-interface-config", "eth"]).unwrap();
        match cli.command {
            Commands::Network(NetworkArgs {
                command: NetworkCommands::GetInterfaceConfig { network },
            }) => assert_eq!(network, NetworkType::Eth),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_power_production_needs_state() {
        assert!(Cli::try_parse_from(["pvs-link", "network", "set-power-production"]).is_err());
        assert!(
            Cli::try_parse_from(["pvs-link", "network", "set-power-production", "--on", "--off"])
                .is_err()
        );
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "pvs-link",
            "status",
            "get-ess",
            "--output-format",
            "table",
            "--timeout",
            "500",
        ])
        .unwrap();
        assert_eq!(cli.output_format, OutputFormat::Table);
        assert_eq!(cli.timeout, 500);
    }
}
