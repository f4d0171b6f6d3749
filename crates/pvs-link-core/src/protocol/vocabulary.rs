//! Closed value sets used by gateway payloads.
//!
//! Each vocabulary serializes with the gateway's exact spelling and refuses
//! anything outside the set, so a firmware that starts sending a new value
//! surfaces as a schema error instead of being silently accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string was not part of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {vocabulary}")]
pub struct UnknownValue {
    pub vocabulary: &'static str,
    pub value: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire spelling of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err(UnknownValue {
                        vocabulary: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Result of a gateway operation.
    ResultKind {
        Succeed => "succeed",
        Error => "error",
    }
}

vocabulary! {
    /// Result of a diagnostic start request.
    Outcome {
        Succeed => "succeed",
        Fail => "fail",
    }
}

vocabulary! {
    /// Operation requested on a device claim.
    ClaimOp {
        Add => "add",
        Delete => "delete",
        Noop => "noop",
    }
}

vocabulary! {
    /// Hardware family reported in `DEVICE_TYPE`.
    DeviceType {
        /// Photovoltaic supervisor (the gateway itself)
        Pvs => "PVS",
        Inverter => "Inverter",
        PowerMeter => "Power Meter",
        MetStation => "MET Station",
        GroundCurrentMonitor => "Ground Current Monitor",
        EnergyStorageSystem => "Energy Storage System",
        HubPlus => "HUB+",
        Battery => "Battery",
        StorageInverter => "Storage Inverter",
        EssHub => "ESS Hub",
        EssBms => "ESS BMS",
        Gateway => "Gateway",
        PvDisconnect => "PV Disconnect",
    }
}

vocabulary! {
    /// Where a power meter sits in the installation.
    MeterSubtype {
        GrossConsumptionLineside => "GROSS_CONSUMPTION_LINESIDE",
        GrossProduction => "GROSS_PRODUCTION",
        NetConsumptionLoadside => "NET_CONSUMPTION_LOADSIDE",
        NotUsed => "NOT_USED",
        StorageMeter => "STORAGE_METER",
        UnknownType => "UNKNOWN_TYPE",
    }
}

vocabulary! {
    PowerProduction {
        On => "On",
        Off => "Off",
    }
}

vocabulary! {
    /// Success marker of plain status responses.
    Status {
        Ok => "ok",
    }
}

vocabulary! {
    CertStatus {
        Failed => "failed",
    }
}

vocabulary! {
    /// Detail attached to a failed MQTT certificate renewal.
    CertInfo {
        CreatedInvalid => "MQTT certificate was created and is invalid.",
        CreationFailed => "MQTT certificate creation failed.",
    }
}

vocabulary! {
    NetworkType {
        Plc => "PLC",
        Eth => "ETH",
        Wifi => "WIFI",
    }
}

impl NetworkType {
    /// Lowercase form used in interface configuration paths.
    pub fn path_segment(&self) -> &'static str {
        match self {
            NetworkType::Plc => "plc",
            NetworkType::Eth => "eth",
            NetworkType::Wifi => "wifi",
        }
    }
}

vocabulary! {
    ConfigurationType {
        Dhcp => "DHCP",
        Static => "STATIC",
    }
}

vocabulary! {
    /// Polling state of ping and traceroute runs.
    DiagnosticStatus {
        Pending => "pending",
        Success => "success",
        Fail => "fail",
    }
}

vocabulary! {
    /// Legacy discovery state of a device (`STATEDESCR`).
    StateDescr {
        New => "NEW",
        Pinging => "PINGING",
        PingOk => "PING_OK",
        PingError => "PING_ERROR",
        GettingVersionInformation => "GETTING_VERSION_INFORMATION",
        VersionInformationOk => "VERSION_INFORMATION_OK",
        VersionInformationError => "VERSION_INFORMATION_ERROR",
        GettingPlcStats => "GETTING_PLC_STATS",
        PlcStatsOk => "PLC_STATS_OK",
        PlcStatsError => "PLC_STATS_ERROR",
        GettingPvInfo => "GETTING_PV_INFO",
        PvInfoOk => "PV_INFO_OK",
        PvInfoError => "PV_INFO_ERROR",
        Ok => "OK",
    }
}

impl StateDescr {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            StateDescr::PingError
                | StateDescr::VersionInformationError
                | StateDescr::PlcStatsError
                | StateDescr::PvInfoError
        )
    }
}

vocabulary! {
    /// Progress of a commissioning or discovery step.
    StepStatus {
        NotRunning => "NOT_RUNNING",
        Running => "RUNNING",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
    }
}

vocabulary! {
    EssDeviceType {
        Mio => "MIO",
        Midc => "MIDC",
        Gateway => "GATEWAY",
        Battery => "BATTERY",
        MicroInverter => "MICRO_INVERTER",
        StorageInverter => "STORAGE_INVERTER",
    }
}

vocabulary! {
    /// Hub Plus contactor error state.
    ContactorError {
        None => "NONE",
        StuckOpen => "STUCK_OPEN",
        StuckClosedOrMmOpen => "STUCK_CLOSED_OR_MM_OPEN",
        MmClosed => "MM_CLOSED",
        MmStuckOpen => "MM_STUCK_OPEN",
        MmStuckClosed => "MM_STUCK_CLOSED",
        Unknown => "UNKNOWN",
    }
}

vocabulary! {
    ContactorPosition {
        Unknown => "UNKNOWN",
        Open => "OPEN",
        Closed => "CLOSED",
    }
}

vocabulary! {
    /// Voltage state of the grid or load side of the Hub Plus.
    VoltageState {
        InRange => "METER_VOLTAGE_IN_RANGE",
        OutRange => "METER_VOLTAGE_OUT_RANGE",
        PhaseLoss => "METER_PHASE_LOSS",
        MissConnection => "METER_MISS_CONNECTION",
    }
}

vocabulary! {
    /// Frequency state of the grid or load side of the Hub Plus.
    FrequencyState {
        InRange => "METER_FREQ_IN_RANGE",
        OutRange => "METER_FREQ_OUT_RANGE",
    }
}

vocabulary! {
    StorageControllerStatus {
        Unknown => "UNKNOWN",
        NotRunning => "NOT_RUNNING",
        Running => "RUNNING",
    }
}

vocabulary! {
    /// Grid exchange policy of the power control system.
    PcsMode {
        None => "NONE",
        EssImportOnly => "ESS_IMPORT_ONLY",
        EssExportOnly => "ESS_EXPORT_ONLY",
        EssNoExchange => "ESS_NO_EXCHANGE",
    }
}

vocabulary! {
    PcsStatus {
        Unknown => "UNKNOWN",
        Disabled => "DISABLED",
        Enabled => "ENABLED",
    }
}

vocabulary! {
    /// Behaviour of the storage controller.
    OperationalMode {
        Unknown => "UNKNOWN",
        Standby => "STANDBY",
        ManualCharge => "MANUAL_CHARGE",
        ManualDcm => "MANUAL_DCM",
        Dcm => "DCM",
        TariffOptimizer => "TARIFF_OPTIMIZER",
        EnergyArbitrage => "ENERGY_ARBITRAGE",
        SelfConsumption => "SELF_CONSUMPTION",
        BackupOnly => "BACKUP_ONLY",
        HecoZeroExport => "HECO_ZERO_EXPORT",
    }
}

vocabulary! {
    /// System health check category.
    HealthCategory {
        Acpv => "ACPV",
        Platform => "PLATFORM",
        Storage => "STORAGE",
        All => "ALL",
    }
}

vocabulary! {
    HealthCheckStatus {
        Failed => "FAILED",
        Running => "RUNNING",
        Succeeded => "SUCCEEDED",
        Unsupported => "UNSUPPORTED",
        Waiting => "WAITING",
    }
}

vocabulary! {
    CurrentTransducerStatus {
        Ok => "OK",
        NotFound => "NOT_FOUND",
        Unknown => "UNKNOWN",
    }
}

vocabulary! {
    /// Current transducer state on the consumption meter's B leg, which
    /// never reports `UNKNOWN`.
    CurrentTransducerPresence {
        Ok => "OK",
        NotFound => "NOT_FOUND",
    }
}

vocabulary! {
    /// Device driver a grid profile is applied through.
    GridProfileDevice {
        Delta => "DEV_DELTA",
        Esmm => "DEV_ESMM",
        Mime => "DEV_MIME",
        Sma => "DEV_SMA",
        Sunspec => "DEV_SUNSPEC",
    }
}

vocabulary! {
    GridSystem {
        SitePv => "SITE_PV",
        SiteEss => "SITE_ESS",
        SiteAll => "SITE_ALL",
    }
}

vocabulary! {
    /// Microinverter family to look for during discovery.
    MiType {
        All => "ALL",
        Enph => "ENPH",
        Sbt => "SBT",
    }
}

vocabulary! {
    /// Which device classes a discovery run covers.
    DiscoveryScope {
        AllNoMi => "allnomi",
        All => "all",
        MetStation => "Metstation",
        AllPlusMime => "allplusmime",
        AllNoInverters => "allnoinverters",
        Storage => "storage",
    }
}

vocabulary! {
    /// Bus a discovery run scans.
    DiscoveryInterface {
        Mime => "mime",
        Net => "net",
        TtyUsb0 => "ttyUSB0",
        TtyUsb1 => "ttyUSB1",
        TtyUsb2 => "ttyUSB2",
        Local => "local",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_spelling_round_trip() {
        for value in DeviceType::ALL {
            let json = serde_json::to_string(value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.as_str()));
            assert_eq!(value.as_str().parse::<DeviceType>().unwrap(), *value);
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = "Toaster".parse::<DeviceType>().unwrap_err();
        assert_eq!(err.vocabulary, "DeviceType");
        assert_eq!(err.to_string(), "'Toaster' is not a valid DeviceType");

        assert!(serde_json::from_str::<ClaimOp>("\"replace\"").is_err());
    }

    #[test]
    fn test_multi_word_values() {
        let parsed: DeviceType = serde_json::from_str("\"Power Meter\"").unwrap();
        assert_eq!(parsed, DeviceType::PowerMeter);
        let parsed: DeviceType = serde_json::from_str("\"HUB+\"").unwrap();
        assert_eq!(parsed, DeviceType::HubPlus);
    }

    #[test]
    fn test_network_type_path_segment() {
        assert_eq!(NetworkType::Eth.path_segment(), "eth");
        assert_eq!(NetworkType::Wifi.to_string(), "WIFI");
    }

    #[test]
    fn test_state_descr_errors() {
        assert!(StateDescr::PingError.is_error());
        assert!(!StateDescr::Ok.is_error());
        assert_eq!("PV_INFO_ERROR".parse::<StateDescr>(), Ok(StateDescr::PvInfoError));
    }

    #[test]
    fn test_discovery_vocabularies() {
        assert_eq!(DiscoveryScope::MetStation.as_str(), "Metstation");
        assert_eq!(DiscoveryInterface::TtyUsb1.as_str(), "ttyUSB1");
        assert_eq!(MiType::ALL.len(), 3);
    }
}
