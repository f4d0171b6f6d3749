//! Request and response payloads, grouped by API area.

pub mod certificate;
pub mod common;
pub mod communication;
pub mod devices;
pub mod diagnostics;
pub mod firmware;
pub mod grid_profile;
pub mod inverters;
pub mod network;
pub mod pcs;
pub mod status;
pub mod system_health;
pub mod whitelist;

pub use certificate::CertMqttFailed;
pub use common::{
    DatalessResponse, Failure, OperationResult, Progress, ResultSucceed, StatusResponse,
    ValueAndUnit,
};
pub use communication::{
    AccessPoint, CommSystem, CommunicationAp, CommunicationsInterfaces, Interface, NetworkStatus,
    P2pClientPaired, P2pPairMessage, P2pPairRequest, P2pPairingInfo,
};
pub use devices::{
    ClaimOperation, ClaimOperationList, DeviceDetail, DeviceFamily, DeviceList, DeviceMetadata,
    DiscoverProgress, DiscoverProgressList, DiscoveryProgress, DiscoveryRequest, InverterPayload,
    MeterPayload, SupervisorInfo,
};
pub use diagnostics::{
    PingData, PingOptions, TraceRouteObject, TracerouteOptions, TunnelOptions, TunnelStatus,
};
pub use firmware::{DataFwResponse, FirmwareUpdateRequest};
pub use grid_profile::{
    GridProfile, GridProfileDeviceStatus, GridProfileSelection, GridProfileSystemStatus, Zipcode,
};
pub use inverters::{DiscoveryInverters, InverterInventory, InverterSerial};
pub use network::{
    CellPrimaryCheck, FirewallEndpoint, FirewallSetting, FirewallSettingsConfiguration,
    GeneralSettings, InterfaceConfiguration, NetworkInterface, PingableDevice,
    PowerProductionSetting, PowerProductionStatus,
};
pub use pcs::PcsSettings;
pub use status::{
    AggregateMiProductionReading, BatteryStatus, ConsumptionMeterA, ConsumptionMeterB,
    ConsumptionMeterReading, EnergyStorageSystemStatus, EquinoxSystemStatus, EssMeter,
    EssMeterReading, EssPcsSettings, EssState, EssStatusReport, HubPlusStatus, InverterStatus,
    NameplatePower, PhaseReading, ProductionMeter, ProductionMeterReading,
};
pub use system_health::{
    CheckListItem, HealthCheckRequest, SystemHealthCheckListItem, SystemHealthCheckListStatus,
};
pub use whitelist::Whitelist;
