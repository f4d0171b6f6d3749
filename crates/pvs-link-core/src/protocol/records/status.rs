//! Energy storage (ESS) and Equinox system status reports.
//!
//! Every reading is a [`ValueAndUnit`] and every block carries the time it
//! was last refreshed. Blocks the site does not have are simply absent.

use serde::{Deserialize, Serialize};

use super::common::ValueAndUnit;
use crate::protocol::schema::{impl_record, DateDesc};
use crate::protocol::vocabulary::{
    ContactorError, ContactorPosition, CurrentTransducerPresence, CurrentTransducerStatus,
    FrequencyState, OperationalMode, PcsMode, PcsStatus, StorageControllerStatus, VoltageState,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatteryStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_amperage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_of_charge: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<ValueAndUnit>,
}

/// Voltage, current and power of one phase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<ValueAndUnit>,
}

/// One leg of the storage meter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EssMeter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<PhaseReading>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EssMeterReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agg_power: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_a: Option<EssMeter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_b: Option<EssMeter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyStorageSystemStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure_humidity: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure_temperature: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ess_meter_reading: Option<EssMeterReading>,
}

/// Hub Plus contactor and grid/load side health.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HubPlusStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contactor_error: Option<ContactorError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contactor_position: Option<ContactorPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_voltage_state: Option<VoltageState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_frequency_state: Option<FrequencyState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_voltage_state: Option<VoltageState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_frequency_state: Option<FrequencyState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_temperature: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_humidity: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_start_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aux_port_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverter_connection_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_phase1_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_phase2_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_phase1_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_phase2_voltage: Option<ValueAndUnit>,
}

/// PCS ratings as echoed in the ESS report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EssPcsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msp_breaker: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msp_busbar: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hubplus_breaker: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hubplus_busbar: Option<ValueAndUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EssState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_controller_status: Option<StorageControllerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcs_mode: Option<PcsMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcs_status: Option<PcsStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operational_mode: Option<OperationalMode>,
    /// Without permission to operate the controller only holds a set charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_to_operate: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InverterStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_current: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_a_current: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_b_current: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_n_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_n_voltage: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_power: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<ValueAndUnit>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EssStatusReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_status: Option<Vec<BatteryStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ess_status: Option<Vec<EnergyStorageSystemStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_plus_status: Option<HubPlusStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverter_status: Option<Vec<InverterStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcs_settings: Option<EssPcsSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ess_state: Option<EssState>,
}

/// Nameplate rating of the backup or non-backup inverters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NameplatePower {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<ValueAndUnit>,
}

/// Average microinverter power over the polling interval.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateMiProductionReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agg_power: Option<ValueAndUnit>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionMeter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<PhaseReading>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionMeterReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agg_power: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter: Option<ProductionMeter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsumptionMeterA {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<PhaseReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_transducer_status: Option<CurrentTransducerStatus>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsumptionMeterB {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<PhaseReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_transducer_status: Option<CurrentTransducerPresence>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsumptionMeterReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agg_power: Option<ValueAndUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_a: Option<ConsumptionMeterA>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_b: Option<ConsumptionMeterB>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EquinoxSystemStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateDesc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_inverter_nameplate_power: Option<NameplatePower>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_backup_inverter_nameplate_power: Option<NameplatePower>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_mi_production_reading: Option<AggregateMiProductionReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_meter_reading: Option<ProductionMeterReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_meter_reading: Option<ConsumptionMeterReading>,
}

impl_record!(
    BatteryStatus,
    PhaseReading,
    EssMeter,
    EssMeterReading,
    EnergyStorageSystemStatus,
    HubPlusStatus,
    EssPcsSettings,
    EssState,
    InverterStatus,
    EssStatusReport,
    NameplatePower,
    AggregateMiProductionReading,
    ProductionMeter,
    ProductionMeterReading,
    ConsumptionMeterA,
    ConsumptionMeterB,
    ConsumptionMeterReading,
    EquinoxSystemStatus,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::schema::Record;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn ess_report() -> serde_json::Value {
        json!({
            "last_updated": "2021-03-01 10:15:00",
            "battery_status": [{
                "serial_number": "BAT01",
                "state_of_charge": {"value": 0.87, "unit": "dimensionless"}
            }],
            "hub_plus_status": {
                "contactor_position": "CLOSED",
                "grid_voltage_state": "METER_VOLTAGE_IN_RANGE",
                "load_frequency_state": "METER_FREQ_IN_RANGE"
            },
            "ess_state": {
                "operational_mode": "SELF_CONSUMPTION",
                "permission_to_operate": true
            }
        })
    }

    #[test]
    fn test_ess_report() {
        let report = EssStatusReport::from_json(&ess_report()).unwrap();
        assert_eq!(report.last_updated.as_ref().map(DateDesc::as_str), Some("2021-03-01 10:15:00"));
        let hub = report.hub_plus_status.as_ref().unwrap();
        assert_eq!(hub.contactor_position, Some(ContactorPosition::Closed));
        assert_eq!(
            report.ess_state.as_ref().unwrap().operational_mode,
            Some(OperationalMode::SelfConsumption)
        );
    }

    #[test]
    fn test_round_trip_is_stable() {
        let report = EssStatusReport::from_json(&ess_report()).unwrap();
        let wire = report.to_json().unwrap();
        assert_eq!(wire, ess_report());
        assert_eq!(EssStatusReport::from_json(&wire).unwrap(), report);
    }

    #[test]
    fn test_bad_timestamp_has_path() {
        let err = EssStatusReport::from_json(&json!({
            "battery_status": [{"last_updated": "yesterday"}]
        }))
        .unwrap_err();
        assert_eq!(err.path, "battery_status[0].last_updated");
    }

    #[test]
    fn test_consumption_meter_b_never_unknown() {
        let ok = ConsumptionMeterReading::from_json(&json!({
            "meter_a": {"current_transducer_status": "UNKNOWN"},
            "meter_b": {"current_transducer_status": "NOT_FOUND"}
        }));
        assert!(ok.is_ok());

        let err = ConsumptionMeterReading::from_json(&json!({
            "meter_b": {"current_transducer_status": "UNKNOWN"}
        }))
        .unwrap_err();
        assert_eq!(err.path, "meter_b.current_transducer_status");
    }
}
