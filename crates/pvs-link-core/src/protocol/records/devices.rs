//! Discovered hardware, discovery runs and device claims.
//!
//! The gateway reports every device as one flat object whose meaningful
//! fields depend on `DEVICE_TYPE`. [`DeviceDetail`] keeps the identity fields
//! common to every family and moves the rest into a [`DeviceFamily`] payload,
//! while still reading and writing the flat wire shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Progress;
use crate::protocol::schema::{impl_record, non_empty};
use crate::protocol::vocabulary::{
    ClaimOp, DeviceType, DiscoveryInterface, DiscoveryScope, MeterSubtype, MiType, ResultKind,
    StateDescr,
};

/// One device known to the gateway.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDeviceDetail", into = "RawDeviceDetail")]
pub struct DeviceDetail {
    pub operation: Option<ClaimOp>,
    /// PAN the device is associated with. `0` means unassociated.
    pub panid: Option<f64>,
    pub rssi: Option<f64>,
    pub is_detail: Option<String>,
    pub serial: Option<String>,
    /// Detailed vendor type, e.g. `PVS5-METER-P`.
    pub kind: Option<String>,
    pub model: Option<String>,
    pub descr: Option<String>,
    pub state: Option<String>,
    pub state_descr: Option<String>,
    pub sw_version: Option<String>,
    pub port: Option<String>,
    pub mod_sn: Option<String>,
    pub nameplate_sku: Option<String>,
    pub data_time: Option<String>,
    pub cur_time: Option<String>,
    pub family: DeviceFamily,
}

/// Fields that only make sense for one hardware family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeviceFamily {
    PowerMeter(MeterPayload),
    Inverter(InverterPayload),
    /// Any other `DEVICE_TYPE`, or none at all.
    Other {
        device_type: Option<DeviceType>,
        /// Passed through as reported; its shape varies by firmware.
        subtype: Option<Value>,
    },
}

impl Default for DeviceFamily {
    fn default() -> Self {
        DeviceFamily::Other {
            device_type: None,
            subtype: None,
        }
    }
}

/// Readings reported by power meters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeterPayload {
    pub subtype: Option<MeterSubtype>,
    pub ltea_3phsum_kwh: Option<String>,
    pub p_3phsum_kw: Option<String>,
    pub vln_3phavg_v: Option<String>,
    pub i_3phsum_a: Option<String>,
    pub freq_hz: Option<String>,
}

/// Panel and readings reported by micro and string inverters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InverterPayload {
    /// Panel model. A string inverter drives `module_count` of them.
    pub panel: Option<String>,
    pub module_count: Option<i64>,
    pub ltea_3phsum_kwh: Option<String>,
    pub p_3phsum_kw: Option<String>,
    pub vln_3phavg_v: Option<String>,
    pub i_3phsum_a: Option<String>,
    pub v_mppt1_v: Option<String>,
    pub i_mppt1_a: Option<String>,
    pub t_htsnk_degc: Option<String>,
    pub freq_hz: Option<String>,
}

impl DeviceDetail {
    pub fn device_type(&self) -> Option<DeviceType> {
        match &self.family {
            DeviceFamily::PowerMeter(_) => Some(DeviceType::PowerMeter),
            DeviceFamily::Inverter(_) => Some(DeviceType::Inverter),
            DeviceFamily::Other { device_type, .. } => *device_type,
        }
    }

    /// Discovery state, if the gateway reported one this client knows.
    pub fn discovery_state(&self) -> Option<StateDescr> {
        self.state_descr.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn is_supervisor(&self) -> bool {
        self.device_type() == Some(DeviceType::Pvs)
    }
}

/// Flat wire form of [`DeviceDetail`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawDeviceDetail {
    #[serde(rename = "OPERATION", default, skip_serializing_if = "Option::is_none")]
    operation: Option<ClaimOp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    panid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rssi: Option<f64>,
    #[serde(rename = "ISDETAIL", default, skip_serializing_if = "Option::is_none")]
    is_detail: Option<String>,
    #[serde(
        rename = "SERIAL",
        default,
        deserialize_with = "non_empty::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    serial: Option<String>,
    #[serde(
        rename = "TYPE",
        default,
        deserialize_with = "non_empty::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    kind: Option<String>,
    #[serde(rename = "STATE", default, skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(rename = "STATEDESCR", default, skip_serializing_if = "Option::is_none")]
    state_descr: Option<String>,
    #[serde(rename = "MODEL", default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(rename = "DESCR", default, skip_serializing_if = "Option::is_none")]
    descr: Option<String>,
    #[serde(rename = "DEVICE_TYPE", default, skip_serializing_if = "Option::is_none")]
    device_type: Option<DeviceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtype: Option<Value>,
    #[serde(rename = "SWVER", default, skip_serializing_if = "Option::is_none")]
    sw_version: Option<String>,
    #[serde(rename = "PORT", default, skip_serializing_if = "Option::is_none")]
    port: Option<String>,
    #[serde(rename = "MOD_SN", default, skip_serializing_if = "Option::is_none")]
    mod_sn: Option<String>,
    #[serde(rename = "NMPLT_SKU", default, skip_serializing_if = "Option::is_none")]
    nameplate_sku: Option<String>,
    #[serde(rename = "DATATIME", default, skip_serializing_if = "Option::is_none")]
    data_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ltea_3phsum_kwh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    p_3phsum_kw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vln_3phavg_v: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    i_3phsum_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    v_mppt1_v: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    i_mppt1_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    t_htsnk_degc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    freq_hz: Option<String>,
    #[serde(rename = "CURTIME", default, skip_serializing_if = "Option::is_none")]
    cur_time: Option<String>,
    #[serde(rename = "PANEL", default, skip_serializing_if = "Option::is_none")]
    panel: Option<String>,
    #[serde(rename = "moduleCount", default, skip_serializing_if = "Option::is_none")]
    module_count: Option<i64>,
}

impl TryFrom<RawDeviceDetail> for DeviceDetail {
    type Error = String;

    fn try_from(raw: RawDeviceDetail) -> Result<Self, Self::Error> {
        let family = match raw.device_type {
            Some(DeviceType::PowerMeter) => {
                let subtype = match raw.subtype {
                    None | Some(Value::Null) => None,
                    Some(Value::String(s)) => Some(
                        s.parse::<MeterSubtype>()
                            .map_err(|e| format!("subtype: {}", e))?,
                    ),
                    Some(other) => return Err(format!("subtype: expected a string, got {}", other)),
                };
                DeviceFamily::PowerMeter(MeterPayload {
                    subtype,
                    ltea_3phsum_kwh: raw.ltea_3phsum_kwh,
                    p_3phsum_kw: raw.p_3phsum_kw,
                    vln_3phavg_v: raw.vln_3phavg_v,
                    i_3phsum_a: raw.i_3phsum_a,
                    freq_hz: raw.freq_hz,
                })
            }
            Some(DeviceType::Inverter) => DeviceFamily::Inverter(InverterPayload {
                panel: raw.panel,
                module_count: raw.module_count,
                ltea_3phsum_kwh: raw.ltea_3phsum_kwh,
                p_3phsum_kw: raw.p_3phsum_kw,
                vln_3phavg_v: raw.vln_3phavg_v,
                i_3phsum_a: raw.i_3phsum_a,
                v_mppt1_v: raw.v_mppt1_v,
                i_mppt1_a: raw.i_mppt1_a,
                t_htsnk_degc: raw.t_htsnk_degc,
                freq_hz: raw.freq_hz,
            }),
            device_type => DeviceFamily::Other {
                device_type,
                subtype: raw.subtype.filter(|s| !s.is_null()),
            },
        };

        Ok(DeviceDetail {
            operation: raw.operation,
            panid: raw.panid,
            rssi: raw.rssi,
            is_detail: raw.is_detail,
            serial: raw.serial,
            kind: raw.kind,
            model: raw.model,
            descr: raw.descr,
            state: raw.state,
            state_descr: raw.state_descr,
            sw_version: raw.sw_version,
            port: raw.port,
            mod_sn: raw.mod_sn,
            nameplate_sku: raw.nameplate_sku,
            data_time: raw.data_time,
            cur_time: raw.cur_time,
            family,
        })
    }
}

impl From<DeviceDetail> for RawDeviceDetail {
    fn from(device: DeviceDetail) -> Self {
        let mut raw = RawDeviceDetail {
            operation: device.operation,
            panid: device.panid,
            rssi: device.rssi,
            is_detail: device.is_detail,
            serial: device.serial,
            kind: device.kind,
            state: device.state,
            state_descr: device.state_descr,
            model: device.model,
            descr: device.descr,
            sw_version: device.sw_version,
            port: device.port,
            mod_sn: device.mod_sn,
            nameplate_sku: device.nameplate_sku,
            data_time: device.data_time,
            cur_time: device.cur_time,
            ..Default::default()
        };

        match device.family {
            DeviceFamily::PowerMeter(meter) => {
                raw.device_type = Some(DeviceType::PowerMeter);
                raw.subtype = meter.subtype.map(|s| Value::String(s.as_str().to_string()));
                raw.ltea_3phsum_kwh = meter.ltea_3phsum_kwh;
                raw.p_3phsum_kw = meter.p_3phsum_kw;
                raw.vln_3phavg_v = meter.vln_3phavg_v;
                raw.i_3phsum_a = meter.i_3phsum_a;
                raw.freq_hz = meter.freq_hz;
            }
            DeviceFamily::Inverter(inverter) => {
                raw.device_type = Some(DeviceType::Inverter);
                raw.panel = inverter.panel;
                raw.module_count = inverter.module_count;
                raw.ltea_3phsum_kwh = inverter.ltea_3phsum_kwh;
                raw.p_3phsum_kw = inverter.p_3phsum_kw;
                raw.vln_3phavg_v = inverter.vln_3phavg_v;
                raw.i_3phsum_a = inverter.i_3phsum_a;
                raw.v_mppt1_v = inverter.v_mppt1_v;
                raw.i_mppt1_a = inverter.i_mppt1_a;
                raw.t_htsnk_degc = inverter.t_htsnk_degc;
                raw.freq_hz = inverter.freq_hz;
            }
            DeviceFamily::Other {
                device_type,
                subtype,
            } => {
                raw.device_type = device_type;
                raw.subtype = subtype;
            }
        }

        raw
    }
}

/// Response of the device list endpoint.
pub type DeviceList = Vec<DeviceDetail>;

/// Add, remove or keep one device in the managed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOperation {
    #[serde(rename = "OPERATION")]
    pub operation: ClaimOp,
    #[serde(rename = "MODEL")]
    pub model: String,
    #[serde(rename = "SERIAL")]
    pub serial: String,
    /// Same value as the device's `TYPE`.
    #[serde(rename = "TYPE")]
    pub kind: String,
}

pub type ClaimOperationList = Vec<ClaimOperation>;

/// Per device class progress of a discovery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverProgress {
    #[serde(rename = "TYPE")]
    pub kind: String,
    #[serde(rename = "PROGR")]
    pub percent: i64,
    #[serde(rename = "NFOUND")]
    pub found: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverProgressList {
    pub progress: Vec<DiscoverProgress>,
    pub complete: bool,
    pub result: ResultKind,
}

/// Response of the discovery progress endpoint.
///
/// Firmware reports either per class progress or a single overall percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiscoveryProgress {
    PerClass(DiscoverProgressList),
    Overall(Progress),
}

impl DiscoveryProgress {
    /// Overall completion, averaged over device classes when reported per class.
    pub fn percent(&self) -> f64 {
        match self {
            DiscoveryProgress::Overall(progress) => progress.percent,
            DiscoveryProgress::PerClass(list) if list.progress.is_empty() => {
                if list.complete { 100.0 } else { 0.0 }
            }
            DiscoveryProgress::PerClass(list) => {
                let total: i64 = list.progress.iter().map(|p| p.percent).sum();
                total as f64 / list.progress.len() as f64
            }
        }
    }
}

/// Body that starts a discovery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryRequest {
    #[serde(rename = "NumDevices")]
    pub num_devices: u32,
    #[serde(rename = "MIType")]
    pub mi_type: MiType,
    #[serde(rename = "Device")]
    pub device: DiscoveryScope,
    #[serde(rename = "Interfaces", default, skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<DiscoveryInterface>>,
    #[serde(rename = "SaveConfigFile", with = "int_flag")]
    pub save_config_file: bool,
    #[serde(rename = "KeepDevices", with = "int_flag")]
    pub keep_devices: bool,
}

impl Default for DiscoveryRequest {
    fn default() -> Self {
        Self {
            num_devices: 200,
            mi_type: MiType::All,
            device: DiscoveryScope::All,
            interfaces: None,
            save_config_file: false,
            keep_devices: false,
        }
    }
}

/// Booleans the discovery endpoint expects as `0`/`1`.
mod int_flag {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::custom(format!("expected 0 or 1, got {}", other))),
        }
    }
}

/// Identity of the gateway itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupervisorInfo {
    #[serde(rename = "FWVER", default, skip_serializing_if = "Option::is_none")]
    pub fw_version: Option<String>,
    #[serde(rename = "MODEL", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "SERIAL", default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(rename = "SWVER", default, skip_serializing_if = "Option::is_none")]
    pub sw_version: Option<String>,
    #[serde(rename = "SCVER", default, skip_serializing_if = "Option::is_none")]
    pub sc_version: Option<f64>,
    #[serde(rename = "EASICVER", default, skip_serializing_if = "Option::is_none")]
    pub easic_version: Option<f64>,
    #[serde(rename = "WNVER", default, skip_serializing_if = "Option::is_none")]
    pub wn_version: Option<f64>,
    #[serde(rename = "BUILD", default, skip_serializing_if = "Option::is_none")]
    pub build: Option<f64>,
}

/// Installer supplied metadata for one device.
///
/// `SUBTYPE` and `modelStr` are deprecated aliases of `subtype` and `panel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetadata {
    #[serde(rename = "SERIAL")]
    pub serial: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
    #[serde(rename = "moduleCount", default, skip_serializing_if = "Option::is_none")]
    pub module_count: Option<i64>,
    #[serde(rename = "SUBTYPE", default, skip_serializing_if = "Option::is_none")]
    pub legacy_subtype: Option<Value>,
    #[serde(rename = "modelStr", default, skip_serializing_if = "Option::is_none")]
    pub model_str: Option<String>,
}

impl_record!(
    DeviceDetail,
    ClaimOperation,
    DiscoverProgress,
    DiscoverProgressList,
    DiscoveryProgress,
    DiscoveryRequest,
    SupervisorInfo,
    DeviceMetadata,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::schema::Record;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn meter_json() -> Value {
        json!({
            "DEVICE_TYPE": "Power Meter",
            "SERIAL": "PVS5M508095p",
            "TYPE": "PVS5-METER-P",
            "MODEL": "PVS5M0400p",
            "STATEDESCR": "Working",
            "subtype": "GROSS_PRODUCTION",
            "p_3phsum_kw": "3.1",
            "freq_hz": "60.01",
            "ct_scl_fctr": "50"
        })
    }

    #[test]
    fn test_meter_family_payload() {
        let device = DeviceDetail::from_json(&meter_json()).unwrap();
        assert_eq!(device.device_type(), Some(DeviceType::PowerMeter));
        match &device.family {
            DeviceFamily::PowerMeter(meter) => {
                assert_eq!(meter.subtype, Some(MeterSubtype::GrossProduction));
                assert_eq!(meter.p_3phsum_kw.as_deref(), Some("3.1"));
            }
            other => panic!("unexpected family: {other:?}"),
        }
    }

    #[test]
    fn test_flat_shape_round_trip() {
        let device = DeviceDetail::from_json(&meter_json()).unwrap();
        let wire = device.to_json().unwrap();
        assert_eq!(wire["DEVICE_TYPE"], "Power Meter");
        assert_eq!(wire["subtype"], "GROSS_PRODUCTION");
        assert!(wire.get("ct_scl_fctr").is_none());
        assert_eq!(DeviceDetail::from_json(&wire).unwrap(), device);
    }

    #[test]
    fn test_inverter_family_payload() {
        let device = DeviceDetail::from_json(&json!({
            "DEVICE_TYPE": "Inverter",
            "SERIAL": "E00122142080335",
            "PANEL": "SPR-X21-345-C-AC",
            "t_htsnk_degc": "34"
        }))
        .unwrap();
        match device.family {
            DeviceFamily::Inverter(inverter) => {
                assert_eq!(inverter.panel.as_deref(), Some("SPR-X21-345-C-AC"));
                assert_eq!(inverter.t_htsnk_degc.as_deref(), Some("34"));
            }
            other => panic!("unexpected family: {other:?}"),
        }
    }

    #[test]
    fn test_other_family_keeps_plain_subtype() {
        let device = DeviceDetail::from_json(&json!({
            "DEVICE_TYPE": "PVS",
            "SERIAL": "ZT01",
            "subtype": "not_associated"
        }))
        .unwrap();
        assert!(device.is_supervisor());
        assert_eq!(
            device.family,
            DeviceFamily::Other {
                device_type: Some(DeviceType::Pvs),
                subtype: Some(json!("not_associated")),
            }
        );
    }

    #[test]
    fn test_other_family_tolerates_any_subtype() {
        let devices = DeviceList::from_json(&json!([
            {"DEVICE_TYPE": "PVS", "SERIAL": "ZT01"},
            {"DEVICE_TYPE": "Battery", "SERIAL": "B1", "subtype": 3},
            {"DEVICE_TYPE": "ESS Hub", "SERIAL": "H1", "subtype": {"rev": "B"}}
        ]))
        .unwrap();
        assert_eq!(devices.len(), 3);
        match &devices[1].family {
            DeviceFamily::Other { subtype, .. } => assert_eq!(subtype, &Some(json!(3))),
            other => panic!("unexpected family: {other:?}"),
        }
        assert_eq!(devices[2].to_json().unwrap()["subtype"], json!({"rev": "B"}));
    }

    #[test]
    fn test_discovery_progress_shapes() {
        let overall =
            DiscoveryProgress::from_json(&json!({"result": "succeed", "percent": 42.5})).unwrap();
        assert!(matches!(overall, DiscoveryProgress::Overall(_)));
        assert_eq!(overall.percent(), 42.5);
        assert_eq!(overall.to_json().unwrap(), json!({"result": "succeed", "percent": 42.5}));

        let per_class = DiscoveryProgress::from_json(&json!({
            "progress": [
                {"TYPE": "MI", "PROGR": 100, "NFOUND": 12},
                {"TYPE": "PVS5-METER", "PROGR": 50, "NFOUND": 2}
            ],
            "complete": false,
            "result": "succeed"
        }))
        .unwrap();
        assert!(matches!(per_class, DiscoveryProgress::PerClass(_)));
        assert_eq!(per_class.percent(), 75.0);
    }

    #[test]
    fn test_unknown_meter_subtype_rejected() {
        let mut raw = meter_json();
        raw["subtype"] = json!("BACKWARDS");
        assert!(DeviceDetail::from_json(&raw).is_err());
    }

    #[test]
    fn test_empty_identifiers_rejected() {
        let err = DeviceList::from_json(&json!([
            {"SERIAL": "A1"},
            {"SERIAL": "A2", "TYPE": ""}
        ]))
        .unwrap_err();
        assert_eq!(err.path, "[1].TYPE");
        assert_eq!(err.record, "Vec<DeviceDetail>");
    }

    #[test]
    fn test_unknown_device_type_has_path() {
        let err = DeviceList::from_json(&json!([
            {"SERIAL": "A1"},
            {"SERIAL": "A2"},
            {"SERIAL": "A3", "DEVICE_TYPE": "Toaster"}
        ]))
        .unwrap_err();
        assert_eq!(err.path, "[2].DEVICE_TYPE");
    }

    #[test]
    fn test_claim_operation_rejects_unknown_op() {
        let err = ClaimOperation::from_json(&json!({
            "OPERATION": "replace",
            "MODEL": "AC_Module_Type_E",
            "SERIAL": "E001",
            "TYPE": "SOLARBRIDGE"
        }))
        .unwrap_err();
        assert_eq!(err.path, "OPERATION");
    }

    #[test]
    fn test_claim_operation_requires_identity() {
        let err = ClaimOperation::from_json(&json!({"OPERATION": "add", "MODEL": "M"})).unwrap_err();
        assert!(err.message.contains("SERIAL"));
    }

    #[test]
    fn test_discovery_request_wire_shape() {
        let request = DiscoveryRequest {
            interfaces: Some(vec![DiscoveryInterface::Mime]),
            keep_devices: true,
            ..Default::default()
        };
        assert_eq!(
            request.to_json().unwrap(),
            json!({
                "NumDevices": 200,
                "MIType": "ALL",
                "Device": "all",
                "Interfaces": ["mime"],
                "SaveConfigFile": 0,
                "KeepDevices": 1
            })
        );
    }
}
