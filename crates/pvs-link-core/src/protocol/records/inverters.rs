//! Inverter inventory as seen by the last discovery.

use serde::{Deserialize, Serialize};

use crate::protocol::schema::impl_record;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InverterSerial {
    #[serde(rename = "serialNumber", default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// Inverters that answered discovery, and expected ones that did not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InverterInventory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<Vec<InverterSerial>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<InverterSerial>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscoveryInverters {
    #[serde(rename = "stringInverters", default, skip_serializing_if = "Option::is_none")]
    pub string_inverters: Option<InverterInventory>,
    #[serde(rename = "microInverters", default, skip_serializing_if = "Option::is_none")]
    pub micro_inverters: Option<InverterInventory>,
}

impl_record!(InverterSerial, InverterInventory, DiscoveryInverters);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::schema::Record;
    use serde_json::json;

    #[test]
    fn test_inventory() {
        let inverters = DiscoveryInverters::from_json(&json!({
            "microInverters": {
                "found": [{"serialNumber": "E001"}, {"serialNumber": "E002"}],
                "missing": [{"serialNumber": "E003"}]
            }
        }))
        .unwrap();
        let micro = inverters.micro_inverters.unwrap();
        assert_eq!(micro.found.unwrap().len(), 2);
        assert_eq!(micro.missing.unwrap()[0].serial_number.as_deref(), Some("E003"));
        assert!(inverters.string_inverters.is_none());
    }
}
