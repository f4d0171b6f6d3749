//! JSON-formatted output for CLI.

use serde::Serialize;
use serde_json::Value;

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_record(&self, record: &Value) -> String {
        Self::to_json(record)
    }

    fn format_devices(&self, devices: &[Value]) -> String {
        Self::to_json(devices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_is_printed_as_is() {
        let record = json!({"result": "succeed", "percent": 42.5});
        let printed = JsonOutput::new().format_record(&record);
        let parsed: Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(parsed, record);
        assert!(printed.contains('\n'));
    }

    #[test]
    fn test_devices_are_an_array() {
        let printed = JsonOutput::new().format_devices(&[json!({"SERIAL": "A"}), json!({"SERIAL": "B"})]);
        let parsed: Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }
}
