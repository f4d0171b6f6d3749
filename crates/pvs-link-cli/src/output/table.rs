//! Table-formatted output for CLI.
//!
//! Scalar fields of an object go into one `Field | Value` table. Nested
//! objects get their own titled section, and lists of objects become a table
//! with one row per entry.

use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde_json::{Map, Value};

use super::OutputFormatter;

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn new_table() -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Text of a value that fits in one cell.
    fn cell_text(value: &Value) -> String {
        match value {
            Value::Null => "-".to_string(),
            Value::String(s) => s.clone(),
            Value::Array(items) if items.iter().all(Self::is_scalar) => items
                .iter()
                .map(Self::cell_text)
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        }
    }

    fn is_scalar(value: &Value) -> bool {
        !matches!(value, Value::Object(_) | Value::Array(_))
    }

    /// Whether a value is rendered inline rather than as its own section.
    fn is_inline(value: &Value) -> bool {
        match value {
            Value::Object(_) => false,
            Value::Array(items) => items.iter().all(Self::is_scalar),
            _ => true,
        }
    }

    fn cell(key: &str, value: &Value) -> Cell {
        let text = Self::cell_text(value);
        let cell = Cell::new(&text);
        if !matches!(key, "result" | "status" | "STATE" | "STATEDESCR") {
            return cell;
        }
        match text.to_ascii_lowercase().as_str() {
            "succeed" | "success" | "ok" | "working" | "succeeded" => cell.fg(Color::Green),
            "error" | "fail" | "failed" | "ping_error" => cell.fg(Color::Red),
            "pending" | "running" | "in_progress" => cell.fg(Color::Yellow),
            _ => cell,
        }
    }

    fn render_object(title: Option<&str>, object: &Map<String, Value>, out: &mut Vec<String>) {
        let (inline, nested): (Vec<_>, Vec<_>) =
            object.iter().partition(|(_, value)| Self::is_inline(value));

        if let Some(title) = title {
            out.push(title.bold().to_string());
        }

        if !inline.is_empty() {
            let mut table = Self::new_table();
            table.set_header(vec!["Field", "Value"]);
            for (key, value) in inline {
                table.add_row(vec![Cell::new(key), Self::cell(key, value)]);
            }
            out.push(table.to_string());
        } else if nested.is_empty() {
            out.push("(empty)".to_string());
        }

        for (key, value) in nested {
            let child = match title {
                Some(title) => format!("{}.{}", title, key),
                None => key.clone(),
            };
            Self::render_value(Some(child.as_str()), value, out);
        }
    }

    fn render_rows(title: Option<&str>, items: &[Value], out: &mut Vec<String>) {
        if let Some(title) = title {
            out.push(title.bold().to_string());
        }
        if items.is_empty() {
            out.push("(none)".to_string());
            return;
        }

        // Union of keys, in first-seen order
        let mut columns: Vec<&str> = Vec::new();
        for item in items {
            if let Value::Object(object) = item {
                for key in object.keys() {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key);
                    }
                }
            }
        }

        let mut table = Self::new_table();
        if columns.is_empty() {
            table.set_header(vec!["Value"]);
            for item in items {
                table.add_row(vec![Cell::new(Self::cell_text(item))]);
            }
        } else {
            table.set_header(columns.clone());
            for item in items {
                let row: Vec<Cell> = columns
                    .iter()
                    .map(|column| match item.get(*column) {
                        Some(value) => Self::cell(column, value),
                        None => Cell::new("-"),
                    })
                    .collect();
                table.add_row(row);
            }
        }
        out.push(table.to_string());
    }

    fn render_value(title: Option<&str>, value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(object) => Self::render_object(title, object, out),
            Value::Array(items) => Self::render_rows(title, items, out),
            scalar => match title {
                Some(title) => out.push(format!("{}: {}", title.bold(), Self::cell_text(scalar))),
                None => out.push(Self::cell_text(scalar)),
            },
        }
    }

    fn device_title(device: &Value) -> String {
        let field = |name: &str| device.get(name).and_then(Value::as_str).unwrap_or("?");
        format!("Device {} ({})", field("SERIAL"), field("DEVICE_TYPE"))
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_record(&self, record: &Value) -> String {
        let mut out = Vec::new();
        Self::render_value(None, record, &mut out);
        out.join("\n\n")
    }

    fn format_devices(&self, devices: &[Value]) -> String {
        if devices.is_empty() {
            return "No devices found.".to_string();
        }

        let mut out = Vec::new();
        for device in devices {
            let title = Self::device_title(device);
            Self::render_value(Some(title.as_str()), device, &mut out);
        }
        format!("{}\n\nFound {} device(s)", out.join("\n\n"), devices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::table_output;
    use serde_json::json;

    fn render(value: Value) -> String {
        table_output().format_record(&value)
    }

    #[test]
    fn test_nested_sections() {
        let printed = render(json!({
            "result": "succeed",
            "networkstatus": {
                "ts": "1575501242",
                "interfaces": [
                    {"interface": "wan", "internet": "up"},
                    {"interface": "sta0", "status": "not registered"}
                ]
            }
        }));

        assert!(printed.contains("succeed"));
        assert!(printed.contains("networkstatus"));
        assert!(printed.contains("networkstatus.interfaces"));
        assert!(printed.contains("not registered"));
    }

    #[test]
    fn test_scalar_list_is_inline() {
        let printed = render(json!({"hostlist": ["a.example:22", "b.example:22"]}));
        assert!(printed.contains("a.example:22, b.example:22"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(json!([])), "(none)");
    }

    #[test]
    fn test_devices_one_block_each() {
        let printed = table_output().format_devices(&[
            json!({"SERIAL": "ZT01", "DEVICE_TYPE": "PVS", "MODEL": "PV Supervisor PVS6"}),
            json!({"SERIAL": "PVS6M0400p", "DEVICE_TYPE": "Power Meter", "subtype": "GROSS_PRODUCTION"}),
        ]);
        assert!(printed.contains("Device ZT01 (PVS)"));
        assert!(printed.contains("Device PVS6M0400p (Power Meter)"));
        assert!(printed.ends_with("Found 2 device(s)"));
    }
}
