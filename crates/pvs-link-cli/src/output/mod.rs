//! Output formatting for CLI results.
//!
//! Formatters work on the serialized JSON of a record, so what is printed is
//! always what the record would send back to the gateway.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use pvs_link_core::protocol::Record;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Output formatter trait
pub trait OutputFormatter {
    /// Format one response record
    fn format_record(&self, record: &Value) -> String;

    /// Format devices, one block per device
    fn format_devices(&self, devices: &[Value]) -> String;
}

/// Get the formatter for the requested output format
pub fn get_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonOutput::new()),
        OutputFormat::Table => Box::new(TableOutput::new()),
    }
}

pub fn render<T: Record>(output: &dyn OutputFormatter, record: &T) -> Result<String> {
    Ok(output.format_record(&record.to_json()?))
}

pub fn render_devices<T: Record>(output: &dyn OutputFormatter, devices: &[T]) -> Result<String> {
    let values = devices
        .iter()
        .map(|device| device.to_json())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(output.format_devices(&values))
}
