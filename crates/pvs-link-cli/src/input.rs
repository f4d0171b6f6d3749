//! Request bodies built from a JSON file or from flags.

use std::path::Path;

use pvs_link_core::protocol::Record;

use crate::error::{CliError, InputFileError, Result};

/// Read a record from a JSON file, validating it against its schema.
pub fn read_record<T: Record>(path: &Path) -> Result<T> {
    let input_error = |source: InputFileError| CliError::InputFile {
        path: path.to_path_buf(),
        source,
    };

    let bytes = std::fs::read(path).map_err(|e| input_error(e.into()))?;
    T::from_slice(&bytes).map_err(|e| input_error(e.into()))
}

/// Use the file when one is given. Flags are only consulted without a file
/// and are never merged into it.
pub fn file_or_flags<T, F>(file: Option<&Path>, from_flags: F) -> Result<T>
where
    T: Record,
    F: FnOnce() -> Result<T>,
{
    match file {
        Some(path) => read_record(path),
        None => from_flags(),
    }
}

/// A flag the request cannot be built without.
pub fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| CliError::Usage(format!("--{} or --config-file is required", flag)))
}
