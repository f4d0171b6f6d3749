//! Parsing and serialization contract shared by every gateway payload.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;

/// A request or response payload exchanged with the gateway.
///
/// Unknown fields are ignored when parsing. Absent optional fields are left
/// out when serializing so partial updates never overwrite gateway defaults.
pub trait Record: Serialize + DeserializeOwned {
    /// Parse an already decoded JSON value.
    fn from_json(raw: &Value) -> Result<Self, SchemaError> {
        serde_path_to_error::deserialize(raw).map_err(SchemaError::from_path_error::<Self>)
    }

    /// Parse raw JSON bytes, as received from the gateway or read from a file.
    fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        let mut de = serde_json::Deserializer::from_slice(bytes);
        let record = serde_path_to_error::deserialize(&mut de)
            .map_err(SchemaError::from_path_error::<Self>)?;
        de.end().map_err(SchemaError::json::<Self>)?;
        Ok(record)
    }

    /// Serialize to a JSON value, omitting absent fields.
    fn to_json(&self) -> Result<Value, SchemaError> {
        serde_json::to_value(self).map_err(SchemaError::json::<Self>)
    }

    /// The record an empty response body stands for.
    fn empty() -> Result<Self, SchemaError> {
        Self::from_json(&Value::Object(Map::new()))
    }
}

/// Mark plain serde structs as gateway records.
macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::protocol::schema::Record for $ty {})+
    };
}

pub(crate) use impl_record;

impl<T: Record> Record for Vec<T> {
    fn empty() -> Result<Self, SchemaError> {
        Ok(Vec::new())
    }
}

/// Gateway timestamp in `YYYY-MM-DD HH:MM:SS` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateDesc(String);

const DATE_DESC_PATTERN: &str = r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$";

fn date_desc_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DATE_DESC_PATTERN).expect("date pattern is valid"))
}

impl DateDesc {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DateDesc {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if date_desc_regex().is_match(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "'{}' does not match YYYY-MM-DD HH:MM:SS",
                value
            ))
        }
    }
}

impl From<DateDesc> for String {
    fn from(value: DateDesc) -> Self {
        value.0
    }
}

impl fmt::Display for DateDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional IP address where the gateway sends `""` for "not assigned".
///
/// Use with `#[serde(default, deserialize_with = "blank_ip::deserialize")]`.
pub(crate) mod blank_ip {
    use std::net::IpAddr;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<IpAddr>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("'{}' is not an IP address", s))),
        }
    }
}

/// Optional vendor identifier that must not be empty when present.
pub(crate) mod non_empty {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if s.is_empty() => Err(D::Error::custom("identifier must not be empty")),
            other => Ok(other),
        }
    }
}
