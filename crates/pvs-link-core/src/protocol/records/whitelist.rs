use serde::{Deserialize, Serialize};

use crate::protocol::schema::impl_record;

/// Host the gateway is allowed to reach.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Whitelist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl_record!(Whitelist);
