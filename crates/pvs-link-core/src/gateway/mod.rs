//! Gateway client: the generic round trip plus one typed method per endpoint.
//!
//! Each method fixes the path and response record, and turns the status
//! codes its endpoint uses for "degraded" into a [`GatewayError`].
//!
//! [`GatewayError`]: crate::error::GatewayError

mod certificate;
mod communication;
mod devices;
mod diagnostics;
mod firmware;
mod grid_profile;
mod network;
mod pcs;
mod status;
mod system_health;
pub mod transport;
mod whitelist;

pub use transport::{ClientConfig, GatewayClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Status most endpoints answer with when the gateway side operation failed.
const SERVER_ERROR: &[u16] = &[500];
