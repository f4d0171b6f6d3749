//! PVS-Link core: typed records and an HTTP client for the local REST API of
//! a PVS solar gateway.
//!
//! [`GatewayClient`] owns one connection pool and exposes a method per
//! endpoint. Every payload is a [`Record`](protocol::Record) that validates on
//! the way in and reports the field path of the first mismatch.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::{ClientError, GatewayError, SchemaError, TransportError};
pub use gateway::{ClientConfig, GatewayClient};
