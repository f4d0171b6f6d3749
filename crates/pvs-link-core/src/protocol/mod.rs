//! Protocol layer for the gateway REST API.
//!
//! This module defines the payload records, their closed vocabularies and the
//! paths they are exchanged on.

pub mod endpoints;
pub mod records;
pub mod schema;
pub mod vocabulary;

pub use endpoints::Endpoints;
pub use schema::{DateDesc, Record};
