//! animaldb - an append-only animal record store served over HTTP
//!
//! Records live in memory and are mirrored to a single JSON file that is
//! rewritten on every successful creation.

pub mod cli;
pub mod http_server;
pub mod query;
pub mod record;
pub mod schema;
pub mod storage;
pub mod store;
