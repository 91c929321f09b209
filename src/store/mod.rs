//! Record store subsystem
//!
//! The in-memory sequence plus the mutation path that appends to it and
//! rewrites the persisted mirror.

mod errors;
mod store;

pub use errors::{StoreError, StoreResult};
pub use store::AnimalStore;
