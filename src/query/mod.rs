//! # Query Module
//!
//! Read-side operations over the record sequence: multi-criterion filtering
//! and lookup by identifier. Both are pure and never mutate their input.

pub mod filter;
pub mod parser;

pub use filter::{filter_by_query, find_by_id};
pub use parser::AnimalQuery;
