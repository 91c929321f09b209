//! Validator subsystem for animaldb
//!
//! Candidate records are checked structurally before they may enter the store.
//! Validation is pure and deterministic; it never mutates the candidate.

mod errors;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, ValidationDetails};
pub use validator::{is_valid_animal, validate_animal};
