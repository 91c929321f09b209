//! # animaldb HTTP Server Module
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `GET /api/animals` - Filtered listing
//! - `GET /api/animals/:id` - Lookup by id
//! - `POST /api/animals` - Create a record
//! - everything else - static front-end, when a public directory exists

pub mod animal_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use animal_routes::{animal_routes, AnimalState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ServerError, ServerResult, NOT_PROPERLY_FORMATTED};
pub use server::{build_router, HttpServer};
