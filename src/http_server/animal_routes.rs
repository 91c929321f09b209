//! Animal HTTP Routes
//!
//! - `GET  /animals`      filtered listing
//! - `GET  /animals/:id`  single record
//! - `POST /animals`      validated creation
//!
//! Mounted under `/api` by the server.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::query::AnimalQuery;
use crate::record::AnimalRecord;
use crate::storage::RecordPersistence;
use crate::store::AnimalStore;

// ==================
// Shared State
// ==================

/// Store shared across handlers.
///
/// Reads take the read lock; creation holds the write lock for the whole
/// mutation path, mirror rewrite included.
pub struct AnimalState<P: RecordPersistence> {
    store: RwLock<AnimalStore<P>>,
}

impl<P: RecordPersistence> AnimalState<P> {
    pub fn new(store: AnimalStore<P>) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    pub fn read(&self) -> ApiResult<RwLockReadGuard<'_, AnimalStore<P>>> {
        self.store
            .read()
            .map_err(|e| ApiError::Internal(format!("store lock poisoned: {}", e)))
    }

    pub fn write(&self) -> ApiResult<RwLockWriteGuard<'_, AnimalStore<P>>> {
        self.store
            .write()
            .map_err(|e| ApiError::Internal(format!("store lock poisoned: {}", e)))
    }
}

// ==================
// Animal Routes
// ==================

/// Create animal routes
pub fn animal_routes<P: RecordPersistence + 'static>(state: Arc<AnimalState<P>>) -> Router {
    Router::new()
        .route("/animals", get(list_animals_handler::<P>).post(create_animal_handler::<P>))
        .route("/animals/:id", get(get_animal_handler::<P>))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_animals_handler<P: RecordPersistence + 'static>(
    State(state): State<Arc<AnimalState<P>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<AnimalRecord>>> {
    let query = AnimalQuery::from_pairs(&pairs);
    let store = state.read()?;

    let results = store.filter(&query).into_iter().cloned().collect();
    Ok(Json(results))
}

async fn get_animal_handler<P: RecordPersistence + 'static>(
    State(state): State<Arc<AnimalState<P>>>,
    Path(id): Path<String>,
) -> ApiResult<Json<AnimalRecord>> {
    let store = state.read()?;
    store
        .find_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_animal_handler<P: RecordPersistence + 'static>(
    State(state): State<Arc<AnimalState<P>>>,
    body: Bytes,
) -> ApiResult<Json<AnimalRecord>> {
    let candidate = parse_candidate(&body)?;
    tracing::debug!(body = %candidate, "create animal request");

    let mut store = state.write()?;
    let record = store.create(candidate)?;
    Ok(Json(record))
}

/// An empty body is an empty object, which then fails validation.
fn parse_candidate(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(parse_candidate(b"").unwrap(), json!({}));
        assert_eq!(parse_candidate(b"  \n").unwrap(), json!({}));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            parse_candidate(b"{name"),
            Err(ApiError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_json_body() {
        assert_eq!(
            parse_candidate(br#"{"name":"Boo"}"#).unwrap(),
            json!({"name": "Boo"})
        );
    }
}
