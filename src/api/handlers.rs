//! Generic request handlers, one set for all entity kinds

use super::AppState;
use crate::core::Entity;
use crate::error::{Result, TicketDeskError};
use crate::storage::DocumentRepository;
use crate::validation::{FieldMap, Violation};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

/// `GET /{collection}` — the full collection in storage order
pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<Json<Vec<E>>> {
    let repo = DocumentRepository::<E>::new(state.storage());
    Ok(Json(repo.list()?))
}

/// `POST /{collection}` — validate, assign an id, persist
pub async fn create<E: Entity>(
    State(state): State<AppState>,
    Json(fields): Json<FieldMap>,
) -> Result<(StatusCode, Json<E>)> {
    let repo = DocumentRepository::<E>::new(state.storage());
    let entity = repo.create(fields)?;
    Ok((StatusCode::CREATED, Json(entity)))
}

/// `PUT /{collection}/{id}` — partial merge over the stored entity
pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<FieldMap>,
) -> Result<Json<E>> {
    let id = parse_id::<E>(&id)?;
    let repo = DocumentRepository::<E>::new(state.storage());
    Ok(Json(repo.update(id, fields)?))
}

/// `DELETE /{collection}/{id}` — remove and return the deleted entity
pub async fn remove<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<E>> {
    let id = parse_id::<E>(&id)?;
    let repo = DocumentRepository::<E>::new(state.storage());
    Ok(Json(repo.delete(id)?))
}

/// Parse the id path parameter; a non-integer id is a validation failure,
/// not a routing miss
fn parse_id<E: Entity>(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| {
        TicketDeskError::validation(vec![Violation::new(
            E::KIND.id_param(),
            format!("{} ID must be an integer", E::KIND),
        )])
    })
}
