//! HTTP surface
//!
//! Thin transport layer over the repositories: one generic handler set,
//! instantiated per entity kind, with a sub-router nested per resource. All
//! domain decisions (validation, id assignment, merge semantics) live below
//! this layer; this layer only decodes bodies and maps errors to responses.

mod error;
mod handlers;

use crate::core::{Entity, Team, Ticket, User};
use crate::storage::FileStorage;
use axum::Router;
use axum::routing::{get, put};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state: the document store behind all resources
#[derive(Debug, Clone)]
pub struct AppState {
    storage: Arc<FileStorage>,
}

impl AppState {
    /// Wrap a store for sharing across handlers
    #[must_use]
    pub fn new(storage: FileStorage) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub(crate) fn storage(&self) -> &FileStorage {
        &self.storage
    }
}

/// Build the application router
///
/// `GET`/`POST` on each collection, `PUT`/`DELETE` on `/{collection}/{id}`.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/teams", resource::<Team>())
        .nest("/users", resource::<User>())
        .nest("/tickets", resource::<Ticket>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn resource<E: Entity>() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list::<E>).post(handlers::create::<E>))
        .route("/:id", put(handlers::update::<E>).delete(handlers::remove::<E>))
}
