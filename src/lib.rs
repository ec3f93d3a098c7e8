//! ticket-desk - a small REST backend over a single JSON document
//!
//! This crate serves CRUD for three related collections — teams, users, and
//! tickets — persisted together as one JSON file. The interesting part is the
//! shared validation-and-mutation pipeline: every mutating request loads the
//! whole document, validates the candidate fields against a static schema and
//! the document's cross-collection uniqueness rules, applies a full or partial
//! write, and persists the document back.
//!
//! # Concurrency
//!
//! There is deliberately no locking: each operation is an unguarded
//! read-modify-write of the backing file, and the deployment assumption is a
//! single process handling one request at a time. See the `storage` module
//! docs for the lost-update consequences of breaking that assumption.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticket_desk::api::{self, AppState};
//! use ticket_desk::storage::FileStorage;
//!
//! let storage = FileStorage::new("data.json");
//! storage.ensure_document()?;
//! let app = api::router(AppState::new(storage));
//! // hand `app` to axum::serve
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod validation;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
