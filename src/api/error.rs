//! Error-to-response mapping at the API boundary
//!
//! Validation failures carry the full violation list as
//! `{ "errors": [{ "field", "message" }, ...] }`; not-found and storage
//! failures carry `{ "message": "..." }`. This is the only place status
//! codes are decided.

use crate::error::TicketDeskError;
use crate::validation::Violation;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<Violation>,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

impl IntoResponse for TicketDeskError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { violations } => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody { errors: violations }),
            )
                .into_response(),
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    message: self.to_string(),
                }),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: other.to_string(),
                    }),
                )
                    .into_response()
            },
        }
    }
}
