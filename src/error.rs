//! Typed errors and HTTP mapping.

use crate::response::ServiceResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Row lookup by id failed. The message is the full user-facing sentence,
    /// e.g. `Character with Id '42' not found.`
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Standard not-found message for a kind and id.
    pub fn not_found(kind: &str, id: i32) -> Self {
        AppError::NotFound(format!("{} with Id '{}' not found.", kind, id))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ServiceResponse::<()>::fail(self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_embeds_kind_and_id() {
        let err = AppError::not_found("Character", 999);
        assert_eq!(err.to_string(), "Character with Id '999' not found.");
    }
}
