//! API error types with IntoResponse
//!
//! Every failure becomes `{ "error": ... }` with a status code. Database
//! errors carry the driver's error object rather than a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing or body doesn't fit the schema (422)
    Validation(ValidationError),

    /// No row matched the path id (404)
    NotFound { resource: &'static str, id: String },

    /// Body is not valid JSON (400)
    MalformedBody { message: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Driver error rendered as a JSON object.
fn error_object(err: &DbError) -> Value {
    match err {
        DbError::Sqlx(sqlx::Error::Database(db)) => json!({
            "message": db.message(),
            "code": db.code(),
            "constraint": db.constraint(),
            "table": db.table(),
        }),
        DbError::Sqlx(other) => json!({ "message": other.to_string() }),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            Self::Validation(e) => Value::String(e.to_string()),
            Self::NotFound { resource, id } => {
                Value::String(format!("Could not find {} with id {}", resource, id))
            }
            Self::MalformedBody { message } => Value::String(message.clone()),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                error_object(e)
            }
        };

        (status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
