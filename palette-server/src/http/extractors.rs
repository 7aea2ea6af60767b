//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use super::error::ApiError;

/// Loosely parsed JSON request body.
///
/// Non-JSON content types and blank bodies read as `{}`, leaving required
/// field checks to report what is missing. Broken JSON and top-level
/// values other than objects or arrays are rejected here.
pub struct JsonBody(pub Value);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(&req);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody {
                message: e.body_text(),
            })?;

        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Map::new())));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedBody {
            message: e.to_string(),
        })?;

        match value {
            Value::Object(_) | Value::Array(_) => Ok(Self(value)),
            other => Err(ApiError::MalformedBody {
                message: format!("request body must be a JSON object or array, got {}", other),
            }),
        }
    }
}
