//! Resource handlers: one async fn per (resource, method) pair.

pub mod item;
pub mod list;

use axum::Json;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Unwrap the optional JSON body into an object map. A body that is
/// missing or unparseable is the same bad-payload case as a non-object
/// top level.
fn body_to_map(body: Option<Json<Value>>) -> Result<Map<String, Value>, AppError> {
    match body {
        Some(Json(Value::Object(map))) => Ok(map),
        _ => Err(AppError::BadPayload),
    }
}
