//! To-do list handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::handlers::body_to_map;
use crate::model::TodoList;
use crate::response::success_body;
use crate::state::AppState;
use crate::validation::{RequestValidator, LIST_CREATE};

pub async fn create_list(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    RequestValidator::validate(&body, LIST_CREATE)?;
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .ok_or(AppError::BadPayload)?;

    state.store.insert_list(name).await?;
    tracing::debug!(list = name, "created todo list");
    Ok((
        StatusCode::CREATED,
        Json(success_body(format!("{name} created successfully"))),
    ))
}

pub async fn list_lists(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lists = state.store.all_lists().await?;
    if lists.is_empty() {
        return Err(AppError::NotFound(
            "todo list is empty, create some new".into(),
        ));
    }
    let body: Vec<Value> = lists.iter().map(TodoList::public_json).collect();
    Ok((StatusCode::OK, Json(Value::Array(body))))
}

pub async fn get_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let matches = state.store.lists_named(&name).await?;
    if matches.is_empty() {
        return Err(AppError::NotFound(format!("{name} not found")));
    }
    let body: Vec<Value> = matches.iter().map(TodoList::public_json).collect();
    Ok((StatusCode::OK, Json(Value::Array(body))))
}

pub async fn update_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;

    if state.store.lists_named(&name).await?.is_empty() {
        return Err(AppError::Missing(format!("{name} not found in the todo lists")));
    }

    // Presence of a non-empty new name is all the rename path checks.
    let new_name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("to update a todo list, provide new name".into()))?;

    state.store.rename_lists(&name, new_name).await?;
    tracing::debug!(from = %name, to = new_name, "renamed todo list");
    Ok((
        StatusCode::OK,
        Json(success_body(format!("{name} is updated to {new_name}"))),
    ))
}

pub async fn delete_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.store.delete_lists(&name).await?;
    if deleted == 0 {
        return Err(AppError::Missing(format!("{name} does not exist in todo lists")));
    }
    tracing::debug!(list = %name, deleted, "deleted todo list");
    Ok((
        StatusCode::OK,
        Json(success_body(format!(
            "{name} successfully deleted from todo lists"
        ))),
    ))
}
