//! To-do item handlers.
//!
//! Item lookups key on the item name alone; the `{list_name}` path segment
//! carries message context but is not part of the match. Item names
//! therefore behave as a global key across lists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::handlers::body_to_map;
use crate::model::{parse_due_date, ItemChanges, TodoItem};
use crate::response::success_body;
use crate::state::AppState;
use crate::store;
use crate::validation::{RequestValidator, ITEM_CREATE, ITEM_PUT};

pub async fn create_item(
    State(state): State<AppState>,
    Path(list_name): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let list = state
        .store
        .lists_named(&list_name)
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::Abort(StatusCode::BAD_REQUEST))?;

    let body = body_to_map(body)?;
    RequestValidator::validate(&body, ITEM_CREATE)?;

    let name = body
        .get("name")
        .and_then(Value::as_str)
        .ok_or(AppError::BadPayload)?;
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .ok_or(AppError::BadPayload)?;
    let due_date = body
        .get("due_date")
        .and_then(Value::as_str)
        .ok_or(AppError::BadPayload)?;
    let status = body
        .get("status")
        .and_then(Value::as_bool)
        .ok_or(AppError::BadPayload)?;

    let item = TodoItem {
        id: store::new_id(),
        name: name.to_string(),
        text: text.to_string(),
        due_date: parse_due_date(due_date)?,
        status,
        todo_list: list.id,
    };
    state.store.insert_item(item).await?;
    tracing::debug!(item = name, list = %list_name, "created todo item");
    Ok((
        StatusCode::CREATED,
        Json(success_body(format!(
            "item={text} in list={list_name} created successfully"
        ))),
    ))
}

pub async fn list_items(
    State(state): State<AppState>,
    Path(list_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let list = state
        .store
        .lists_named(&list_name)
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::Abort(StatusCode::BAD_REQUEST))?;

    let items = state.store.items_in_list(&list.id).await?;
    let body: Vec<Value> = items.iter().map(TodoItem::public_json).collect();
    Ok((StatusCode::OK, Json(Value::Array(body))))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path((_list_name, item_name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let fields = state
        .store
        .item_named(&item_name)
        .await?
        .map(|item| item.public_json())
        .unwrap_or_else(|| json!({}));
    Ok((StatusCode::OK, Json(json!({ item_name: fields }))))
}

pub async fn replace_item(
    State(state): State<AppState>,
    Path((list_name, item_name)): Path<(String, String)>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    RequestValidator::validate(&body, ITEM_PUT)?;

    let changes = changes_from(&body)?;
    apply_item_changes(&state, &list_name, &item_name, &changes).await
}

pub async fn patch_item(
    State(state): State<AppState>,
    Path((list_name, item_name)): Path<(String, String)>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    RequestValidator::validate_partial(&body, ITEM_PUT)?;

    // Only the schema fields are applied; `name` and unknown keys in a
    // PATCH body are ignored.
    let changes = changes_from(&body)?;
    apply_item_changes(&state, &list_name, &item_name, &changes).await
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path((list_name, item_name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.store.delete_items(&item_name).await?;
    if deleted == 0 {
        return Err(AppError::Missing(format!(
            "{item_name} does not exist in {list_name}"
        )));
    }
    tracing::debug!(item = %item_name, list = %list_name, "deleted todo item");
    Ok((
        StatusCode::OK,
        Json(success_body(format!("{item_name} deleted from {list_name}"))),
    ))
}

/// Collect the update fields present in a validated body.
fn changes_from(body: &serde_json::Map<String, Value>) -> Result<ItemChanges, AppError> {
    let due_date = match body.get("due_date").and_then(Value::as_str) {
        Some(s) => Some(parse_due_date(s)?),
        None => None,
    };
    Ok(ItemChanges {
        text: body.get("text").and_then(Value::as_str).map(str::to_string),
        due_date,
        status: body.get("status").and_then(Value::as_bool),
    })
}

async fn apply_item_changes(
    state: &AppState,
    list_name: &str,
    item_name: &str,
    changes: &ItemChanges,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let matched = state.store.update_items(item_name, changes).await?;
    if matched == 0 {
        return Err(AppError::Missing(format!(
            "{item_name} does not exist in {list_name}"
        )));
    }
    tracing::debug!(item = %item_name, "updated todo item");
    Ok((
        StatusCode::OK,
        Json(success_body(format!(
            "todo_item={item_name} successfully updated"
        ))),
    ))
}
