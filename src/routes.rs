//! Router assembly: todo resource routes plus common operational routes.

use axum::{routing::get, routing::post, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::handlers::item::{
    create_item, delete_item, get_item, list_items, patch_item, replace_item,
};
use crate::handlers::list::{create_list, delete_list, get_list, list_lists, update_list};
use crate::state::AppState;

pub const ROUTE_PREFIX: &str = "/api/v1/todo";

/// Todo resource routes, mounted under [`ROUTE_PREFIX`].
pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/list", post(create_list).get(list_lists))
        .route(
            "/list/:name",
            get(get_list)
                .put(update_list)
                .patch(update_list)
                .delete(delete_list),
        )
        .route("/item/:list_name", post(create_item).get(list_items))
        .route(
            "/item/:list_name/:item_name",
            get(get_item)
                .put(replace_item)
                .patch(patch_item)
                .delete(delete_item),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes (no state): GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// The full application: common routes, todo routes under the API prefix,
/// request tracing on everything.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .nest(ROUTE_PREFIX, todo_routes(state))
        .layer(TraceLayer::new_for_http())
}
