//! To-do list CRUD REST API backed by MongoDB.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{AppConfig, Env};
pub use error::AppError;
pub use routes::{app, common_routes, todo_routes, ROUTE_PREFIX};
pub use state::AppState;
pub use store::{MemoryTodoStore, MongoTodoStore, TodoStore};
