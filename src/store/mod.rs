//! Document-store surface the handlers depend on.
//!
//! Every operation is keyed by field matches, mirroring how the handlers
//! address records: lists by `name`, items by `name` or by the owning
//! list's id. The production backend is MongoDB; the `test` profile swaps
//! in an in-process store so the suite runs without a server.

mod memory;
mod mongo;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{AppConfig, Env};
use crate::error::AppError;
use crate::model::{ItemChanges, TodoItem, TodoList};

pub use memory::MemoryTodoStore;
pub use mongo::MongoTodoStore;

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn insert_list(&self, name: &str) -> Result<TodoList, AppError>;
    async fn all_lists(&self) -> Result<Vec<TodoList>, AppError>;
    async fn lists_named(&self, name: &str) -> Result<Vec<TodoList>, AppError>;
    /// Rename every list matching `name`. Returns the match count.
    async fn rename_lists(&self, name: &str, new_name: &str) -> Result<u64, AppError>;
    /// Delete every list matching `name`, cascading to their items.
    /// Returns the number of lists deleted.
    async fn delete_lists(&self, name: &str) -> Result<u64, AppError>;

    async fn insert_item(&self, item: TodoItem) -> Result<(), AppError>;
    async fn items_in_list(&self, list_id: &str) -> Result<Vec<TodoItem>, AppError>;
    async fn item_named(&self, name: &str) -> Result<Option<TodoItem>, AppError>;
    /// Apply `changes` to every item matching `name`. Returns the match count.
    async fn update_items(&self, name: &str, changes: &ItemChanges) -> Result<u64, AppError>;
    /// Delete every item matching `name`. Returns the number deleted.
    async fn delete_items(&self, name: &str) -> Result<u64, AppError>;
}

/// Store-generated record id.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Open the store for the configured environment: in-process for `test`,
/// MongoDB otherwise.
pub async fn connect(config: &AppConfig) -> Result<Arc<dyn TodoStore>, AppError> {
    match config.env {
        Env::Test => Ok(Arc::new(MemoryTodoStore::new())),
        _ => Ok(Arc::new(MongoTodoStore::connect(&config.db).await?)),
    }
}
