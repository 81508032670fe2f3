//! In-process backend for the `test` environment profile.
//!
//! Behaves like the MongoDB backend observed through the `TodoStore`
//! surface: field-match semantics, insertion order preserved, cascade on
//! list delete.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::AppError;
use crate::model::{ItemChanges, TodoItem, TodoList};
use crate::store::{new_id, TodoStore};

#[derive(Default)]
struct Inner {
    lists: Vec<TodoList>,
    items: Vec<TodoItem>,
}

#[derive(Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn insert_list(&self, name: &str) -> Result<TodoList, AppError> {
        let list = TodoList {
            id: new_id(),
            name: name.to_string(),
        };
        self.inner.write().unwrap().lists.push(list.clone());
        Ok(list)
    }

    async fn all_lists(&self) -> Result<Vec<TodoList>, AppError> {
        Ok(self.inner.read().unwrap().lists.clone())
    }

    async fn lists_named(&self, name: &str) -> Result<Vec<TodoList>, AppError> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .lists
            .iter()
            .filter(|l| l.name == name)
            .cloned()
            .collect())
    }

    async fn rename_lists(&self, name: &str, new_name: &str) -> Result<u64, AppError> {
        let mut inner = self.inner.write().unwrap();
        let mut matched = 0;
        for list in inner.lists.iter_mut().filter(|l| l.name == name) {
            list.name = new_name.to_string();
            matched += 1;
        }
        Ok(matched)
    }

    async fn delete_lists(&self, name: &str) -> Result<u64, AppError> {
        let mut inner = self.inner.write().unwrap();
        let doomed: Vec<String> = inner
            .lists
            .iter()
            .filter(|l| l.name == name)
            .map(|l| l.id.clone())
            .collect();
        inner.items.retain(|i| !doomed.contains(&i.todo_list));
        let before = inner.lists.len();
        inner.lists.retain(|l| l.name != name);
        Ok((before - inner.lists.len()) as u64)
    }

    async fn insert_item(&self, item: TodoItem) -> Result<(), AppError> {
        self.inner.write().unwrap().items.push(item);
        Ok(())
    }

    async fn items_in_list(&self, list_id: &str) -> Result<Vec<TodoItem>, AppError> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .items
            .iter()
            .filter(|i| i.todo_list == list_id)
            .cloned()
            .collect())
    }

    async fn item_named(&self, name: &str) -> Result<Option<TodoItem>, AppError> {
        let inner = self.inner.read().unwrap();
        Ok(inner.items.iter().find(|i| i.name == name).cloned())
    }

    async fn update_items(&self, name: &str, changes: &ItemChanges) -> Result<u64, AppError> {
        let mut inner = self.inner.write().unwrap();
        let mut matched = 0;
        for item in inner.items.iter_mut().filter(|i| i.name == name) {
            if let Some(text) = &changes.text {
                item.text = text.clone();
            }
            if let Some(due_date) = changes.due_date {
                item.due_date = due_date;
            }
            if let Some(status) = changes.status {
                item.status = status;
            }
            matched += 1;
        }
        Ok(matched)
    }

    async fn delete_items(&self, name: &str) -> Result<u64, AppError> {
        let mut inner = self.inner.write().unwrap();
        let before = inner.items.len();
        inner.items.retain(|i| i.name != name);
        Ok((before - inner.items.len()) as u64)
    }
}
