//! MongoDB backend: collections `todo_list` and `todo_item`.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

use crate::config::DbSettings;
use crate::error::AppError;
use crate::model::{format_due_date, ItemChanges, TodoItem, TodoList};
use crate::store::{new_id, TodoStore};

pub struct MongoTodoStore {
    lists: Collection<TodoList>,
    items: Collection<TodoItem>,
}

impl MongoTodoStore {
    pub async fn connect(settings: &DbSettings) -> Result<Self, AppError> {
        let client = Client::with_uri_str(settings.uri()).await?;
        let db = client.database(&settings.db);
        Ok(Self {
            lists: db.collection("todo_list"),
            items: db.collection("todo_item"),
        })
    }
}

fn changes_to_set(changes: &ItemChanges) -> Document {
    let mut set = Document::new();
    if let Some(text) = &changes.text {
        set.insert("text", text.as_str());
    }
    if let Some(due_date) = &changes.due_date {
        set.insert("due_date", format_due_date(due_date));
    }
    if let Some(status) = changes.status {
        set.insert("status", status);
    }
    set
}

#[async_trait]
impl TodoStore for MongoTodoStore {
    async fn insert_list(&self, name: &str) -> Result<TodoList, AppError> {
        let list = TodoList {
            id: new_id(),
            name: name.to_string(),
        };
        self.lists.insert_one(&list).await?;
        Ok(list)
    }

    async fn all_lists(&self) -> Result<Vec<TodoList>, AppError> {
        let cursor = self.lists.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn lists_named(&self, name: &str) -> Result<Vec<TodoList>, AppError> {
        let cursor = self.lists.find(doc! { "name": name }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn rename_lists(&self, name: &str, new_name: &str) -> Result<u64, AppError> {
        let result = self
            .lists
            .update_many(doc! { "name": name }, doc! { "$set": { "name": new_name } })
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_lists(&self, name: &str) -> Result<u64, AppError> {
        let matching = self.lists_named(name).await?;
        let ids: Vec<&str> = matching.iter().map(|l| l.id.as_str()).collect();
        if !ids.is_empty() {
            self.items
                .delete_many(doc! { "todo_list": { "$in": ids } })
                .await?;
        }
        let result = self.lists.delete_many(doc! { "name": name }).await?;
        Ok(result.deleted_count)
    }

    async fn insert_item(&self, item: TodoItem) -> Result<(), AppError> {
        self.items.insert_one(&item).await?;
        Ok(())
    }

    async fn items_in_list(&self, list_id: &str) -> Result<Vec<TodoItem>, AppError> {
        let cursor = self.items.find(doc! { "todo_list": list_id }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn item_named(&self, name: &str) -> Result<Option<TodoItem>, AppError> {
        Ok(self.items.find_one(doc! { "name": name }).await?)
    }

    async fn update_items(&self, name: &str, changes: &ItemChanges) -> Result<u64, AppError> {
        let set = changes_to_set(changes);
        if set.is_empty() {
            // An empty $set is rejected by the server; nothing to apply.
            return Ok(self.items.count_documents(doc! { "name": name }).await?);
        }
        let result = self
            .items
            .update_many(doc! { "name": name }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_items(&self, name: &str) -> Result<u64, AppError> {
        let result = self.items.delete_many(doc! { "name": name }).await?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_due_date;

    #[test]
    fn changes_to_set_keeps_only_provided_fields() {
        let set = changes_to_set(&ItemChanges {
            status: Some(true),
            ..Default::default()
        });
        assert_eq!(set, doc! { "status": true });
    }

    #[test]
    fn changes_to_set_formats_dates_for_the_wire() {
        let set = changes_to_set(&ItemChanges {
            due_date: Some(parse_due_date("30/03/2020").unwrap()),
            ..Default::default()
        });
        assert_eq!(set, doc! { "due_date": "30/03/2020" });
    }
}
