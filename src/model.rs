//! Persisted records and their client-facing serialization.
//!
//! Responses are built by the `public_json` functions below, which enumerate
//! the fields a client may see; internal ids and the item-to-list
//! back-reference never leave the process.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppError;

/// Wire format for `due_date`, e.g. `30/03/2020`.
pub const DUE_DATE_FORMAT: &str = "%d/%m/%Y";

/// A named collection of to-do items. `name` is the human-facing key;
/// `id` is the store-generated key items reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoList {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// A single task record owned by one list. `name` doubles as the lookup
/// key on the item routes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub text: String,
    #[serde(with = "due_date_format")]
    pub due_date: NaiveDate,
    pub status: bool,
    pub todo_list: String,
}

/// Field updates applied to an existing item. `None` leaves a field as-is;
/// PUT builds one with every field set, PATCH only the fields provided.
#[derive(Clone, Debug, Default)]
pub struct ItemChanges {
    pub text: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<bool>,
}

impl TodoList {
    pub fn public_json(&self) -> Value {
        json!({ "name": self.name })
    }
}

impl TodoItem {
    pub fn public_json(&self) -> Value {
        json!({
            "name": self.name,
            "text": self.text,
            "due_date": format_due_date(&self.due_date),
            "status": self.status,
        })
    }
}

/// Parse a `DD/MM/YYYY` wire date. The input must be exactly 10 characters;
/// the driver format would otherwise accept unpadded digits.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, AppError> {
    if s.len() != 10 {
        return Err(AppError::Validation(
            "due_date must be a 10 character DD/MM/YYYY date".into(),
        ));
    }
    NaiveDate::parse_from_str(s, DUE_DATE_FORMAT)
        .map_err(|_| AppError::Validation(format!("due_date '{s}' is not a valid DD/MM/YYYY date")))
}

pub fn format_due_date(date: &NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

/// Serde codec keeping `due_date` in its wire format inside the store.
pub mod due_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DUE_DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DUE_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DUE_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
