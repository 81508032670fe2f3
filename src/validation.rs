//! Declarative request validation: per-field rules grouped per operation.

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::model::parse_due_date;

#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Str,
    Date,
    Bool,
}

/// One field's constraints within an operation schema.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: FieldKind,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

const fn string_rule(field: &'static str, min: usize, max: usize) -> FieldRule {
    FieldRule {
        field,
        kind: FieldKind::Str,
        min_length: Some(min),
        max_length: Some(max),
    }
}

/// `POST /list` body: just the list name.
pub const LIST_CREATE: &[FieldRule] = &[string_rule("name", 3, 200)];

/// `POST /item/{list}` body: every field of a new item.
pub const ITEM_CREATE: &[FieldRule] = &[
    string_rule("name", 3, 200),
    string_rule("text", 3, 500),
    FieldRule {
        field: "due_date",
        kind: FieldKind::Date,
        min_length: None,
        max_length: None,
    },
    FieldRule {
        field: "status",
        kind: FieldKind::Bool,
        min_length: None,
        max_length: None,
    },
];

/// `PUT /item/{list}/{item}` body: full replacement, name excluded.
/// PATCH validates the same rules partially.
pub const ITEM_PUT: &[FieldRule] = &[
    string_rule("text", 3, 500),
    FieldRule {
        field: "due_date",
        kind: FieldKind::Date,
        min_length: None,
        max_length: None,
    },
    FieldRule {
        field: "status",
        kind: FieldKind::Bool,
        min_length: None,
        max_length: None,
    },
];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against the rules. Every ruled field must be present.
    pub fn validate(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), AppError> {
        for rule in rules {
            match body.get(rule.field) {
                None | Some(Value::Null) => {
                    return Err(AppError::Validation(format!("{} is required", rule.field)))
                }
                Some(v) => validate_field(rule, v)?,
            }
        }
        Ok(())
    }

    /// Validate only the ruled fields present in body (for PATCH).
    pub fn validate_partial(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), AppError> {
        for rule in rules {
            if let Some(v) = body.get(rule.field) {
                if !v.is_null() {
                    validate_field(rule, v)?;
                }
            }
        }
        Ok(())
    }
}

fn validate_field(rule: &FieldRule, v: &Value) -> Result<(), AppError> {
    match rule.kind {
        FieldKind::Str => {
            let s = v
                .as_str()
                .ok_or_else(|| AppError::Validation(format!("{} must be a string", rule.field)))?;
            if let Some(min) = rule.min_length {
                if s.len() < min {
                    return Err(AppError::Validation(format!(
                        "{} must be at least {} characters",
                        rule.field, min
                    )));
                }
            }
            if let Some(max) = rule.max_length {
                if s.len() > max {
                    return Err(AppError::Validation(format!(
                        "{} must be at most {} characters",
                        rule.field, max
                    )));
                }
            }
        }
        FieldKind::Date => {
            let s = v
                .as_str()
                .ok_or_else(|| AppError::Validation(format!("{} must be a string", rule.field)))?;
            let re = Regex::new(r"^\d{2}/\d{2}/\d{4}$")
                .map_err(|_| AppError::Validation(format!("invalid pattern for {}", rule.field)))?;
            if !re.is_match(s) {
                return Err(AppError::Validation(format!(
                    "{} must match DD/MM/YYYY",
                    rule.field
                )));
            }
            parse_due_date(s)?;
        }
        FieldKind::Bool => {
            if !v.is_boolean() {
                return Err(AppError::Validation(format!(
                    "{} must be a boolean",
                    rule.field
                )));
            }
        }
    }
    Ok(())
}
