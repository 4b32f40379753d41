//! Request validation: payload shape, path id, and pagination query.

use crate::error::{AppError, FieldError};
use crate::models::UserPayload;
use serde_json::Value;
use std::collections::HashMap;

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

const INT_PARSING: &str = "Input should be a valid integer, unable to parse string as an integer";

/// Offset/limit after clamping: `skip >= 0`, `0 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn clamped(skip: i64, limit: i64) -> Self {
        Pagination {
            skip: skip.max(0),
            limit: limit.clamp(0, MAX_LIMIT),
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Body must be an object with a string `name`. Extra keys are ignored.
    pub fn user_payload(body: &Value) -> Result<UserPayload, AppError> {
        let obj = body.as_object().ok_or_else(|| {
            AppError::invalid(&["body"], "Input should be a valid dictionary or object", "model_attributes_type")
        })?;
        match obj.get("name") {
            None => Err(AppError::invalid(&["body", "name"], "Field required", "missing")),
            Some(Value::String(name)) => Ok(UserPayload { name: name.clone() }),
            Some(_) => Err(AppError::invalid(&["body", "name"], "Input should be a valid string", "string_type")),
        }
    }

    pub fn user_id(raw: &str) -> Result<i64, AppError> {
        raw.trim()
            .parse()
            .map_err(|_| AppError::invalid(&["path", "user_id"], INT_PARSING, "int_parsing"))
    }

    /// Missing keys take their defaults; every unparseable key is reported, not just the first.
    pub fn pagination(params: &HashMap<String, String>) -> Result<Pagination, AppError> {
        let mut errors = Vec::new();
        let mut int_param = |key: &str, default: i64| match params.get(key) {
            None => default,
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|_| {
                errors.push(FieldError::new(&["query", key], INT_PARSING, "int_parsing"));
                default
            }),
        };
        let skip = int_param("skip", DEFAULT_SKIP);
        let limit = int_param("limit", DEFAULT_LIMIT);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(Pagination::clamped(skip, limit))
    }
}
