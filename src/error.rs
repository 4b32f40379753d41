//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::response::DetailBody;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },
    #[error("unsupported database url: {0}")]
    UnsupportedDatabase(String),
}

/// One failed check on a request field. `loc` names the source (`body`, `path`, `query`) then the field.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        FieldError {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ValidationBody {
    pub detail: Vec<FieldError>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("validation failed: {0:?}")]
    Validation(Vec<FieldError>),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub const USER_NOT_FOUND: AppError = AppError::NotFound("User not found");

    pub fn invalid(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        AppError::Validation(vec![FieldError::new(loc, msg, kind)])
    }

    /// Merge the field errors of several rejected extractors into one 422.
    /// Any non-validation error wins, since it is not a per-field report.
    pub fn combine(errors: impl IntoIterator<Item = AppError>) -> AppError {
        let mut fields = Vec::new();
        for err in errors {
            match err {
                AppError::Validation(f) => fields.extend(f),
                other => return other,
            }
        }
        AppError::Validation(fields)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::invalid(&["body"], rejection.body_text(), "json_invalid")
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::invalid(&["body"], rejection.body_text(), "json_invalid")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(DetailBody::new(msg))).into_response()
            }
            AppError::Validation(detail) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ValidationBody { detail })).into_response()
            }
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(DetailBody::new("Request body too large")),
            )
                .into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(DetailBody::new("Internal Server Error")),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_uses_detail_string() {
        let resp = AppError::USER_NOT_FOUND.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await, json!({"detail": "User not found"}));
    }

    #[tokio::test]
    async fn validation_lists_field_errors() {
        let resp = AppError::invalid(&["body", "name"], "Field required", "missing").into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(resp).await,
            json!({"detail": [{"loc": ["body", "name"], "msg": "Field required", "type": "missing"}]})
        );
    }

    #[test]
    fn combine_keeps_every_field_error() {
        let merged = AppError::combine([
            AppError::invalid(&["path", "user_id"], "bad id", "int_parsing"),
            AppError::invalid(&["body", "name"], "Field required", "missing"),
        ]);
        match merged {
            AppError::Validation(fields) => {
                let locs: Vec<_> = fields.iter().map(|f| f.loc.join(".")).collect();
                assert_eq!(locs, vec!["path.user_id", "body.name"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn combine_prefers_non_field_errors() {
        let merged = AppError::combine([
            AppError::invalid(&["path", "user_id"], "bad id", "int_parsing"),
            AppError::PayloadTooLarge,
        ]);
        assert!(matches!(merged, AppError::PayloadTooLarge));
    }

    #[tokio::test]
    async fn database_errors_hide_internals() {
        let resp = AppError::Db(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await, json!({"detail": "Internal Server Error"}));
    }
}
