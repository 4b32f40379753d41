//! Extractors that validate user requests before the handler runs.

use crate::error::AppError;
use crate::models::UserPayload;
use crate::service::{Pagination, RequestValidator};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header, request::Parts},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

/// `{user_id}` path segment parsed as an integer.
#[derive(Clone, Copy, Debug)]
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid(&["path", "user_id"], e.body_text(), "path_invalid"))?;
        Ok(UserId(RequestValidator::user_id(&raw)?))
    }
}

/// `skip` / `limit` query parameters, defaulted and clamped.
#[derive(Clone, Copy, Debug)]
pub struct Page(pub Pagination);

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid(&["query"], e.body_text(), "query_invalid"))?;
        Ok(Page(RequestValidator::pagination(&params)?))
    }
}

/// JSON body checked against the user payload shape.
///
/// A body without `Content-Type` is still parsed as JSON; any other non-JSON
/// content type is rejected.
#[derive(Clone, Debug)]
pub struct ValidUser(pub UserPayload);

#[async_trait]
impl<S> FromRequest<S> for ValidUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(body) = Json::<Value>::from_request(req, state).await?;
            body
        } else {
            let bytes = Bytes::from_request(req, state).await?;
            serde_json::from_slice::<Value>(&bytes)
                .map_err(|e| AppError::invalid(&["body"], format!("JSON decode error: {e}"), "json_invalid"))?
        };
        Ok(ValidUser(RequestValidator::user_payload(&body)?))
    }
}
