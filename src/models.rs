//! The `User` row and its request payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /users/` and `PATCH /users/{user_id}`. `name` is the only settable field.
/// Built by `RequestValidator::user_payload`, not deserialized.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserPayload {
    pub name: String,
}
