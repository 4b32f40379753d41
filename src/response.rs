//! Shared response bodies.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"detail": "..."}`: used for not-found errors and delete confirmations.
#[derive(Serialize, ToSchema, Debug)]
pub struct DetailBody {
    pub detail: String,
}

impl DetailBody {
    pub fn new(detail: impl Into<String>) -> Self {
        DetailBody { detail: detail.into() }
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthBody {
    pub status: String,
    pub service: String,
    pub version: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyBody {
    pub status: String,
    pub database: String,
}
