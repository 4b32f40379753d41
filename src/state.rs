//! Shared application state for all routes. Built once at startup.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}

impl AppState {
    pub fn new(pool: AnyPool) -> Self {
        AppState { pool }
    }
}
