//! User CRUD routes. The collection answers with and without the trailing slash.

use crate::handlers::{create_user, delete_user, list_users, read_user, update_user};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:user_id",
            get(read_user).patch(update_user).delete(delete_user),
        )
        .with_state(state)
}
