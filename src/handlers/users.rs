//! User CRUD handlers: create, list, read, update, delete.
//! Input is validated by the extractors; a session is only opened once validation passed.

use crate::error::{AppError, ValidationBody};
use crate::extractors::{Page, UserId, ValidUser};
use crate::models::{User, UserPayload};
use crate::response::DetailBody;
use crate::service::UserService;
use crate::state::AppState;
use crate::store::Session;
use axum::{extract::State, Json};

#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 200, body = User),
        (status = 422, body = ValidationBody),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidUser(payload): ValidUser,
) -> Result<Json<User>, AppError> {
    let mut session = Session::begin(&state.pool).await?;
    let user = UserService::create(session.conn(), &payload.name).await?;
    session.commit().await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip; negative values count as 0"),
        ("limit" = Option<i64>, Query, description = "Rows to return, clamped to 0..=100; default 10"),
    ),
    responses(
        (status = 200, body = [User]),
        (status = 422, body = ValidationBody),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<Json<Vec<User>>, AppError> {
    let mut session = Session::begin(&state.pool).await?;
    let users = UserService::list(session.conn(), page).await?;
    session.commit().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, body = User),
        (status = 404, body = DetailBody),
        (status = 422, body = ValidationBody),
    )
)]
pub async fn read_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, AppError> {
    let mut session = Session::begin(&state.pool).await?;
    let user = UserService::read(session.conn(), id)
        .await?
        .ok_or(AppError::USER_NOT_FOUND)?;
    session.commit().await?;
    Ok(Json(user))
}

#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, body = User),
        (status = 404, body = DetailBody),
        (status = 422, body = ValidationBody),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<UserId, AppError>,
    payload: Result<ValidUser, AppError>,
) -> Result<Json<User>, AppError> {
    // Report a bad id and a bad body together.
    let (UserId(id), ValidUser(payload)) = match (id, payload) {
        (Ok(id), Ok(payload)) => (id, payload),
        (id, payload) => return Err(AppError::combine(id.err().into_iter().chain(payload.err()))),
    };
    let mut session = Session::begin(&state.pool).await?;
    let user = UserService::update(session.conn(), id, &payload.name)
        .await?
        .ok_or(AppError::USER_NOT_FOUND)?;
    session.commit().await?;
    tracing::info!(user_id = id, "user updated");
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, body = DetailBody),
        (status = 404, body = DetailBody),
        (status = 422, body = ValidationBody),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<DetailBody>, AppError> {
    let mut session = Session::begin(&state.pool).await?;
    if !UserService::delete(session.conn(), id).await? {
        return Err(AppError::USER_NOT_FOUND);
    }
    session.commit().await?;
    tracing::info!(user_id = id, "user deleted");
    Ok(Json(DetailBody::new("User deleted")))
}
