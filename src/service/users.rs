//! User CRUD statements. Each operation is a single statement on the session's connection.

use crate::error::AppError;
use crate::models::User;
use crate::service::Pagination;
use sqlx::AnyConnection;

const INSERT: &str = "INSERT INTO users (name) VALUES ($1) RETURNING id, name";
const SELECT_PAGE: &str = "SELECT id, name FROM users ORDER BY id ASC LIMIT $1 OFFSET $2";
const SELECT_BY_ID: &str = "SELECT id, name FROM users WHERE id = $1";
const UPDATE_NAME: &str = "UPDATE users SET name = $1 WHERE id = $2 RETURNING id, name";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = $1 RETURNING id";

pub struct UserService;

impl UserService {
    /// Insert one row; the id is assigned by the database.
    pub async fn create(conn: &mut AnyConnection, name: &str) -> Result<User, AppError> {
        tracing::debug!(sql = INSERT, "query");
        let user = sqlx::query_as::<_, User>(INSERT)
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;
        Ok(user)
    }

    /// Rows ordered by ascending id, so offset pages never overlap.
    pub async fn list(conn: &mut AnyConnection, page: Pagination) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = SELECT_PAGE, skip = page.skip, limit = page.limit, "query");
        let users = sqlx::query_as::<_, User>(SELECT_PAGE)
            .bind(page.limit)
            .bind(page.skip)
            .fetch_all(&mut *conn)
            .await?;
        Ok(users)
    }

    pub async fn read(conn: &mut AnyConnection, id: i64) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = SELECT_BY_ID, id, "query");
        let user = sqlx::query_as::<_, User>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    /// Set `name` on an existing row. Returns None when no row has this id.
    pub async fn update(conn: &mut AnyConnection, id: i64, name: &str) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = UPDATE_NAME, id, "query");
        let user = sqlx::query_as::<_, User>(UPDATE_NAME)
            .bind(name)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    /// Returns false when no row has this id.
    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = DELETE_BY_ID, id, "query");
        let deleted: Option<i64> = sqlx::query_scalar(DELETE_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(deleted.is_some())
    }
}
