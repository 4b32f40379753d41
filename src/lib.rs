//! KubSU API: CRUD REST service for users over PostgreSQL or SQLite.

pub mod config;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Backend, ServiceConfig};
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use models::{User, UserPayload};
pub use routes::{app, common_routes, user_routes};
pub use service::{Pagination, UserService};
pub use state::AppState;
pub use store::{connect, connect_lazy, Session};
