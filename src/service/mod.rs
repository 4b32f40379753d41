//! UserService: CRUD statements. RequestValidator: input checks run before any storage access.

mod users;
mod validation;
pub use users::UserService;
pub use validation::{Pagination, RequestValidator, DEFAULT_LIMIT, DEFAULT_SKIP, MAX_LIMIT};
