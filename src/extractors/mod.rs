//! Request extractors.

mod user;
pub use user::{Page, UserId, ValidUser};
