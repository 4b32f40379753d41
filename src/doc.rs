//! OpenAPI description of the HTTP surface.

use crate::error::{FieldError, ValidationBody};
use crate::models::{User, UserPayload};
use crate::response::{DetailBody, HealthBody, ReadyBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "KubSU API", description = "CRUD"),
    paths(
        crate::routes::common::root,
        crate::routes::common::health,
        crate::routes::common::ready,
        crate::handlers::users::create_user,
        crate::handlers::users::list_users,
        crate::handlers::users::read_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
    ),
    components(schemas(User, UserPayload, DetailBody, ValidationBody, FieldError, HealthBody, ReadyBody)),
    tags(
        (name = "users", description = "User CRUD"),
        (name = "meta", description = "Service information"),
    )
)]
pub struct ApiDoc;
