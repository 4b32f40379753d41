//! Route tables and the assembled application router.

pub mod common;
mod users;

pub use common::common_routes;
pub use users::user_routes;

use crate::middleware::{request_span, MakeRequestUuid};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Full application: common and user routes behind the request id, trace and body limit layers.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(user_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
