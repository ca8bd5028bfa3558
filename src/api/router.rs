use super::handlers::handle_get_index;
use super::logging::log_request;
use super::types::{SearchSettings, ENDPOINT_INDEX};
use crate::indices::Indices;
use axum::routing::get;
use axum::{middleware, Extension, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Builds the HTTP router around a loaded store.
///
/// Layers, outermost first: request id assignment and propagation, request
/// logging, panic catching.
pub fn build_router(indices: Arc<dyn Indices>, settings: SearchSettings) -> Router {
    Router::new()
        .route(ENDPOINT_INDEX, get(handle_get_index))
        .layer(Extension(indices))
        .layer(Extension(settings))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
