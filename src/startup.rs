use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::app::index;

/// Builds the application router without binding a socket, so tests can
/// drive it in-process with `tower::ServiceExt::oneshot`.
pub fn build_router() -> Router {
    Router::new().route("/", get(index)).layer(
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        }),
    )
}
