//! HTTP route handlers.
//!
//! Two fixed JSON routes plus JSON fallbacks for unmatched paths and
//! unsupported methods. Handler panics are rendered as a JSON 500. Request
//! tracing is enabled via middleware that generates a unique request ID for
//! each incoming request.

pub mod health;
pub mod root;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::error::{panic_response, AppError};
use crate::middleware::request_id_layer;

/// Fallback for paths that match no route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    let routes = Router::new()
        .route("/", get(root::index))
        .merge(health_routes);

    with_service_layers(routes)
}

/// Add the JSON fallbacks and the middleware stack shared by every route.
fn with_service_layers(routes: Router) -> Router {
    routes
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        // Handler panics become a 500 inside the request span
        .layer(CatchPanicLayer::custom(panic_response))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("handler failure")
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_json_500() {
        let app = with_service_layers(Router::new().route("/explode", get(explode)));

        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().contains_key("x-request-id"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"detail":"Internal Server Error"}"#);
    }
}
