//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `POST /payment` - payment deep link generation
//! - `GET /health` - liveness probe

pub mod health;
pub mod payment;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::middleware;

/// Create the main application router
///
/// Handler routes are merged first; CORS, panic recovery and (when enabled)
/// the HTTPS redirect wrap them, so the redirect is the first thing an
/// incoming request meets.
pub fn create_router(config: &Config) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(payment::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http());

    let router = middleware::apply_cors(router);
    let router = middleware::apply_catch_panic(router);

    if config.server.https_redirect {
        middleware::apply_https_redirect(router, config.server.ssl_port)
    } else {
        router
    }
}
