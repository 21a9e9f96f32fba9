// CORS configuration
// Applied to the whole router in routes::create_router

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn apply_cors(router: Router) -> Router {
    // Credentialed requests cannot be combined with the `*` wildcard, so the
    // caller's origin is mirrored back to admit every host.
    router.layer(
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_credentials(true)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::HEAD,
                Method::OPTIONS,
                Method::PATCH,
            ])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
