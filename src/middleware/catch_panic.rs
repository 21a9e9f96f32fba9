// Panic recovery
//
// A panicking handler becomes the structured 500 body instead of a torn
// connection. The response is assembled by hand because the recovery hook
// runs outside the usual response pipeline.

use std::any::Any;

use axum::http::{Response, StatusCode};
use axum::Router;
use bytes::Bytes;
use http_body_util::Full;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::models::ErrorResponse;

pub fn apply_catch_panic(router: Router) -> Router {
    router.layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "non-string panic payload".to_string()
    };
    error!(panic = %detail, "Handler panicked");

    let body = ErrorResponse {
        error: "Something went wrong".to_string(),
        code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
    };
    let bytes = serde_json::to_vec(&body)
        .unwrap_or_else(|_| br#"{"error":"Something went wrong","code":500}"#.to_vec());

    let mut response = Response::new(Full::new(Bytes::from(bytes)));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    if let Ok(content_type) = "application/json".parse() {
        response.headers_mut().insert("content-type", content_type);
    }
    response
}
