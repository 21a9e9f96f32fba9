use axum::{Router, routing::post, Json, extract::rejection::JsonRejection};
use tracing::info;

use crate::link;
use crate::models::{PaymentRequest, PaymentResponse};
use crate::types::{AppError, AppResult};

pub fn router() -> Router {
    Router::new()
        .route("/payment", post(post_payment))
}

/// POST /payment - resolve a payment id plus client platform into a deep link.
///
/// The extractor result is taken as a `Result` so that undecodable bodies
/// surface as the API's own error shape rather than axum's plaintext reply.
async fn post_payment(
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> AppResult<Json<PaymentResponse>> {
    let Json(request) =
        payload.map_err(|rejection| AppError::MalformedRequest(rejection.body_text()))?;

    info!(
        "Received payment link request for deviceOS: {} (webview: {})",
        request.device_os, request.webview
    );

    let response = link::handle(&request)?;

    info!("Payment link generated: {}", response.link);

    Ok(Json(response))
}
