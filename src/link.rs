//! Payment deep link generation.
//!
//! The core of the service: validates a payment request and maps it onto a
//! platform-specific deep link. Pure and synchronous — every invocation is
//! independent, so concurrent requests need no coordination.

use axum::http::StatusCode;
use uuid::Uuid;

use crate::models::{PaymentRequest, PaymentResponse};
use crate::types::{AppError, AppResult, DeviceOs};

// === Link bases ===
/// Custom scheme that opens the Android banking app.
const ANDROID_APP_BASE: &str = "tinkoffbank://Main/tpay";
/// Custom scheme that opens the iOS banking app (native contexts only).
const IOS_APP_BASE: &str = "bank100000000004://Main/tpay";
/// Web payment page, used by desktop browsers and iOS webviews.
const WEB_BASE: &str = "https://www.tinkoff.ru/tpay";

/// Validate a request and produce the deep link response.
///
/// Validation order is fixed: the payment id is checked before the platform,
/// so a request that is wrong on both counts reports the UUID error.
pub fn handle(request: &PaymentRequest) -> AppResult<PaymentResponse> {
    let link = generate_payment_link(request)?;

    Ok(PaymentResponse {
        link,
        status: StatusCode::OK.as_u16(),
    })
}

/// Resolve the platform link for a request.
///
/// | deviceOS | webview | link |
/// |---|---|---|
/// | Android | any | `tinkoffbank://Main/tpay/<paymentId>` |
/// | iOS | true | `https://www.tinkoff.ru/tpay/<paymentId>` |
/// | iOS | false | `bank100000000004://Main/tpay/<paymentId>` |
/// | Desktop | any | `https://www.tinkoff.ru/tpay/<paymentId>` |
pub fn generate_payment_link(request: &PaymentRequest) -> AppResult<String> {
    validate_payment_id(&request.payment_id)?;
    let device_os: DeviceOs = request.device_os.parse()?;

    // The link carries the caller's original id string, case and all.
    let link = match (device_os, request.webview) {
        (DeviceOs::Android, _) => format!("{}/{}", ANDROID_APP_BASE, request.payment_id),
        (DeviceOs::Ios, true) => format!("{}/{}", WEB_BASE, request.payment_id),
        (DeviceOs::Ios, false) => format!("{}/{}", IOS_APP_BASE, request.payment_id),
        (DeviceOs::Desktop, _) => format!("{}/{}", WEB_BASE, request.payment_id),
    };

    Ok(link)
}

/// Accept only the canonical 36-character hyphenated UUID form.
///
/// `Uuid::parse_str` on its own also takes the simple, braced and URN forms;
/// the length gate narrows it to hyphenated, which is what the API has
/// always required.
fn validate_payment_id(raw: &str) -> AppResult<()> {
    if raw.len() != uuid::fmt::Hyphenated::LENGTH {
        return Err(AppError::InvalidPaymentId(raw.to_string()));
    }

    Uuid::parse_str(raw)
        .map(|_| ())
        .map_err(|_| AppError::InvalidPaymentId(raw.to_string()))
}
