// Type definitions and enums

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ErrorResponse;

/// Client platform reported by the caller.
///
/// The wire values are exact, case-sensitive literals; anything else is an
/// unsupported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceOs {
    Android,
    Ios,
    Desktop,
}

impl std::str::FromStr for DeviceOs {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Android" => Ok(DeviceOs::Android),
            "iOS" => Ok(DeviceOs::Ios),
            "Desktop" => Ok(DeviceOs::Desktop),
            other => Err(AppError::UnsupportedDeviceOs(other.to_string())),
        }
    }
}

impl std::fmt::Display for DeviceOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceOs::Android => write!(f, "Android"),
            DeviceOs::Ios => write!(f, "iOS"),
            DeviceOs::Desktop => write!(f, "Desktop"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body could not be deserialized into a request at all. The payload is
    /// the extractor's rejection detail and only ever reaches the logs;
    /// callers get a fixed generic message.
    #[error("malformed request body: {0}")]
    MalformedRequest(String),

    #[error("Invalid UUID format: {0}")]
    InvalidPaymentId(String),

    #[error("Unsupported deviceOS: {0}")]
    UnsupportedDeviceOs(String),

    /// Any failure not anticipated above. The detail stays in the logs.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedRequest(_)
            | AppError::InvalidPaymentId(_)
            | AppError::UnsupportedDeviceOs(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the caller. Validation errors name the offending
    /// value; malformed bodies and internal failures stay generic.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MalformedRequest(_) => "Invalid JSON format or wrong UUID".to_string(),
            AppError::InvalidPaymentId(id) => format!("Invalid UUID format: {}", id),
            AppError::UnsupportedDeviceOs(os) => format!("Unsupported deviceOS: {}", os),
            AppError::Internal(_) => "Something went wrong".to_string(),
        }
    }

    fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.user_message(),
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_device_os_parses_exact_literals() {
        assert_eq!("Android".parse::<DeviceOs>().unwrap(), DeviceOs::Android);
        assert_eq!("iOS".parse::<DeviceOs>().unwrap(), DeviceOs::Ios);
        assert_eq!("Desktop".parse::<DeviceOs>().unwrap(), DeviceOs::Desktop);
    }

    #[test]
    fn test_device_os_is_case_sensitive() {
        // "android", "IOS" and trimmed variants are all unsupported
        for raw in ["android", "IOS", "ios", "desktop", " iOS", "iOS "] {
            let err = raw.parse::<DeviceOs>().unwrap_err();
            assert_eq!(err.user_message(), format!("Unsupported deviceOS: {}", raw));
        }
    }

    #[test]
    fn test_device_os_display_round_trips() {
        for os in [DeviceOs::Android, DeviceOs::Ios, DeviceOs::Desktop] {
            assert_eq!(os.to_string().parse::<DeviceOs>().unwrap(), os);
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MalformedRequest("oops".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidPaymentId("nope".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnsupportedDeviceOs("Windows".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_messages_do_not_leak_details() {
        let malformed = AppError::MalformedRequest("missing field `deviceOS`".into());
        assert_eq!(malformed.user_message(), "Invalid JSON format or wrong UUID");

        let internal = AppError::Internal("connection pool exhausted".into());
        assert_eq!(internal.user_message(), "Something went wrong");
    }

    #[tokio::test]
    async fn test_error_converts_to_json_response() {
        let response = AppError::UnsupportedDeviceOs("Windows".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "error": "Unsupported deviceOS: Windows", "code": 400 })
        );
    }
}
