// API Request/Response types
//
// Wire field names are part of the contract: `paymentId` and `deviceOS` are
// exact (note the capital OS, which `rename_all = "camelCase"` would not
// produce), and unknown fields are rejected.

/// Incoming payment link request. Lives only for the duration of the request.
///
/// `paymentId` and `deviceOS` stay plain strings here so that semantic
/// validation can report the offending value verbatim; deserialization only
/// rejects bodies that are structurally wrong.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentRequest {
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    #[serde(rename = "deviceOS")]
    pub device_os: String,
    pub webview: bool,
}

/// Successful result: the platform deep link plus the HTTP status echoed in
/// the body.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PaymentResponse {
    pub link: String,
    pub status: u16,
}

/// Structured error body for every failed request.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
