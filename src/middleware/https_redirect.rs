// Plain-HTTP to HTTPS redirect
//
// The plaintext listener answers every request with a permanent redirect to
// the TLS port. A TLS-terminating proxy marks already-secure requests with
// `X-Forwarded-Proto: https`, and those pass straight through.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Router;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

pub fn apply_https_redirect(router: Router, ssl_port: u16) -> Router {
    router.layer(middleware::from_fn(move |request: Request, next: Next| {
        redirect_to_https(request, next, ssl_port)
    }))
}

async fn redirect_to_https(request: Request, next: Next, ssl_port: u16) -> Response {
    if forwarded_proto_is_https(&request) {
        return next.run(request).await;
    }

    let Some(host) = request_host(&request) else {
        // Nothing to rebuild the URL from; serve the request as-is.
        return next.run(request).await;
    };

    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let location = format!("https://{}:{}{}", host, ssl_port, path_and_query);

    // 308 keeps the method, so redirected POSTs stay POSTs.
    Redirect::permanent(&location).into_response()
}

fn forwarded_proto_is_https(request: &Request) -> bool {
    request
        .headers()
        .get(X_FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

/// Host the client addressed, without the port it arrived on.
fn request_host(request: &Request) -> Option<String> {
    let authority = request
        .uri()
        .authority()
        .map(|authority| authority.as_str().to_string())
        .or_else(|| {
            request
                .headers()
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })?;

    Some(strip_port(&authority).to_string())
}

fn strip_port(authority: &str) -> &str {
    // IPv6 literals keep their brackets: "[::1]:8080" becomes "[::1]"
    if let Some(end) = authority.rfind(']') {
        &authority[..=end]
    } else if let Some(colon) = authority.rfind(':') {
        &authority[..colon]
    } else {
        authority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::routing::post;
    use tower::ServiceExt;

    fn test_router() -> Router {
        apply_https_redirect(
            Router::new().route("/payment", post(|| async { "ok" })),
            8443,
        )
    }

    #[tokio::test]
    async fn test_plain_http_gets_permanent_redirect() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/payment")
            .header("host", "pay.example.com:8080")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "https://pay.example.com:8443/payment"
        );
    }

    #[tokio::test]
    async fn test_redirect_keeps_the_query_string() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/payment?attempt=2")
            .header("host", "pay.example.com")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get("location").unwrap(),
            "https://pay.example.com:8443/payment?attempt=2"
        );
    }

    #[tokio::test]
    async fn test_forwarded_https_passes_through() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/payment")
            .header("host", "pay.example.com")
            .header("x-forwarded-proto", "https")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ipv6_host_keeps_brackets() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/payment")
            .header("host", "[::1]:8080")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get("location").unwrap(),
            "https://[::1]:8443/payment"
        );
    }

    #[tokio::test]
    async fn test_missing_host_is_served_directly() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/payment")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
