//! Request ID propagation.
//!
//! Every request is handled inside a `request` span keyed by a UUID. A valid
//! UUID in the incoming `x-request-id` header is reused so a platform router
//! or load balancer can correlate its own logs with ours; otherwise a fresh
//! v4 is generated. The id is echoed back on the response in the same header.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{HeaderName, HeaderValue};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Reuse the caller's id when it parses as a UUID.
fn resolve_request_id(request: &Request) -> Uuid {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .unwrap_or_else(Uuid::new_v4)
}

/// Wraps the request in a span carrying its id and stamps the id on the response.
///
/// Must be the outermost layer so the span covers tracing and handlers.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        // A hyphenated UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}
