//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

use crate::extractors::ClientIdentity;

/// Logs the client, method, path, status, and latency of every request.
///
/// The client is resolved the same way the vulnerable pipeline keys its
/// request windows, so bursts in the log line up with `requestNumber`.
pub async fn request_logging(
    ClientIdentity(client): ClientIdentity,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if response.status().is_server_error() {
        warn!(%client, %method, %path, status, latency_ms, "Request failed");
    } else {
        info!(%client, %method, %path, status, latency_ms, "Request served");
    }

    response
}
