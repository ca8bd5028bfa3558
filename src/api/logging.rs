//! Request Logging Middleware
//!
//! Emits one `INFO` line per request once the response is ready: remote
//! address, request id, `METHOD URI VERSION`, status, body size and latency.

use axum::extract::{ConnectInfo, Request};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;
use std::time::Instant;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_request(req: Request, next: Next) -> Response {
    let started = Instant::now();

    // Missing when the router is served without connect info (tests).
    let from = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let req_id = header_str(req.headers().get(REQUEST_ID_HEADER));
    let line = format!("{} {} {:?}", req.method(), req.uri(), req.version());

    let response = next.run(req).await;

    let bytes = header_str(response.headers().get(CONTENT_LENGTH));
    tracing::info!(
        "{} from={} req_id={} status={} bytes={} elapsed={:?}",
        line,
        from,
        req_id,
        response.status().as_u16(),
        bytes,
        started.elapsed()
    );

    response
}

fn header_str(value: Option<&axum::http::HeaderValue>) -> String {
    value
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}
