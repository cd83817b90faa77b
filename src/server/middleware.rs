use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::time::Instant;
use tracing::{Instrument, info};

/// One line per request: method, path, status, length and latency.
pub(crate) async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let route = request.uri().path().to_string();
    let started = Instant::now();

    let span = tracing::info_span!("http.request", method = %method, route = %route);
    let response = next.run(request).instrument(span.clone()).await;

    let length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    span.in_scope(|| {
        info!(
            status = response.status().as_u16(),
            content_length = %length,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "request served"
        )
    });
    response
}

/// Any origin may call the API; preflight requests are answered here.
pub(crate) async fn cors_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        let mut preflight = StatusCode::NO_CONTENT.into_response();
        let headers = preflight.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,HEAD,PUT,PATCH,POST,DELETE"),
        );
        if let Some(requested) = request
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned()
        {
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
        }
        preflight
    } else {
        next.run(request).await
    };

    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
