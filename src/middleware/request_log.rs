use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Log method and path of every inbound request before it is handled.
pub async fn log_request(req: Request, next: Next) -> Response {
    info!(method = %req.method(), path = %req.uri().path(), "received request");
    next.run(req).await
}
