use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::debug;

/// Log every request method and path with the resulting status.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    debug!("{} {} -> {}", method, path, response.status());
    response
}
