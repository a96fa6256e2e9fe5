use axum::http::StatusCode;

/// Liveness probe. No signature required.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
