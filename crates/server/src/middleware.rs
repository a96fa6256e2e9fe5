//! Inbound request authentication.
//!
//! Verifies the gateway's signature over the exact raw body bytes before
//! the form extractor ever sees them, then rebuilds the request so the
//! route handler can consume the body as usual.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use stockbot_slack::signature::{self, SignatureError};

const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";
const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Slash-command payloads are a few hundred bytes; anything near this
/// limit is not a command.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// State for the signature middleware.
#[derive(Clone)]
pub struct SignatureState {
    pub signing_secret: String,
}

/// Reject any request that does not carry a valid, fresh signature.
///
/// Missing or malformed headers are a 400; a stale timestamp or a digest
/// mismatch is a 401. Rejected requests never reach a route handler.
pub async fn verify_slack_signature(
    State(state): State<SignatureState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let (parts, body) = req.into_parts();

    let timestamp = required_header(&parts.headers, TIMESTAMP_HEADER)?;
    let provided = required_header(&parts.headers, SIGNATURE_HEADER)?;

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    if let Err(error) = signature::verify_signature(
        &state.signing_secret,
        &timestamp,
        &bytes,
        &provided,
        Utc::now(),
    ) {
        let status = match &error {
            SignatureError::MalformedTimestamp(_) | SignatureError::Malformed => {
                StatusCode::BAD_REQUEST
            }
            SignatureError::Stale | SignatureError::Mismatch => StatusCode::UNAUTHORIZED,
        };
        tracing::warn!(error = %error, "rejecting slash command request");
        return Err(status);
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}

fn required_header(headers: &HeaderMap, name: &str) -> Result<String, StatusCode> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or(StatusCode::BAD_REQUEST)
}
