//! HTTP application wiring.

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::handler::LookupHandler;
use crate::middleware::{self, SignatureState};

pub mod routes;

/// Build the full router. Entry point for `main` and for the black-box
/// tests, which inject their own handler.
pub fn build_app(handler: Arc<LookupHandler>, signing_secret: String) -> Router {
    let signature_state = SignatureState { signing_secret };

    // Everything the gateway posts to goes behind the signature check;
    // health stays open for probes.
    let commands = routes::command_router()
        .layer(Extension(handler))
        .layer(axum::middleware::from_fn_with_state(
            signature_state,
            middleware::verify_slack_signature,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(commands)
}
