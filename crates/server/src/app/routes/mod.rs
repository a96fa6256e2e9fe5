use axum::Router;
use axum::routing::post;

pub mod slash;
pub mod system;

/// Router for the signature-verified command endpoints.
pub fn command_router() -> Router {
    Router::new().route("/slack/commands", post(slash::slash_command))
}
