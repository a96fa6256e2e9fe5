use std::sync::Arc;

use axum::Form;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use stockbot_slack::SlashCommand;

use crate::handler::{LookupHandler, SearchRequest};

/// The one command this service answers.
const INVENTORY_COMMAND: &str = "/inventory";

/// Receive a slash command, ack it immediately, and run the lookup on its
/// own task.
///
/// The gateway gives webhooks three seconds before it shows the user an
/// error, so the response must not wait on the database. The spawned task
/// replies through the Web API whenever it finishes.
pub async fn slash_command(
    Extension(handler): Extension<Arc<LookupHandler>>,
    Form(payload): Form<SlashCommand>,
) -> Response {
    if payload.command != INVENTORY_COMMAND {
        tracing::warn!(command = %payload.command, "ignoring unsupported command");
        return (
            StatusCode::OK,
            format!("Unknown command {}.", payload.command),
        )
            .into_response();
    }

    tracing::info!(
        user = %payload.user_id,
        channel = %payload.channel_id,
        "slash command received"
    );

    let request = SearchRequest {
        channel_id: payload.channel_id,
        raw_text: payload.text,
    };
    tokio::spawn(async move { handler.handle(request).await });

    StatusCode::OK.into_response()
}
