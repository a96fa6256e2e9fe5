//! Inbound slash-command payload.

use serde::Deserialize;

/// The form-encoded payload the gateway posts for a slash command.
///
/// Only the fields this service reads are modeled; the rest of the payload
/// is ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SlashCommand {
    /// The command as typed, leading slash included (`/inventory`).
    pub command: String,
    /// Free text after the command: the search term, delivered untrimmed.
    #[serde(default)]
    pub text: String,
    /// Conversation the command was issued in; replies are bound to it.
    pub channel_id: String,
    /// Invoking user. Logged for traceability, never forwarded.
    #[serde(default)]
    pub user_id: String,
}
