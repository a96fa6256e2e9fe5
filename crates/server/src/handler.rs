//! The query-and-format pipeline behind the slash command.

use std::sync::Arc;

use stockbot_core::format;
use stockbot_notion::InventorySource;
use stockbot_slack::Replier;

/// One inbound lookup, reduced to what the pipeline needs.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Conversation the reply is bound to.
    pub channel_id: String,
    /// Command text as typed, untrimmed.
    pub raw_text: String,
}

/// Runs one lookup end to end: validate the term, query the database,
/// format, reply.
///
/// Every path through [`LookupHandler::handle`] dispatches exactly one
/// reply. By the time the pipeline runs, the gateway has already been
/// acked, so the reply channel is the only place anything can be reported;
/// errors are mapped to fixed messages and full detail goes to the logs.
pub struct LookupHandler {
    source: Arc<dyn InventorySource>,
    replier: Arc<dyn Replier>,
}

impl LookupHandler {
    pub fn new(source: Arc<dyn InventorySource>, replier: Arc<dyn Replier>) -> Self {
        Self { source, replier }
    }

    pub async fn handle(&self, request: SearchRequest) {
        let term = request.raw_text.trim();

        if term.is_empty() {
            self.reply(&request.channel_id, format::USAGE_MESSAGE).await;
            return;
        }

        let records = match self.source.search(term).await {
            Ok(records) => records,
            Err(error) => {
                tracing::error!(term, channel = %request.channel_id, error = ?error, "inventory query failed");
                self.reply(&request.channel_id, format::FAILURE_MESSAGE).await;
                return;
            }
        };

        if records.is_empty() {
            tracing::info!(term, count = 0usize, "lookup matched nothing");
            self.reply(&request.channel_id, &format::no_match_message(term))
                .await;
            return;
        }

        tracing::info!(term, count = records.len(), "lookup matched");
        self.reply(&request.channel_id, &format::render_reply(term, &records))
            .await;
    }

    /// Dispatch one reply. A send failure is logged and swallowed; there is
    /// no further channel to report it on.
    async fn reply(&self, channel_id: &str, text: &str) {
        if let Err(error) = self.replier.send_message(channel_id, text).await {
            tracing::error!(channel = %channel_id, error = ?error, "failed to dispatch reply");
        }
    }
}
