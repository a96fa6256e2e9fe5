use std::sync::Arc;

use anyhow::Context;

use stockbot_notion::NotionClient;
use stockbot_slack::SlackClient;

use stockbot_server::app::build_app;
use stockbot_server::config::Config;
use stockbot_server::handler::LookupHandler;
use stockbot_server::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init();

    let config = Config::from_env().context("loading configuration")?;

    let source = Arc::new(NotionClient::new(
        config.notion_api_key.clone(),
        config.notion_database_id.clone(),
    ));
    let replier = Arc::new(SlackClient::new(config.slack_bot_token.clone()));
    let handler = Arc::new(LookupHandler::new(source, replier));

    let app = build_app(handler, config.slack_signing_secret.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "inventory bot listening");

    axum::serve(listener, app).await.context("serving HTTP")?;
    Ok(())
}
