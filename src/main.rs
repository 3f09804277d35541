use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn, error, debug};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod context;
mod models;
mod services;
mod transport;
mod utils;

use config::Config;
use context::AppContext;

struct Handler {
    app: Arc<AppContext>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&self.app, &ctx, &msg).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
        self.app.set_bot_name(&ready.user.name);

        // Check for rate limits now that bot is connected
        debug!("Checking Discord rate limit status...");
        match ctx.http.get_current_user().await {
            Ok(_) => {
                info!("No rate limit detected - Bot is fully ready!");
            }
            Err(e) => {
                let error_msg = e.to_string();
                if error_msg.contains("429") || error_msg.contains("rate limit") || error_msg.contains("Ratelimited") {
                    warn!("Bot is being rate limited by Discord! Error: {}", error_msg);
                } else {
                    warn!("Failed to check rate limit status: {}", error_msg);
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("ton_volume_bot=debug".parse().unwrap())
            .add_directive("serenity=warn".parse().unwrap()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting TON Volume Bot...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("Loaded config: {:?}", config);

    if std::env::args().nth(1).as_deref() == Some("check") {
        return match services::check_service::run(&config).await {
            Ok(report) => {
                info!(
                    "Check passed: bot {} ({}), indexer returned {} transaction(s)",
                    report.bot_name, report.bot_id, report.probe_transactions
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Check failed: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let app = Arc::new(AppContext::from_config(&config));

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = match Client::builder(&config.bot_token, intents)
        .event_handler(Handler { app })
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
