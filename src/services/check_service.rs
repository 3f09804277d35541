use serenity::http::Http;
use tracing::info;
use crate::api::FetchOptions;
use crate::config::Config;
use crate::services::address_service;

/// Well-known account used to probe the indexer
const PROBE_ADDRESS: &str = "EQD4FPq-PRDieyQKkizFTRtSDyucUIqrj0v_zXJmqaDp6_0t";

#[derive(Debug)]
pub struct CheckReport {
    pub bot_name: String,
    pub bot_id: u64,
    pub probe_transactions: usize,
}

/// Verify both credentials before going live: log in over HTTP as the bot,
/// then make a one-record indexer request that fails on any non-200 answer.
pub async fn run(config: &Config) -> Result<CheckReport, String> {
    let http = Http::new(&config.bot_token);
    let user = http
        .get_current_user()
        .await
        .map_err(|e| format!("Bot login failed: {}", e))?;
    info!("✅ Bot connected: {} (ID: {})", user.name, user.id);

    let address = address_service::normalize(PROBE_ADDRESS).map_err(|e| e.to_string())?;
    let options = FetchOptions {
        limit: 1,
        timeout: config.request_timeout,
    };
    let transactions = config
        .tonapi_client()
        .strict_status(true)
        .get_account_transactions(&address, &options)
        .await
        .map_err(|e| format!("TonAPI check failed: {}", e))?;
    info!("✅ TonAPI reachable at {}", config.tonapi_base_url);

    Ok(CheckReport {
        bot_name: user.name.clone(),
        bot_id: user.id.get(),
        probe_transactions: transactions.len(),
    })
}
