use crate::services::address_service;
use crate::transport::ChatTransport;

pub const PROMPT: &str = "🤖 Send an address or `/volume <address>`";

/// Answer plain text: point out an address if there seems to be one
pub async fn execute<T: ChatTransport>(transport: &T, text: &str) -> Result<(), String> {
    let reply = match address_service::detect(text) {
        Some(address) => format!("🔍 Address: `{}`\n\nUse: `/volume {}`", address, address),
        None => PROMPT.to_string(),
    };

    transport.send(&reply).await.map_err(|e| e.to_string())?;

    Ok(())
}
