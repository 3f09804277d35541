use crate::transport::ChatTransport;

const HELP: &str = "📖 **Help**\n\n\
**Commands:**\n\
• `/start` - Start\n\
• `/volume <address>` - Volume analysis\n\
• `/help` - This message\n\n\
**Addresses:** `EQ...`/`UQ...`, raw `0:<hex>`, or a tonviewer.com / tonscan.org link\n\
**Supported:** Jettons, NFTs, wallets";

pub async fn execute<T: ChatTransport>(transport: &T) -> Result<(), String> {
    transport
        .send(HELP)
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))?;

    Ok(())
}
