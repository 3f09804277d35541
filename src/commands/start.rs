use crate::transport::ChatTransport;

const GREETING: &str = "🤖 **TON Volume Bot**\n\n\
Analyzes the trading volume of accounts and tokens on TON.\n\n\
**Commands:**\n\
• `/volume <address>` - Volume analysis\n\
• `/help` - Help\n\n\
**Example:** `/volume EQD4FPq-PRDieyQKkizFTRtSDyucUIqrj0v_zXJmqaDp6_0t`";

pub async fn execute<T: ChatTransport>(transport: &T) -> Result<(), String> {
    transport
        .send(GREETING)
        .await
        .map_err(|e| format!("Failed to send greeting: {}", e))?;

    Ok(())
}
