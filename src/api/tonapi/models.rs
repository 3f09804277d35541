use serde::Deserialize;
use thiserror::Error;

/// Body of `GET /blockchain/accounts/{account_id}/transactions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Option<Vec<TransactionRecord>>,
}

/// One transaction as returned by TonAPI. Only the fields the bot reads are
/// modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRecord {
    /// Only used to label errors, so any JSON shape is accepted
    #[serde(default)]
    pub hash: Option<serde_json::Value>,
    #[serde(default)]
    pub in_msg: Option<MessageRecord>,
    #[serde(default)]
    pub out_msgs: Option<Vec<MessageRecord>>,
}

/// An inbound or outbound message of a transaction.
///
/// `value` is kept as raw JSON: TonAPI sends nanoton amounts as integers but
/// strings and decimals show up too, so parsing happens during aggregation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl TransactionRecord {
    pub fn hash_label(&self) -> String {
        match &self.hash {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => "<unknown>".to_string(),
            Some(other) => other.to_string(),
        }
    }

    pub fn out_msgs(&self) -> &[MessageRecord] {
        self.out_msgs.as_deref().unwrap_or_default()
    }
}

/// Error type for TonAPI operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Rate Limited: {0}")]
    RateLimited(String),
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Request Error: {0}")]
    RequestError(String),
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}
