pub mod tonapi;

use std::time::Duration;
use serenity::async_trait;
use crate::models::AccountAddress;

pub use tonapi::{ApiError, MessageRecord, TonApiClient, TransactionRecord};

/// Per-request knobs for a transaction history fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Maximum number of transactions in the single page requested
    pub limit: u32,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            limit: 1000,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Anything that can hand back the transaction history of an account
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(
        &self,
        address: &AccountAddress,
        options: &FetchOptions,
    ) -> Result<Vec<TransactionRecord>, ApiError>;
}
