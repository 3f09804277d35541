pub mod client;
pub mod models;
#[cfg(test)]
pub mod testing;

pub use client::TonApiClient;
pub use models::{ApiError, MessageRecord, TransactionRecord, TransactionsResponse};
