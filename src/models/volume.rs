//! Volume command models

use super::AccountAddress;

/// Trading volume summary for one account, in TON
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeReport {
    pub address: AccountAddress,
    pub total_volume: f64,
    pub incoming_volume: f64,
    pub outgoing_volume: f64,
    pub transaction_count: usize,
}

/// Result of a volume calculation
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeOutcome {
    Report(VolumeReport),
    /// The indexer returned no transactions for the account
    NoData,
}
