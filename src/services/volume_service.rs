use std::str::FromStr;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};
use crate::api::{ApiError, FetchOptions, TransactionRecord, TransactionSource};
use crate::models::{AccountAddress, VolumeOutcome, VolumeReport};
use crate::services::address_service::{self, InvalidAddressError};
use crate::utils::format_thousands;

/// Nanotons per TON
const NANO_PER_TON: i64 = 1_000_000_000;

#[derive(Debug, Clone, Error)]
pub enum VolumeError {
    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddressError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Computation(String),
}

/// Sum inbound and outbound transfer values of `transactions`.
///
/// Any record with an unreadable amount fails the whole calculation.
pub fn aggregate(
    address: &AccountAddress,
    transactions: &[TransactionRecord],
) -> Result<VolumeOutcome, VolumeError> {
    if transactions.is_empty() {
        return Ok(VolumeOutcome::NoData);
    }

    let mut total = Decimal::ZERO;
    let mut incoming = Decimal::ZERO;
    let mut outgoing = Decimal::ZERO;

    for tx in transactions {
        if let Some(value) = tx.in_msg.as_ref().and_then(|m| m.value.as_ref()) {
            if let Some(amount) = to_ton(value, tx)? {
                incoming = checked_add(incoming, amount)?;
                total = checked_add(total, amount)?;
            }
        }

        for out_msg in tx.out_msgs() {
            if let Some(value) = out_msg.value.as_ref() {
                if let Some(amount) = to_ton(value, tx)? {
                    outgoing = checked_add(outgoing, amount)?;
                    total = checked_add(total, amount)?;
                }
            }
        }
    }

    debug!("Volume for {}: total={} in={} out={}", address, total, incoming, outgoing);

    Ok(VolumeOutcome::Report(VolumeReport {
        address: address.clone(),
        total_volume: to_f64(total)?,
        incoming_volume: to_f64(incoming)?,
        outgoing_volume: to_f64(outgoing)?,
        transaction_count: transactions.len(),
    }))
}

/// Normalize `input`, fetch its history and aggregate it
pub async fn calculate_volume(
    source: &dyn TransactionSource,
    input: &str,
    options: &FetchOptions,
) -> Result<VolumeOutcome, VolumeError> {
    let address = address_service::normalize(input)?;
    // A body whose records cannot be read is a failed calculation, not an indexer fault
    let transactions = source
        .fetch_transactions(&address, options)
        .await
        .map_err(|e| match e {
            ApiError::DeserializationError(reason) => VolumeError::Computation(reason),
            other => VolumeError::Api(other),
        })
        .map_err(|e| log_computation_error(&address, e))?;
    info!("Calculating volume for {} over {} transactions", address, transactions.len());

    aggregate(&address, &transactions).map_err(|e| log_computation_error(&address, e))
}

fn log_computation_error(address: &AccountAddress, e: VolumeError) -> VolumeError {
    if let VolumeError::Computation(reason) = &e {
        error!("Volume calculation error for {}: {}", address, reason);
    }
    e
}

/// Convert a nanoton amount to TON. Absent amounts (null, zero, empty) are
/// skipped rather than counted.
fn to_ton(value: &Value, tx: &TransactionRecord) -> Result<Option<Decimal>, VolumeError> {
    let nano = match value {
        Value::Null | Value::Bool(false) => return Ok(None),
        Value::String(s) if s.is_empty() => return Ok(None),
        Value::Array(a) if a.is_empty() => return Ok(None),
        Value::Object(o) if o.is_empty() => return Ok(None),
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    };

    let nano = nano.ok_or_else(|| {
        VolumeError::Computation(format!(
            "Invalid amount {} in transaction {}",
            value,
            tx.hash_label()
        ))
    })?;

    if nano.is_zero() {
        return Ok(None);
    }

    nano.checked_div(Decimal::from(NANO_PER_TON))
        .map(Some)
        .ok_or_else(|| VolumeError::Computation("Arithmetic overflow".to_string()))
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn checked_add(acc: Decimal, amount: Decimal) -> Result<Decimal, VolumeError> {
    acc.checked_add(amount)
        .ok_or_else(|| VolumeError::Computation("Arithmetic overflow".to_string()))
}

fn to_f64(value: Decimal) -> Result<f64, VolumeError> {
    value
        .to_f64()
        .ok_or_else(|| VolumeError::Computation(format!("Cannot represent {} as a number", value)))
}

/// Render a successful report for the chat
pub fn create_volume_message(report: &VolumeReport) -> String {
    format!(
        "📊 **Volume Analysis**\n\n\
         `{address}`\n\n\
         • 💰 **Total:** {total:.2} TON\n\
         • 📥 **Incoming:** {incoming:.2} TON\n\
         • 📤 **Outgoing:** {outgoing:.2} TON\n\
         • 🔢 **Transactions:** {count}\n\n\
         [TonViewer]({viewer}) | [TonScan]({scan})",
        address = report.address,
        total = report.total_volume,
        incoming = report.incoming_volume,
        outgoing = report.outgoing_volume,
        count = format_thousands(report.transaction_count),
        viewer = report.address.tonviewer_url(),
        scan = report.address.tonscan_url(),
    )
}

/// Render the reply for a finished volume request, whatever its result
pub fn create_result_message(result: &Result<VolumeOutcome, VolumeError>) -> String {
    match result {
        Ok(VolumeOutcome::Report(report)) => create_volume_message(report),
        Ok(VolumeOutcome::NoData) => create_error_message("No transactions found"),
        Err(e) => create_error_message(&e.to_string()),
    }
}

pub fn create_error_message(reason: &str) -> String {
    format!("❌ Error: {}", reason)
}
