use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use crate::models::AccountAddress;

lazy_static! {
    // Canonical forms, used for final validation
    static ref USER_FRIENDLY: Regex = Regex::new(r"^[EU]Q[a-zA-Z0-9_-]{46}$").unwrap();
    static ref RAW: Regex = Regex::new(r"^-?\d+:[a-fA-F0-9]{64}$").unwrap();

    // Explorer links, only used to spot addresses in free text
    static ref TONVIEWER_LINK: Regex = Regex::new(r"^https?://tonviewer\.com/[a-zA-Z0-9_-]+").unwrap();
    static ref TONSCAN_LINK: Regex = Regex::new(r"^https?://tonscan\.org/address/[a-zA-Z0-9_-]+").unwrap();
}

const EXPLORER_HOSTS: [&str; 2] = ["tonviewer.com", "tonscan.org"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid address format")]
pub struct InvalidAddressError;

/// Extract and validate a TON address from user input.
///
/// Explorer links are reduced to their last path segment first. The result
/// is returned exactly as typed; the checksum of user-friendly addresses is
/// not verified.
pub fn normalize(input: &str) -> Result<AccountAddress, InvalidAddressError> {
    let candidate = if EXPLORER_HOSTS.iter().any(|host| input.contains(host)) {
        last_segment(input)
    } else {
        input
    };

    if USER_FRIENDLY.is_match(candidate) || RAW.is_match(candidate) {
        Ok(AccountAddress::from_validated(candidate.to_string()))
    } else {
        Err(InvalidAddressError)
    }
}

/// Look for something address-shaped in a free-text message.
///
/// Returns the text (or its last `/` segment) when it starts like any known
/// address or explorer link. This is a hint for the user, not validation.
pub fn detect(text: &str) -> Option<&str> {
    let looks_like_address = [&*USER_FRIENDLY, &*RAW, &*TONVIEWER_LINK, &*TONSCAN_LINK]
        .iter()
        .any(|pattern| pattern.is_match(text));

    if !looks_like_address {
        return None;
    }

    if text.contains('/') {
        Some(last_segment(text))
    } else {
        Some(text)
    }
}

fn last_segment(text: &str) -> &str {
    text.rsplit('/').next().unwrap_or(text)
}
