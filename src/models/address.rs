//! Account address model

use std::fmt;

/// A TON account address that already passed normalization.
///
/// Either the user-friendly form (`EQ...`/`UQ...`, 48 chars) or the raw
/// form (`workchain:hex64`). Only `services::address_service` builds these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountAddress(String);

impl AccountAddress {
    pub(crate) fn from_validated(address: String) -> Self {
        Self(address)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// TonViewer detail page for this account
    pub fn tonviewer_url(&self) -> String {
        format!("https://tonviewer.com/{}", self.0)
    }

    /// TonScan detail page for this account
    pub fn tonscan_url(&self) -> String {
        format!("https://tonscan.org/address/{}", self.0)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
