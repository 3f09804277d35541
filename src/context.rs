use std::sync::OnceLock;
use crate::api::{FetchOptions, TransactionSource};
use crate::config::Config;

/// Everything a command needs, built once at startup and shared by reference
pub struct AppContext {
    pub source: Box<dyn TransactionSource>,
    pub fetch_options: FetchOptions,
    /// Set once the gateway reports who we are
    bot_name: OnceLock<String>,
}

impl AppContext {
    pub fn new(source: Box<dyn TransactionSource>, fetch_options: FetchOptions) -> Self {
        Self {
            source,
            fetch_options,
            bot_name: OnceLock::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(config.tonapi_client()), config.fetch_options())
    }

    pub fn set_bot_name(&self, name: &str) {
        // Reconnects deliver `ready` again with the same user
        let _ = self.bot_name.set(name.to_string());
    }

    /// Whether a `/command@name` suffix names this bot
    pub fn is_addressed_to(&self, name: &str) -> bool {
        self.bot_name
            .get()
            .is_some_and(|own| own.eq_ignore_ascii_case(name))
    }
}
