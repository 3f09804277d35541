use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serenity::async_trait;
use super::models::{ApiError, TransactionRecord, TransactionsResponse};
use crate::api::{FetchOptions, TransactionSource};
use crate::models::AccountAddress;
use tracing::{debug, warn};

/// TonAPI client for reading account transaction history
pub struct TonApiClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    strict_status: bool,
}

impl TonApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://tonapi.io/v2";

    /// Create a new client; `base_url` is usually `DEFAULT_BASE_URL`
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            strict_status: false,
        }
    }

    /// When strict, a non-200 answer is returned as an error instead of an
    /// empty transaction list.
    pub fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| ApiError::RequestError(format!("Failed to create auth header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    fn status_error(status: reqwest::StatusCode, body: String) -> ApiError {
        let code = status.as_u16();
        match code {
            401 | 403 => ApiError::Unauthorized(body),
            404 => ApiError::NotFound(body),
            429 => ApiError::RateLimited(body),
            500..=599 => ApiError::ServerError(code, body),
            _ => ApiError::HttpError(code, body),
        }
    }

    /// GET /blockchain/accounts/{account_id}/transactions
    ///
    /// Requests a single page of up to `options.limit` archival transactions.
    /// A missing `transactions` key yields an empty list. Non-200 answers are
    /// logged and also yield an empty list unless the client is strict.
    pub async fn get_account_transactions(
        &self,
        address: &AccountAddress,
        options: &FetchOptions,
    ) -> Result<Vec<TransactionRecord>, ApiError> {
        let url = format!("{}/blockchain/accounts/{}/transactions", self.base_url, address);
        let headers = self.create_headers()?;

        debug!("📡 GET {} (limit {})", url, options.limit);

        let response = self.http_client
            .get(&url)
            .headers(headers)
            .query(&[("limit", options.limit.to_string()), ("archival", "true".to_string())])
            .timeout(options.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout(options.timeout.as_secs())
                } else {
                    ApiError::RequestError(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("TonAPI error for {}: HTTP {}", address, status.as_u16());
            if self.strict_status {
                return Err(Self::status_error(status, body));
            }
            return Ok(Vec::new());
        }

        let parsed = response
            .json::<TransactionsResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        let transactions = parsed.transactions.unwrap_or_default();
        debug!("Fetched {} transactions for {}", transactions.len(), address);
        Ok(transactions)
    }
}

#[async_trait]
impl TransactionSource for TonApiClient {
    async fn fetch_transactions(
        &self,
        address: &AccountAddress,
        options: &FetchOptions,
    ) -> Result<Vec<TransactionRecord>, ApiError> {
        self.get_account_transactions(address, options).await
    }
}
