use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::{Client as HttpClient, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{AccountsResponse, ApiError, TransactionsResponse};
use crate::models::AccountId;

/// Client for the bank backend's JSON list endpoints
pub struct BankClient {
    http_client: HttpClient,
    base_url: String,
    session_id: Option<String>,
}

impl BankClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";

    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Url::parse(base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("Bad base URL {}: {}", base_url, e)))?;

        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_id: None,
        })
    }

    /// Forward an existing Django session so `login_required` views answer with JSON
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(session_id) = &self.session_id {
            let cookie = HeaderValue::from_str(&format!("sessionid={}", session_id))
                .map_err(|e| ApiError::InvalidRequest(format!("Failed to create cookie header: {}", e)))?;
            headers.insert(COOKIE, cookie);
        }

        Ok(headers)
    }

    async fn handle_error_response(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        if status.is_server_error() {
            warn!("Server error {}: {}", status_code, body_text);
        }
        ApiError::HttpError(status_code, body_text)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.create_headers()?;
        debug!("GET {} {:?}", url, query);

        let response = self.http_client
            .get(&url)
            .headers(headers)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestError(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// GET /account/get?start=&count=
    ///
    /// Lists the signed-in user's accounts, `count` of them starting at `start`.
    pub async fn get_accounts(&self, start: u32, count: u32) -> Result<AccountsResponse, ApiError> {
        self.get_json("/account/get", &page_query(None, start, count)).await
    }

    /// GET /transactions?account_id=&start=&count=
    ///
    /// Lists one account's deposits and withdrawals, newest first.
    pub async fn get_transactions(
        &self,
        account_id: AccountId,
        start: u32,
        count: u32,
    ) -> Result<TransactionsResponse, ApiError> {
        self.get_json("/transactions", &page_query(Some(account_id), start, count)).await
    }
}

/// Query parameters for one page, id parameter first
fn page_query(account_id: Option<AccountId>, start: u32, count: u32) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(3);
    if let Some(id) = account_id {
        query.push(("account_id", id.to_string()));
    }
    query.push(("start", start.to_string()));
    query.push(("count", count.to_string()));
    query
}
