//! API client for the GTE account REST endpoints

use crate::{
    api::utils::{append_query, checksum, join_url},
    config::Config,
    error::{GteError, Result},
    types::{account::*, api::*, paths},
};
use async_trait::async_trait;
use ethers::types::Address;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Account endpoints of the REST API
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Portfolio snapshot for `account`
    async fn get_user_portfolio(&self, account: Address) -> Result<Portfolio>;

    /// Liquidity provider positions for `account`
    async fn get_user_lp_positions(&self, account: Address) -> Result<Value>;

    /// Trades of `account` on `market`
    async fn get_user_trades(
        &self,
        account: Address,
        market: Address,
        page: Page,
    ) -> Result<Vec<TradeRecord>>;

    /// Open orders of `account`, optionally scoped to `market`
    async fn get_user_open_orders(
        &self,
        account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<OpenOrderRecord>>;

    /// Filled orders of `account`, optionally scoped to `market`
    async fn get_user_filled_orders(
        &self,
        account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<FilledOrderRecord>>;

    /// Order history of `account`, optionally scoped to `market`
    async fn get_user_order_history(
        &self,
        account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<OrderHistoryRecord>>;
}

/// GTE REST API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    http_client: HttpClient,
    /// Base API URL
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| GteError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.api_url.to_string(),
        })
    }

    /// Base API URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let mut url = join_url(&self.base_url, path);
        append_query(&mut url, params);

        debug!("GET {}", url);
        let response = self.http_client.get(&url).send().await?;

        if response.status().is_success() {
            let body = response.text().await?;
            parse_body(&body, path)
        } else {
            let status_code = response.status().as_u16() as i32;
            let error_text = response.text().await.unwrap_or_default();
            Err(GteError::api(status_code, error_text))
        }
    }

    async fn get_user_list<T: DeserializeOwned>(
        &self,
        account: Address,
        suffix: &str,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<T>> {
        let path = user_path(account, suffix);
        let response = self.get(&path, &page_params(market, page)).await?;
        decode_list(response, suffix)
    }
}

fn user_path(account: Address, suffix: &str) -> String {
    format!("/users/{}/{}", checksum(&account), suffix)
}

fn page_params(market: Option<Address>, page: Page) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(3);
    if let Some(market) = market {
        params.push(("market", checksum(&market)));
    }
    params.push(("limit", page.limit.to_string()));
    params.push(("offset", page.offset.to_string()));
    params
}

/// Parse a success body; a body that is not JSON is a malformed response
fn parse_body(body: &str, path: &str) -> Result<Value> {
    serde_json::from_str(body)
        .map_err(|e| GteError::malformed(format!("Non-JSON body from {}: {}", path, e)))
}

/// Decode a single object, reporting schema mismatches as malformed responses
pub fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| GteError::malformed(format!("Invalid {} response: {}", what, e)))
}

/// Decode a list body; `null` is an empty list
pub fn decode_list<T: DeserializeOwned>(value: Value, what: &str) -> Result<Vec<T>> {
    match value {
        Value::Null => Ok(vec![]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item).map_err(|e| {
                    GteError::malformed(format!("Invalid {} record {}: {}", what, i, e))
                })
            })
            .collect(),
        other => Err(GteError::malformed(format!(
            "Invalid {} response format: expected a list, got {}",
            what,
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn get_user_portfolio(&self, account: Address) -> Result<Portfolio> {
        let response = self.get(&user_path(account, paths::PORTFOLIO), &[]).await?;
        decode(response, "portfolio")
    }

    async fn get_user_lp_positions(&self, account: Address) -> Result<Value> {
        self.get(&user_path(account, paths::LP_POSITIONS), &[]).await
    }

    async fn get_user_trades(
        &self,
        account: Address,
        market: Address,
        page: Page,
    ) -> Result<Vec<TradeRecord>> {
        self.get_user_list(account, paths::TRADES, Some(market), page).await
    }

    async fn get_user_open_orders(
        &self,
        account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<OpenOrderRecord>> {
        self.get_user_list(account, paths::OPEN_ORDERS, market, page).await
    }

    async fn get_user_filled_orders(
        &self,
        account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<FilledOrderRecord>> {
        self.get_user_list(account, paths::FILLED_ORDERS, market, page).await
    }

    async fn get_user_order_history(
        &self,
        account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<OrderHistoryRecord>> {
        self.get_user_list(account, paths::ORDER_HISTORY, market, page).await
    }
}
