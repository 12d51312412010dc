//! Account-related types for the GTE API

use ethers::types::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Token reference embedded in portfolio entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRef {
    /// Token contract address
    pub address: Address,
    /// Token symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Token name
    #[serde(default)]
    pub name: Option<String>,
    /// Token decimals
    #[serde(default)]
    pub decimals: Option<u32>,
}

/// Token balance entry from /users/{account}/portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    /// Token metadata
    pub token: TokenRef,
    /// Balance in token units
    #[serde(default)]
    pub balance: Option<Decimal>,
    /// Balance value in USD
    #[serde(default)]
    pub balance_usd: Option<Decimal>,
    /// Realized PnL in USD
    #[serde(default)]
    pub realized_pnl: Option<Decimal>,
    /// Unrealized PnL in USD
    #[serde(default)]
    pub unrealized_pnl: Option<Decimal>,
}

/// Portfolio snapshot from /users/{account}/portfolio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Per-token balances
    #[serde(default)]
    pub tokens: Vec<TokenBalance>,
    /// Total portfolio value in USD
    #[serde(default)]
    pub total_usd_balance: Option<Decimal>,
}

impl Portfolio {
    /// Total USD value, zero when the API omits it
    pub fn total_usd(&self) -> f64 {
        use rust_decimal::prelude::ToPrimitive;
        self.total_usd_balance
            .and_then(|total| total.to_f64())
            .unwrap_or(0.0)
    }
}
