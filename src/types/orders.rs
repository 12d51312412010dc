//! Order and trade models returned by the account API

use ethers::types::{Address, H256, U256};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::api::utils::checksum;
use crate::error::GteError;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OrderSide {
    /// Buy (bid) side
    Buy,
    /// Sell (ask) side
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = GteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "bid" => Ok(OrderSide::Buy),
            "sell" | "ask" => Ok(OrderSide::Sell),
            _ => Err(GteError::invalid_parameter(format!("Unknown order side: {}", s))),
        }
    }
}

impl TryFrom<String> for OrderSide {
    type Error = GteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
        }
    }
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
    /// Rests on the book or is rejected
    PostOnly,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Ioc => write!(f, "IOC"),
            TimeInForce::Fok => write!(f, "FOK"),
            TimeInForce::PostOnly => write!(f, "POST_ONLY"),
        }
    }
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OrderStatus {
    /// Resting on the book
    Open,
    /// Completely filled
    Filled,
    /// Cancelled by the owner or an operator
    Cancelled,
    /// Expired or otherwise closed by the exchange
    Expired,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Open => write!(f, "open"),
            OrderStatus::Filled => write!(f, "filled"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Expired => write!(f, "expired"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = GteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accepts snake_case, camelCase and kebab-case tags alike
        let tag: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        match tag.as_str() {
            "open" | "new" | "partiallyfilled" => Ok(OrderStatus::Open),
            "filled" => Ok(OrderStatus::Filled),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            "expired" => Ok(OrderStatus::Expired),
            _ => Err(GteError::invalid_parameter(format!("Unknown order status: {}", s))),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = GteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Order built from an account API record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// On-chain order ID
    pub order_id: U256,
    /// Market contract address
    pub market_address: Address,
    /// Order side
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Size still resting (original minus filled)
    pub remaining_amount: Option<U256>,
    /// Size at placement
    pub original_amount: Option<U256>,
    /// Size filled so far
    pub filled_amount: Option<U256>,
    /// Limit price, or execution price for fills
    pub price: U256,
    /// Time in force
    pub time_in_force: TimeInForce,
    /// Order status
    pub status: OrderStatus,
    /// Placement timestamp
    pub placed_at: Option<u64>,
    /// Fill timestamp
    pub filled_at: Option<u64>,
    /// Fill transaction hash
    pub txn_hash: Option<H256>,
}

impl Order {
    /// Market address in checksum form
    pub fn market_address_checksum(&self) -> String {
        checksum(&self.market_address)
    }

    /// Convert placement timestamp (milliseconds) to DateTime<Utc>
    pub fn placed_at_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        use chrono::{TimeZone, Utc};
        self.placed_at
            .and_then(|ts| Utc.timestamp_millis_opt(ts as i64).single())
    }

    /// Convert fill timestamp (milliseconds) to DateTime<Utc>
    pub fn filled_at_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        use chrono::{TimeZone, Utc};
        self.filled_at
            .and_then(|ts| Utc.timestamp_millis_opt(ts as i64).single())
    }

    /// Check if order is open
    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }

    /// Check if order is filled
    pub fn is_filled(&self) -> bool {
        self.status == OrderStatus::Filled
    }
}

/// Trade built from an account API record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trade {
    /// Trade ID, when the API provides one
    pub trade_id: Option<U256>,
    /// Market contract address
    pub market_address: Address,
    /// Taker side
    pub side: OrderSide,
    /// Execution price
    pub price: U256,
    /// Executed size
    pub size: U256,
    /// Execution timestamp (milliseconds)
    pub timestamp: u64,
    /// Transaction hash
    pub txn_hash: Option<H256>,
    /// Maker address
    pub maker: Option<Address>,
    /// Taker address
    pub taker: Option<Address>,
}

impl Trade {
    /// Market address in checksum form
    pub fn market_address_checksum(&self) -> String {
        checksum(&self.market_address)
    }

    /// Convert timestamp to DateTime<Utc>
    pub fn timestamp_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.timestamp as i64).single()
    }
}
