//! Account API records and their mapping into order/trade models

use ethers::types::{Address, H256, U256};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::api::utils::{opt_u256_from_str, opt_u64_from_str, u256_from_str, u64_from_str};
use crate::error::{GteError, Result};
use crate::types::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::types::orders::*;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Maximum number of records
    pub limit: u32,
    /// Records to skip
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Page {
    /// Create a page with explicit limit and offset
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Set limit
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// The page following this one
    pub fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}

/// Record from `/users/{account}/open_orders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrderRecord {
    /// On-chain order ID
    #[serde(deserialize_with = "u256_from_str")]
    pub order_id: U256,
    /// Market contract address
    pub market_address: Address,
    /// Order side
    pub side: OrderSide,
    /// Size at placement
    #[serde(deserialize_with = "u256_from_str")]
    pub original_size: U256,
    /// Size filled so far
    #[serde(deserialize_with = "u256_from_str")]
    pub size_filled: U256,
    /// Limit price
    #[serde(deserialize_with = "u256_from_str")]
    pub limit_price: U256,
    /// Placement timestamp (milliseconds)
    #[serde(deserialize_with = "u64_from_str")]
    pub placed_at: u64,
}

/// Record from `/users/{account}/filled_orders`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilledOrderRecord {
    /// On-chain order ID
    #[serde(deserialize_with = "u256_from_str")]
    pub order_id: U256,
    /// Market contract address
    pub market_address: Address,
    /// Order side
    pub side: OrderSide,
    /// Filled size
    #[serde(deserialize_with = "u256_from_str")]
    pub size_filled: U256,
    /// Execution price
    #[serde(deserialize_with = "u256_from_str")]
    pub price: U256,
    /// Fill timestamp (milliseconds)
    #[serde(deserialize_with = "u64_from_str")]
    pub filled_at: u64,
    /// Fill transaction hash
    pub txn_hash: H256,
}

/// Record from `/users/{account}/order_history`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryRecord {
    /// On-chain order ID
    #[serde(deserialize_with = "u256_from_str")]
    pub order_id: U256,
    /// Market contract address
    pub market_address: Address,
    /// Order side
    pub side: OrderSide,
    /// Size at placement
    #[serde(deserialize_with = "u256_from_str")]
    pub original_size: U256,
    /// Size filled, when reported
    #[serde(default, deserialize_with = "opt_u256_from_str")]
    pub size_filled: Option<U256>,
    /// Limit price
    #[serde(deserialize_with = "u256_from_str")]
    pub limit_price: U256,
    /// Placement timestamp (milliseconds)
    #[serde(deserialize_with = "u64_from_str")]
    pub placed_at: u64,
    /// Last fill timestamp (milliseconds), when reported
    #[serde(default, deserialize_with = "opt_u64_from_str")]
    pub filled_at: Option<u64>,
    /// Fill transaction hash, when reported
    #[serde(default)]
    pub txn_hash: Option<H256>,
    /// Order status; `None` when absent or not a known tag
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<OrderStatus>,
}

/// Record from `/users/{account}/trades`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// Trade ID, when the API provides one
    #[serde(default, deserialize_with = "opt_u256_from_str")]
    pub trade_id: Option<U256>,
    /// Market contract address
    pub market_address: Address,
    /// Taker side
    pub side: OrderSide,
    /// Execution price
    #[serde(deserialize_with = "u256_from_str")]
    pub price: U256,
    /// Executed size
    #[serde(deserialize_with = "u256_from_str")]
    pub size: U256,
    /// Execution timestamp (milliseconds)
    #[serde(deserialize_with = "u64_from_str")]
    pub timestamp: u64,
    /// Transaction hash
    #[serde(default)]
    pub txn_hash: Option<H256>,
    /// Maker address
    #[serde(default)]
    pub maker: Option<Address>,
    /// Taker address
    #[serde(default)]
    pub taker: Option<Address>,
}

/// Unknown status tags decode to `None` so one odd record cannot fail a page
fn lenient_status<'de, D>(deserializer: D) -> std::result::Result<Option<OrderStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.and_then(|tag| match tag.parse::<OrderStatus>() {
        Ok(status) => Some(status),
        Err(_) => {
            debug!("Unknown order status tag {:?}", tag);
            None
        }
    }))
}

fn remaining(order_id: U256, original: U256, filled: U256) -> Result<U256> {
    original.checked_sub(filled).ok_or_else(|| {
        GteError::malformed(format!(
            "order {} filled {} exceeds original size {}",
            order_id, filled, original
        ))
    })
}

impl TryFrom<OpenOrderRecord> for Order {
    type Error = GteError;

    fn try_from(record: OpenOrderRecord) -> Result<Self> {
        Ok(Order {
            order_id: record.order_id,
            market_address: record.market_address,
            side: record.side,
            order_type: OrderType::Limit,
            remaining_amount: Some(remaining(
                record.order_id,
                record.original_size,
                record.size_filled,
            )?),
            original_amount: Some(record.original_size),
            filled_amount: Some(record.size_filled),
            price: record.limit_price,
            time_in_force: TimeInForce::Gtc,
            status: OrderStatus::Open,
            placed_at: Some(record.placed_at),
            filled_at: None,
            txn_hash: None,
        })
    }
}

impl From<FilledOrderRecord> for Order {
    fn from(record: FilledOrderRecord) -> Self {
        Order {
            order_id: record.order_id,
            market_address: record.market_address,
            side: record.side,
            order_type: OrderType::Limit,
            remaining_amount: None,
            original_amount: None,
            filled_amount: Some(record.size_filled),
            price: record.price,
            time_in_force: TimeInForce::Gtc,
            status: OrderStatus::Filled,
            placed_at: None,
            filled_at: Some(record.filled_at),
            txn_hash: Some(record.txn_hash),
        }
    }
}

impl TryFrom<OrderHistoryRecord> for Order {
    type Error = GteError;

    fn try_from(record: OrderHistoryRecord) -> Result<Self> {
        let filled = record.size_filled.unwrap_or_default();
        Ok(Order {
            order_id: record.order_id,
            market_address: record.market_address,
            side: record.side,
            order_type: OrderType::Limit,
            remaining_amount: Some(remaining(record.order_id, record.original_size, filled)?),
            original_amount: Some(record.original_size),
            filled_amount: record.size_filled,
            price: record.limit_price,
            time_in_force: TimeInForce::Gtc,
            status: record.status.unwrap_or(OrderStatus::Open),
            placed_at: Some(record.placed_at),
            filled_at: record.filled_at,
            txn_hash: record.txn_hash,
        })
    }
}

impl From<TradeRecord> for Trade {
    fn from(record: TradeRecord) -> Self {
        Trade {
            trade_id: record.trade_id,
            market_address: record.market_address,
            side: record.side,
            price: record.price,
            size: record.size,
            timestamp: record.timestamp,
            txn_hash: record.txn_hash,
            maker: record.maker,
            taker: record.taker,
        }
    }
}
