//! Market handle used to scope account queries

use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::api::utils::checksum;
use crate::error::{GteError, Result};

/// Market identified by its contract address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Market contract address
    pub address: Address,
    /// Base token address
    #[serde(default)]
    pub base_token_address: Option<Address>,
    /// Quote token address
    #[serde(default)]
    pub quote_token_address: Option<Address>,
}

impl Market {
    /// Create a market handle from its contract address
    pub fn new(address: Address) -> Self {
        Self {
            address,
            base_token_address: None,
            quote_token_address: None,
        }
    }

    /// Parse a market handle from a hex address string
    pub fn from_address_str(address: &str) -> Result<Self> {
        let address = address
            .parse::<Address>()
            .map_err(|e| GteError::invalid_address(format!("Invalid market address {}: {}", address, e)))?;
        Ok(Self::new(address))
    }

    /// Set base and quote token addresses
    pub fn with_tokens(mut self, base: Address, quote: Address) -> Self {
        self.base_token_address = Some(base);
        self.quote_token_address = Some(quote);
        self
    }

    /// Market address in checksum form
    pub fn address_checksum(&self) -> String {
        checksum(&self.address)
    }
}
