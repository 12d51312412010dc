//! Transaction parameters and the send-and-wait helper

use crate::error::{GteError, Result};
use ethers::{
    abi::Detokenize,
    contract::ContractCall,
    providers::Middleware,
    types::{transaction::eip2718::TypedTransaction, TransactionReceipt, U256, U64},
};
use tracing::debug;

/// Optional overrides applied to every transaction an operation submits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxParams {
    /// Gas limit
    pub gas: Option<U256>,
    /// Legacy gas price; switches the transaction to legacy encoding
    pub gas_price: Option<U256>,
    /// EIP-1559 max fee per gas
    pub max_fee_per_gas: Option<U256>,
    /// EIP-1559 max priority fee per gas
    pub max_priority_fee_per_gas: Option<U256>,
    /// Explicit nonce
    pub nonce: Option<U256>,
}

impl TxParams {
    /// No overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gas limit
    pub fn gas(mut self, gas: impl Into<U256>) -> Self {
        self.gas = Some(gas.into());
        self
    }

    /// Set a legacy gas price
    pub fn gas_price(mut self, gas_price: impl Into<U256>) -> Self {
        self.gas_price = Some(gas_price.into());
        self
    }

    /// Set EIP-1559 fees
    pub fn eip1559_fees(mut self, max_fee: impl Into<U256>, max_priority_fee: impl Into<U256>) -> Self {
        self.max_fee_per_gas = Some(max_fee.into());
        self.max_priority_fee_per_gas = Some(max_priority_fee.into());
        self
    }

    /// Set the nonce
    pub fn nonce(mut self, nonce: impl Into<U256>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Reject contradictory or unusable overrides
    pub fn validate(&self) -> Result<()> {
        if self.gas == Some(U256::zero()) {
            return Err(GteError::invalid_parameter("Gas limit cannot be zero"));
        }
        if self.gas_price.is_some()
            && (self.max_fee_per_gas.is_some() || self.max_priority_fee_per_gas.is_some())
        {
            return Err(GteError::invalid_parameter(
                "Legacy gas price cannot be combined with EIP-1559 fee fields",
            ));
        }
        if let (Some(max_fee), Some(priority)) = (self.max_fee_per_gas, self.max_priority_fee_per_gas) {
            if priority > max_fee {
                return Err(GteError::invalid_parameter(
                    "Max priority fee per gas cannot exceed max fee per gas",
                ));
            }
        }
        Ok(())
    }

    /// Apply the overrides to a built contract call
    pub fn apply<M, D>(&self, call: ContractCall<M, D>) -> ContractCall<M, D>
    where
        M: Middleware,
        D: Detokenize,
    {
        let mut call = call;
        if let Some(gas) = self.gas {
            call = call.gas(gas);
        }
        if let Some(nonce) = self.nonce {
            call = call.nonce(nonce);
        }
        if let Some(gas_price) = self.gas_price {
            call = call.legacy().gas_price(gas_price);
        }
        if let TypedTransaction::Eip1559(ref mut inner) = call.tx {
            if let Some(max_fee) = self.max_fee_per_gas {
                inner.max_fee_per_gas = Some(max_fee);
            }
            if let Some(priority) = self.max_priority_fee_per_gas {
                inner.max_priority_fee_per_gas = Some(priority);
            }
        }
        call
    }
}

/// Submit a call and wait until it is mined. Fails on a dropped transaction or a revert.
pub async fn send_wait<M, D>(call: ContractCall<M, D>, label: &str) -> Result<TransactionReceipt>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    let pending = call
        .send()
        .await
        .map_err(|e| GteError::contract(format!("Failed to send {} transaction: {}", label, e)))?;
    let tx_hash = pending.tx_hash();
    debug!("{} submitted: {:#x}", label, tx_hash);

    let receipt = pending
        .await
        .map_err(|e| GteError::provider(format!("Failed to get {} receipt: {}", label, e)))?
        .ok_or_else(|| GteError::MissingReceipt(format!("{} {:#x}", label, tx_hash)))?;

    if receipt.status == Some(U64::from(1)) {
        debug!("{} confirmed in block {:?}", label, receipt.block_number);
        Ok(receipt)
    } else {
        Err(GteError::Reverted(format!(
            "{} {:#x} (status {:?})",
            label, receipt.transaction_hash, receipt.status
        )))
    }
}
