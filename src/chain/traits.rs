//! Interfaces to the on-chain collaborators of the account client

use std::sync::Arc;

use async_trait::async_trait;
use ethers::types::{Address, TransactionReceipt, U256};

use crate::chain::tx::TxParams;
use crate::error::Result;

/// Chain access needed by the account client
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Native currency balance of `address`, in wei
    async fn get_balance(&self, address: Address) -> Result<U256>;

    /// CLOB factory handle; `None` until the client has been initialized
    fn clob_factory(&self) -> Option<Arc<dyn ClobFactory>>;

    /// Address of the CLOB factory, the spender for deposits
    fn factory_address(&self) -> Address;
}

/// ERC20 token handle
#[async_trait]
pub trait Erc20: Send + Sync {
    /// Token contract address
    fn address(&self) -> Address;

    /// Wallet balance of `owner`
    async fn balance_of(&self, owner: Address) -> Result<U256>;

    /// Amount `spender` may transfer on behalf of `owner`
    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256>;

    /// Approve `spender` for `amount` and wait for confirmation
    async fn approve(
        &self,
        spender: Address,
        amount: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt>;
}

/// Wrapped native token handle
#[async_trait]
pub trait Weth: Erc20 {
    /// Wrap `amount` of native currency and wait for confirmation
    async fn deposit_eth(&self, amount: U256, params: &TxParams) -> Result<TransactionReceipt>;

    /// Unwrap `amount` into native currency and wait for confirmation
    async fn withdraw_eth(&self, amount: U256, params: &TxParams) -> Result<TransactionReceipt>;
}

/// Resolves token handles by address
pub trait TokenClient: Send + Sync {
    /// ERC20 handle for `address`
    fn get_erc20(&self, address: Address) -> Arc<dyn Erc20>;

    /// WETH handle for `address`
    fn get_weth(&self, address: Address) -> Arc<dyn Weth>;
}

/// Operator management on the CLOB manager
#[async_trait]
pub trait ClobManager: Send + Sync {
    /// Grant the roles in `roles` to `operator`
    async fn approve_operator(
        &self,
        operator: Address,
        roles: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt>;

    /// Revoke the roles in `roles` from `operator`
    async fn disapprove_operator(
        &self,
        operator: Address,
        roles: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt>;

    /// Whether `operator` is approved for `account`
    async fn approved_operators(&self, account: Address, operator: Address) -> Result<bool>;
}

/// Exchange-held balances on the CLOB factory
#[async_trait]
pub trait ClobFactory: Send + Sync {
    /// Factory contract address
    fn address(&self) -> Address;

    /// Credit `amount` of `token` to `account`
    async fn deposit(
        &self,
        account: Address,
        token: Address,
        amount: U256,
        from_operator: bool,
        params: &TxParams,
    ) -> Result<TransactionReceipt>;

    /// Debit `amount` of `token` from `account` back to its wallet
    async fn withdraw(
        &self,
        account: Address,
        token: Address,
        amount: U256,
        to_operator: bool,
        params: &TxParams,
    ) -> Result<TransactionReceipt>;

    /// Exchange-held balance of `token` for `account`
    async fn get_account_balance(&self, account: Address, token: Address) -> Result<U256>;
}
