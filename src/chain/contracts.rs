//! ethers-backed contract handles

use std::sync::Arc;

use async_trait::async_trait;
use ethers::{
    abi::Abi,
    contract::Contract,
    providers::Middleware,
    types::{Address, TransactionReceipt, U256},
};

use crate::chain::traits::{ClobFactory, ClobManager, Erc20, Weth};
use crate::chain::tx::{send_wait, TxParams};
use crate::error::{GteError, Result};
use crate::types::abi::{CLOB_FACTORY_ABI, CLOB_MANAGER_ABI, ERC20_ABI, WETH_ABI};

/// Parse a JSON ABI constant
pub fn parse_abi(name: &str, json: &str) -> Result<Abi> {
    serde_json::from_str(json)
        .map_err(|e| GteError::generic(format!("Failed to parse {} ABI: {}", name, e)))
}

fn method_error(method: &str, e: impl std::fmt::Display) -> GteError {
    GteError::contract(format!("Failed to create {} method: {}", method, e))
}

fn call_error(method: &str, e: impl std::fmt::Display) -> GteError {
    GteError::contract(format!("Failed to call {}: {}", method, e))
}

/// ERC20 token contract
#[derive(Debug)]
pub struct Erc20Contract<M> {
    contract: Contract<M>,
}

impl<M: Middleware> Erc20Contract<M> {
    /// Bind the ERC20 ABI at `address`
    pub fn new(address: Address, abi: Abi, client: Arc<M>) -> Self {
        Self {
            contract: Contract::new(address, abi, client),
        }
    }
}

async fn erc20_balance_of<M: Middleware + 'static>(contract: &Contract<M>, owner: Address) -> Result<U256> {
    contract
        .method::<_, U256>("balanceOf", owner)
        .map_err(|e| method_error("balanceOf", e))?
        .call()
        .await
        .map_err(|e| call_error("balanceOf", e))
}

async fn erc20_allowance<M: Middleware + 'static>(
    contract: &Contract<M>,
    owner: Address,
    spender: Address,
) -> Result<U256> {
    contract
        .method::<_, U256>("allowance", (owner, spender))
        .map_err(|e| method_error("allowance", e))?
        .call()
        .await
        .map_err(|e| call_error("allowance", e))
}

async fn erc20_approve<M: Middleware + 'static>(
    contract: &Contract<M>,
    spender: Address,
    amount: U256,
    params: &TxParams,
) -> Result<TransactionReceipt> {
    let call = contract
        .method::<_, bool>("approve", (spender, amount))
        .map_err(|e| method_error("approve", e))?;
    send_wait(params.apply(call), "approve").await
}

#[async_trait]
impl<M: Middleware + 'static> Erc20 for Erc20Contract<M> {
    fn address(&self) -> Address {
        self.contract.address()
    }

    async fn balance_of(&self, owner: Address) -> Result<U256> {
        erc20_balance_of(&self.contract, owner).await
    }

    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        erc20_allowance(&self.contract, owner, spender).await
    }

    async fn approve(
        &self,
        spender: Address,
        amount: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        erc20_approve(&self.contract, spender, amount, params).await
    }
}

/// Wrapped native token contract
#[derive(Debug)]
pub struct WethContract<M> {
    contract: Contract<M>,
}

impl<M: Middleware> WethContract<M> {
    /// Bind the WETH ABI at `address`
    pub fn new(address: Address, abi: Abi, client: Arc<M>) -> Self {
        Self {
            contract: Contract::new(address, abi, client),
        }
    }
}

#[async_trait]
impl<M: Middleware + 'static> Erc20 for WethContract<M> {
    fn address(&self) -> Address {
        self.contract.address()
    }

    async fn balance_of(&self, owner: Address) -> Result<U256> {
        erc20_balance_of(&self.contract, owner).await
    }

    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        erc20_allowance(&self.contract, owner, spender).await
    }

    async fn approve(
        &self,
        spender: Address,
        amount: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        erc20_approve(&self.contract, spender, amount, params).await
    }
}

#[async_trait]
impl<M: Middleware + 'static> Weth for WethContract<M> {
    async fn deposit_eth(&self, amount: U256, params: &TxParams) -> Result<TransactionReceipt> {
        let call = self
            .contract
            .method::<_, ()>("deposit", ())
            .map_err(|e| method_error("deposit", e))?
            .value(amount);
        send_wait(params.apply(call), "wrap").await
    }

    async fn withdraw_eth(&self, amount: U256, params: &TxParams) -> Result<TransactionReceipt> {
        let call = self
            .contract
            .method::<_, ()>("withdraw", amount)
            .map_err(|e| method_error("withdraw", e))?;
        send_wait(params.apply(call), "unwrap").await
    }
}

/// Resolves ERC20 and WETH handles over a shared client
#[derive(Debug)]
pub struct EthTokenClient<M> {
    client: Arc<M>,
    erc20_abi: Abi,
    weth_abi: Abi,
}

impl<M: Middleware> EthTokenClient<M> {
    /// Create a token client; ABIs are parsed once here
    pub fn new(client: Arc<M>) -> Result<Self> {
        Ok(Self {
            client,
            erc20_abi: parse_abi("ERC20", ERC20_ABI)?,
            weth_abi: parse_abi("WETH", WETH_ABI)?,
        })
    }
}

impl<M: Middleware + 'static> crate::chain::traits::TokenClient for EthTokenClient<M> {
    fn get_erc20(&self, address: Address) -> Arc<dyn Erc20> {
        Arc::new(Erc20Contract::new(address, self.erc20_abi.clone(), self.client.clone()))
    }

    fn get_weth(&self, address: Address) -> Arc<dyn Weth> {
        Arc::new(WethContract::new(address, self.weth_abi.clone(), self.client.clone()))
    }
}

/// CLOB manager contract
#[derive(Debug)]
pub struct ClobManagerContract<M> {
    contract: Contract<M>,
}

impl<M: Middleware> ClobManagerContract<M> {
    /// Bind the CLOB manager ABI at `address`
    pub fn new(address: Address, client: Arc<M>) -> Result<Self> {
        let abi = parse_abi("CLOB manager", CLOB_MANAGER_ABI)?;
        Ok(Self {
            contract: Contract::new(address, abi, client),
        })
    }
}

#[async_trait]
impl<M: Middleware + 'static> ClobManager for ClobManagerContract<M> {
    async fn approve_operator(
        &self,
        operator: Address,
        roles: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        let call = self
            .contract
            .method::<_, ()>("approveOperator", (operator, roles))
            .map_err(|e| method_error("approveOperator", e))?;
        send_wait(params.apply(call), "approveOperator").await
    }

    async fn disapprove_operator(
        &self,
        operator: Address,
        roles: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        let call = self
            .contract
            .method::<_, ()>("disapproveOperator", (operator, roles))
            .map_err(|e| method_error("disapproveOperator", e))?;
        send_wait(params.apply(call), "disapproveOperator").await
    }

    async fn approved_operators(&self, account: Address, operator: Address) -> Result<bool> {
        self.contract
            .method::<_, bool>("approvedOperators", (account, operator))
            .map_err(|e| method_error("approvedOperators", e))?
            .call()
            .await
            .map_err(|e| call_error("approvedOperators", e))
    }
}

/// CLOB factory contract
#[derive(Debug)]
pub struct ClobFactoryContract<M> {
    contract: Contract<M>,
}

impl<M: Middleware> ClobFactoryContract<M> {
    /// Bind the CLOB factory ABI at `address`
    pub fn new(address: Address, client: Arc<M>) -> Result<Self> {
        let abi = parse_abi("CLOB factory", CLOB_FACTORY_ABI)?;
        Ok(Self {
            contract: Contract::new(address, abi, client),
        })
    }
}

#[async_trait]
impl<M: Middleware + 'static> ClobFactory for ClobFactoryContract<M> {
    fn address(&self) -> Address {
        self.contract.address()
    }

    async fn deposit(
        &self,
        account: Address,
        token: Address,
        amount: U256,
        from_operator: bool,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        let call = self
            .contract
            .method::<_, ()>("deposit", (account, token, amount, from_operator))
            .map_err(|e| method_error("deposit", e))?;
        send_wait(params.apply(call), "deposit").await
    }

    async fn withdraw(
        &self,
        account: Address,
        token: Address,
        amount: U256,
        to_operator: bool,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        let call = self
            .contract
            .method::<_, ()>("withdraw", (account, token, amount, to_operator))
            .map_err(|e| method_error("withdraw", e))?;
        send_wait(params.apply(call), "withdraw").await
    }

    async fn get_account_balance(&self, account: Address, token: Address) -> Result<U256> {
        self.contract
            .method::<_, U256>("getAccountBalance", (account, token))
            .map_err(|e| method_error("getAccountBalance", e))?
            .call()
            .await
            .map_err(|e| call_error("getAccountBalance", e))
    }
}
