//! Recording in-memory collaborators for account client tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ethers::types::{Address, TransactionReceipt, U256, U64};
use serde_json::Value;

use crate::api::UserApi;
use crate::chain::{ChainClient, ClobFactory, ClobManager, Erc20, TokenClient, TxParams, Weth};
use crate::error::{GteError, Result};
use crate::types::{
    FilledOrderRecord, OpenOrderRecord, OrderHistoryRecord, Page, Portfolio, TradeRecord,
};

pub const FACTORY: u64 = 0xfac;

/// Every collaborator call, in issue order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    NativeBalance(Address),
    BalanceOf { token: Address, owner: Address },
    Allowance { token: Address, owner: Address, spender: Address },
    Approve { token: Address, spender: Address, amount: U256 },
    DepositEth { token: Address, amount: U256 },
    WithdrawEth { token: Address, amount: U256 },
    ApproveOperator { operator: Address, roles: U256 },
    DisapproveOperator { operator: Address, roles: U256 },
    ApprovedOperators { account: Address, operator: Address },
    FactoryDeposit { account: Address, token: Address, amount: U256, from_operator: bool },
    FactoryWithdraw { account: Address, token: Address, amount: U256, to_operator: bool },
    AccountBalance { account: Address, token: Address },
    Rest { endpoint: &'static str, market: Option<Address>, page: Option<Page> },
}

#[derive(Debug, Default)]
pub struct MockState {
    pub initialized: bool,
    pub native_balance: U256,
    /// token -> wallet balance of the account
    pub wallet_balances: HashMap<Address, U256>,
    /// token -> allowance granted to the factory
    pub allowances: HashMap<Address, U256>,
    /// token -> exchange-held balance
    pub exchange_balances: HashMap<Address, U256>,
    pub operator_approved: bool,
    pub portfolio: Portfolio,
    pub lp_positions: Value,
    pub trades: Vec<TradeRecord>,
    pub open_orders: Vec<OpenOrderRecord>,
    pub filled_orders: Vec<FilledOrderRecord>,
    pub order_history: Vec<OrderHistoryRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    pub state: Arc<Mutex<MockState>>,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

fn receipt() -> TransactionReceipt {
    TransactionReceipt {
        status: Some(U64::from(1)),
        ..Default::default()
    }
}

impl MockEnv {
    pub fn initialized() -> Self {
        let env = Self::default();
        env.state.lock().unwrap().initialized = true;
        env
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn with_state(&self, f: impl FnOnce(&mut MockState)) {
        f(&mut self.state.lock().unwrap());
    }
}

#[async_trait]
impl ChainClient for MockEnv {
    async fn get_balance(&self, address: Address) -> Result<U256> {
        self.record(Call::NativeBalance(address));
        Ok(self.state.lock().unwrap().native_balance)
    }

    fn clob_factory(&self) -> Option<Arc<dyn ClobFactory>> {
        if !self.state.lock().unwrap().initialized {
            return None;
        }
        let factory: Arc<dyn ClobFactory> = Arc::new(self.clone());
        Some(factory)
    }

    fn factory_address(&self) -> Address {
        Address::from_low_u64_be(FACTORY)
    }
}

struct MockToken {
    address: Address,
    env: MockEnv,
}

#[async_trait]
impl Erc20 for MockToken {
    fn address(&self) -> Address {
        self.address
    }

    async fn balance_of(&self, owner: Address) -> Result<U256> {
        self.env.record(Call::BalanceOf { token: self.address, owner });
        let state = self.env.state.lock().unwrap();
        Ok(state.wallet_balances.get(&self.address).copied().unwrap_or_default())
    }

    async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        self.env.record(Call::Allowance { token: self.address, owner, spender });
        let state = self.env.state.lock().unwrap();
        Ok(state.allowances.get(&self.address).copied().unwrap_or_default())
    }

    async fn approve(
        &self,
        spender: Address,
        amount: U256,
        _params: &TxParams,
    ) -> Result<TransactionReceipt> {
        self.env.record(Call::Approve { token: self.address, spender, amount });
        self.env.state.lock().unwrap().allowances.insert(self.address, amount);
        Ok(receipt())
    }
}

#[async_trait]
impl Weth for MockToken {
    async fn deposit_eth(&self, amount: U256, _params: &TxParams) -> Result<TransactionReceipt> {
        self.env.record(Call::DepositEth { token: self.address, amount });
        let mut state = self.env.state.lock().unwrap();
        if state.native_balance < amount {
            return Err(GteError::Reverted("insufficient native balance".to_string()));
        }
        state.native_balance -= amount;
        *state.wallet_balances.entry(self.address).or_default() += amount;
        Ok(receipt())
    }

    async fn withdraw_eth(&self, amount: U256, _params: &TxParams) -> Result<TransactionReceipt> {
        self.env.record(Call::WithdrawEth { token: self.address, amount });
        let mut state = self.env.state.lock().unwrap();
        let balance = state.wallet_balances.entry(self.address).or_default();
        if *balance < amount {
            return Err(GteError::Reverted("insufficient wrapped balance".to_string()));
        }
        *balance -= amount;
        state.native_balance += amount;
        Ok(receipt())
    }
}

impl TokenClient for MockEnv {
    fn get_erc20(&self, address: Address) -> Arc<dyn Erc20> {
        Arc::new(MockToken { address, env: self.clone() })
    }

    fn get_weth(&self, address: Address) -> Arc<dyn Weth> {
        Arc::new(MockToken { address, env: self.clone() })
    }
}

#[async_trait]
impl ClobManager for MockEnv {
    async fn approve_operator(
        &self,
        operator: Address,
        roles: U256,
        _params: &TxParams,
    ) -> Result<TransactionReceipt> {
        self.record(Call::ApproveOperator { operator, roles });
        self.state.lock().unwrap().operator_approved = true;
        Ok(receipt())
    }

    async fn disapprove_operator(
        &self,
        operator: Address,
        roles: U256,
        _params: &TxParams,
    ) -> Result<TransactionReceipt> {
        self.record(Call::DisapproveOperator { operator, roles });
        self.state.lock().unwrap().operator_approved = false;
        Ok(receipt())
    }

    async fn approved_operators(&self, account: Address, operator: Address) -> Result<bool> {
        self.record(Call::ApprovedOperators { account, operator });
        Ok(self.state.lock().unwrap().operator_approved)
    }
}

#[async_trait]
impl ClobFactory for MockEnv {
    fn address(&self) -> Address {
        Address::from_low_u64_be(FACTORY)
    }

    async fn deposit(
        &self,
        account: Address,
        token: Address,
        amount: U256,
        from_operator: bool,
        _params: &TxParams,
    ) -> Result<TransactionReceipt> {
        self.record(Call::FactoryDeposit { account, token, amount, from_operator });
        let mut state = self.state.lock().unwrap();
        let allowance = state.allowances.get(&token).copied().unwrap_or_default();
        let balance = state.wallet_balances.get(&token).copied().unwrap_or_default();
        if allowance < amount || balance < amount {
            return Err(GteError::Reverted("transfer amount exceeds allowance or balance".to_string()));
        }
        state.allowances.insert(token, allowance - amount);
        state.wallet_balances.insert(token, balance - amount);
        *state.exchange_balances.entry(token).or_default() += amount;
        Ok(receipt())
    }

    async fn withdraw(
        &self,
        account: Address,
        token: Address,
        amount: U256,
        to_operator: bool,
        _params: &TxParams,
    ) -> Result<TransactionReceipt> {
        self.record(Call::FactoryWithdraw { account, token, amount, to_operator });
        let mut state = self.state.lock().unwrap();
        let held = state.exchange_balances.entry(token).or_default();
        if *held < amount {
            return Err(GteError::Reverted("insufficient exchange balance".to_string()));
        }
        *held -= amount;
        *state.wallet_balances.entry(token).or_default() += amount;
        Ok(receipt())
    }

    async fn get_account_balance(&self, account: Address, token: Address) -> Result<U256> {
        self.record(Call::AccountBalance { account, token });
        let state = self.state.lock().unwrap();
        Ok(state.exchange_balances.get(&token).copied().unwrap_or_default())
    }
}

#[async_trait]
impl UserApi for MockEnv {
    async fn get_user_portfolio(&self, _account: Address) -> Result<Portfolio> {
        self.record(Call::Rest { endpoint: "portfolio", market: None, page: None });
        Ok(self.state.lock().unwrap().portfolio.clone())
    }

    async fn get_user_lp_positions(&self, _account: Address) -> Result<Value> {
        self.record(Call::Rest { endpoint: "lppositions", market: None, page: None });
        Ok(self.state.lock().unwrap().lp_positions.clone())
    }

    async fn get_user_trades(
        &self,
        _account: Address,
        market: Address,
        page: Page,
    ) -> Result<Vec<TradeRecord>> {
        self.record(Call::Rest { endpoint: "trades", market: Some(market), page: Some(page) });
        Ok(self.state.lock().unwrap().trades.clone())
    }

    async fn get_user_open_orders(
        &self,
        _account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<OpenOrderRecord>> {
        self.record(Call::Rest { endpoint: "open_orders", market, page: Some(page) });
        Ok(self.state.lock().unwrap().open_orders.clone())
    }

    async fn get_user_filled_orders(
        &self,
        _account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<FilledOrderRecord>> {
        self.record(Call::Rest { endpoint: "filled_orders", market, page: Some(page) });
        Ok(self.state.lock().unwrap().filled_orders.clone())
    }

    async fn get_user_order_history(
        &self,
        _account: Address,
        market: Option<Address>,
        page: Page,
    ) -> Result<Vec<OrderHistoryRecord>> {
        self.record(Call::Rest { endpoint: "order_history", market, page: Some(page) });
        Ok(self.state.lock().unwrap().order_history.clone())
    }
}
