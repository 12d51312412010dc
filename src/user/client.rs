//! Account client for GTE
//!
//! Wraps the chain, token, CLOB manager and REST collaborators behind a
//! single handle bound to one account.

use std::sync::Arc;

use ethers::types::{Address, TransactionReceipt, U256};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    api::{utils::checksum, ApiClient, UserApi},
    chain::{
        ChainClient, ClobClient, ClobFactory, ClobManager, ClobManagerContract, EthTokenClient,
        TokenClient, TxParams,
    },
    config::Config,
    error::{GteError, Result},
    types::{account::*, api::Page, market::Market, operator::*, orders::*},
};

/// Account-facing client
///
/// Holds no state besides its collaborators and the account address; every
/// call goes to the chain or the REST API.
#[derive(Clone)]
pub struct UserClient {
    /// Configuration
    config: Config,
    /// Account this client acts for
    account: Address,
    /// Native balance queries and CLOB factory handle
    clob: Arc<dyn ChainClient>,
    /// ERC20 / WETH handles
    token: Arc<dyn TokenClient>,
    /// Operator approvals
    clob_manager: Arc<dyn ClobManager>,
    /// Account REST endpoints
    rest: Arc<dyn UserApi>,
}

impl std::fmt::Debug for UserClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserClient")
            .field("account", &self.account)
            .field("network", &self.config.network)
            .field("factory", &self.clob.factory_address())
            .finish_non_exhaustive()
    }
}

impl UserClient {
    /// Create a client over explicit collaborators
    pub fn new(
        config: Config,
        clob: Arc<dyn ChainClient>,
        token: Arc<dyn TokenClient>,
        clob_manager: Arc<dyn ClobManager>,
        rest: Arc<dyn UserApi>,
    ) -> Self {
        let account = config.account;
        Self {
            config,
            account,
            clob,
            token,
            clob_manager,
            rest,
        }
    }

    /// Build the ethers and reqwest collaborators from `config` and connect
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use gte_rust_sdk::{Config, ContractAddresses, UserClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let contracts = ContractAddresses::parse(
    ///         "0x776401b9BC8aAe31A685731B7147D4445fD9FB19",
    ///         "0xD7310f8A0D569Dd0803D28BB29f4E0A471fA84F6",
    ///         "0xfaf0BB6F2f4690CA4319e489F6Dc742167B9fB10",
    ///     )?;
    ///     let config = Config::testnet("", Some("private_key"), contracts)?;
    ///
    ///     let user = UserClient::connect(config).await?;
    ///     let balance = user.get_eth_balance().await?;
    ///     println!("{}", balance);
    ///     Ok(())
    /// }
    /// ```
    pub async fn connect(config: Config) -> Result<Self> {
        let mut clob = ClobClient::new(&config)?;
        clob.init().await?;

        let signer = clob.client();
        let token = EthTokenClient::new(signer.clone())?;
        let clob_manager = ClobManagerContract::new(config.contracts.clob_manager, signer)?;
        let rest = ApiClient::new(&config)?;

        info!(
            "✅ GTE user client connected for {} on {}",
            checksum(&config.account),
            config.network
        );

        Ok(Self::new(
            config,
            Arc::new(clob),
            Arc::new(token),
            Arc::new(clob_manager),
            Arc::new(rest),
        ))
    }

    /// Account address
    pub fn account(&self) -> Address {
        self.account
    }

    /// Configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// CLOB factory handle; fails until the chain client is initialized
    pub fn get_clob_factory(&self) -> Result<Arc<dyn ClobFactory>> {
        self.clob
            .clob_factory()
            .ok_or_else(|| GteError::not_initialized("CLOB factory is not initialized"))
    }

    // === Wallet ===

    /// Native currency balance of the account
    pub async fn get_eth_balance(&self) -> Result<U256> {
        self.clob.get_balance(self.account).await
    }

    /// Wrap `amount` of native currency into WETH
    ///
    /// Always wraps into the configured [`Config::weth_address`], the same
    /// token [`UserClient::deposit`] treats as wrapped native.
    pub async fn wrap_eth(&self, amount: U256, params: &TxParams) -> Result<TransactionReceipt> {
        params.validate()?;
        info!("Wrapping {} wei", amount);
        self.token
            .get_weth(self.config.weth_address())
            .deposit_eth(amount, params)
            .await
    }

    /// Unwrap `amount` of the configured WETH into native currency
    pub async fn unwrap_eth(&self, amount: U256, params: &TxParams) -> Result<TransactionReceipt> {
        params.validate()?;
        info!("Unwrapping {} wei", amount);
        self.token
            .get_weth(self.config.weth_address())
            .withdraw_eth(amount, params)
            .await
    }

    // === Exchange balances ===

    /// Deposit `amount` of `token` into the exchange
    ///
    /// For WETH, any shortfall in the wallet is wrapped first. The factory
    /// allowance is raised to `amount` when short. Each step waits for its
    /// receipt before the next one is sent.
    pub async fn deposit(
        &self,
        token: Address,
        amount: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        params.validate()?;
        let factory = self.get_clob_factory()?;

        if token == self.config.weth_address() {
            let weth = self.token.get_weth(token);
            let wrapped = weth.balance_of(self.account).await?;
            if wrapped < amount {
                let shortfall = amount - wrapped;
                info!("Wrapping {} wei to cover deposit", shortfall);
                weth.deposit_eth(shortfall, params).await?;
            }
        }

        let spender = self.clob.factory_address();
        let erc20 = self.token.get_erc20(token);
        let allowance = erc20.allowance(self.account, spender).await?;
        if allowance < amount {
            info!(
                "Approving {} of {} for {}",
                amount,
                checksum(&token),
                checksum(&spender)
            );
            erc20.approve(spender, amount, params).await?;
        } else {
            debug!("Allowance {} covers deposit of {}", allowance, amount);
        }

        info!("Depositing {} of {}", amount, checksum(&token));
        factory
            .deposit(self.account, token, amount, false, params)
            .await
    }

    /// Withdraw `amount` of `token` from the exchange to the wallet
    pub async fn withdraw(
        &self,
        token: Address,
        amount: U256,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        params.validate()?;
        let factory = self.get_clob_factory()?;
        info!("Withdrawing {} of {}", amount, checksum(&token));
        factory
            .withdraw(self.account, token, amount, false, params)
            .await
    }

    /// Exchange-held balance of `token` (not the wallet balance)
    pub async fn get_token_balance(&self, token: Address) -> Result<U256> {
        self.get_clob_factory()?
            .get_account_balance(self.account, token)
            .await
    }

    // === Portfolio ===

    /// Portfolio snapshot
    pub async fn get_portfolio(&self) -> Result<Portfolio> {
        self.rest.get_user_portfolio(self.account).await
    }

    /// Per-token balances from the portfolio
    pub async fn get_token_balances(&self) -> Result<Vec<TokenBalance>> {
        Ok(self.get_portfolio().await?.tokens)
    }

    /// Total portfolio value in USD, zero when the API omits it
    pub async fn get_total_usd_balance(&self) -> Result<f64> {
        Ok(self.get_portfolio().await?.total_usd())
    }

    /// Liquidity provider positions, passed through as returned by the API
    pub async fn get_lp_positions(&self) -> Result<Value> {
        self.rest.get_user_lp_positions(self.account).await
    }

    // === Operators ===

    /// OR-combine roles into the on-chain mask
    pub fn encode_roles(&self, roles: &[OperatorRole]) -> U256 {
        encode_roles(roles)
    }

    /// Grant `roles` to `operator`
    ///
    /// `Withdraw` and `LaunchpadFill` are refused unless opted into through
    /// `opt_in`; a refusal happens before anything is sent.
    pub async fn approve_operator(
        &self,
        operator: Address,
        roles: &[OperatorRole],
        opt_in: UnsafeOptIn,
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        check_role_policy(roles, opt_in)?;
        params.validate()?;

        let mask = encode_roles(roles);
        info!(
            "Approving operator {} with roles {:?}",
            checksum(&operator),
            roles
        );
        self.clob_manager
            .approve_operator(operator, mask, params)
            .await
    }

    /// Revoke `roles` from `operator`
    pub async fn disapprove_operator(
        &self,
        operator: Address,
        roles: &[OperatorRole],
        params: &TxParams,
    ) -> Result<TransactionReceipt> {
        params.validate()?;
        let mask = encode_roles(roles);
        info!(
            "Disapproving operator {} for roles {:?}",
            checksum(&operator),
            roles
        );
        self.clob_manager
            .disapprove_operator(operator, mask, params)
            .await
    }

    /// Whether `operator` is approved for this account
    pub async fn is_operator_approved(&self, operator: Address) -> Result<bool> {
        self.clob_manager
            .approved_operators(self.account, operator)
            .await
    }

    // === Orders and trades ===

    /// Trades of this account on `market`
    pub async fn get_trades(&self, market: &Market, page: Page) -> Result<Vec<Trade>> {
        let records = self
            .rest
            .get_user_trades(self.account, market.address, page)
            .await?;
        Ok(records.into_iter().map(Trade::from).collect())
    }

    /// Open orders, optionally scoped to `market`
    pub async fn get_open_orders(&self, market: Option<&Market>, page: Page) -> Result<Vec<Order>> {
        self.rest
            .get_user_open_orders(self.account, market.map(|m| m.address), page)
            .await?
            .into_iter()
            .map(Order::try_from)
            .collect()
    }

    /// Filled orders, optionally scoped to `market`
    pub async fn get_filled_orders(
        &self,
        market: Option<&Market>,
        page: Page,
    ) -> Result<Vec<Order>> {
        let records = self
            .rest
            .get_user_filled_orders(self.account, market.map(|m| m.address), page)
            .await?;
        Ok(records.into_iter().map(Order::from).collect())
    }

    /// Order history, optionally scoped to `market`
    pub async fn get_order_history(
        &self,
        market: Option<&Market>,
        page: Page,
    ) -> Result<Vec<Order>> {
        self.rest
            .get_user_order_history(self.account, market.map(|m| m.address), page)
            .await?
            .into_iter()
            .map(Order::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContractAddresses;
    use crate::types::api::{FilledOrderRecord, OpenOrderRecord, OrderHistoryRecord};
    use crate::user::mock::{Call, MockEnv, FACTORY};
    use rust_decimal::Decimal;
    use serde_json::json;

    const WETH: &str = "0x776401b9BC8aAe31A685731B7147D4445fD9FB19";
    const OTHER_TOKEN: u64 = 0x7e57;
    const OPERATOR: u64 = 0x0be7;

    fn config() -> Config {
        let contracts = ContractAddresses::parse(
            WETH,
            "0x0000000000000000000000000000000000000a11",
            "0x0000000000000000000000000000000000000fac",
        )
        .unwrap();
        Config::testnet("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", None, contracts).unwrap()
    }

    fn weth() -> Address {
        WETH.parse().unwrap()
    }

    fn factory() -> Address {
        Address::from_low_u64_be(FACTORY)
    }

    fn user(env: &MockEnv) -> UserClient {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        UserClient::new(
            config(),
            Arc::new(env.clone()),
            Arc::new(env.clone()),
            Arc::new(env.clone()),
            Arc::new(env.clone()),
        )
    }

    fn is_wrap(call: &Call) -> bool {
        matches!(call, Call::DepositEth { .. })
    }

    fn is_approve(call: &Call) -> bool {
        matches!(call, Call::Approve { .. })
    }

    #[tokio::test]
    async fn test_deposit_weth_wraps_shortfall_first() {
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.native_balance = U256::from(1_000);
            s.wallet_balances.insert(weth(), U256::from(40));
        });
        let user = user(&env);

        user.deposit(weth(), U256::from(100), &TxParams::new()).await.unwrap();

        let calls = env.calls();
        let account = user.account();
        assert_eq!(
            calls,
            vec![
                Call::BalanceOf { token: weth(), owner: account },
                Call::DepositEth { token: weth(), amount: U256::from(60) },
                Call::Allowance { token: weth(), owner: account, spender: factory() },
                Call::Approve { token: weth(), spender: factory(), amount: U256::from(100) },
                Call::FactoryDeposit {
                    account,
                    token: weth(),
                    amount: U256::from(100),
                    from_operator: false,
                },
            ]
        );
        env.with_state(|s| assert_eq!(s.exchange_balances[&weth()], U256::from(100)));
    }

    #[tokio::test]
    async fn test_deposit_weth_no_wrap_when_covered() {
        for held in [100u64, 250] {
            let env = MockEnv::initialized();
            env.with_state(|s| {
                s.wallet_balances.insert(weth(), U256::from(held));
            });
            user(&env)
                .deposit(weth(), U256::from(100), &TxParams::new())
                .await
                .unwrap();
            assert!(!env.calls().iter().any(is_wrap));
        }
    }

    #[tokio::test]
    async fn test_deposit_skips_approve_with_allowance() {
        let token = Address::from_low_u64_be(OTHER_TOKEN);
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.wallet_balances.insert(token, U256::from(500));
            s.allowances.insert(token, U256::from(500));
        });
        user(&env)
            .deposit(token, U256::from(300), &TxParams::new())
            .await
            .unwrap();

        let calls = env.calls();
        assert!(!calls.iter().any(is_approve));
        assert!(!calls.iter().any(is_wrap));
        // allowance is read before the deposit goes out
        let allowance = calls.iter().position(|c| matches!(c, Call::Allowance { .. }));
        let deposit = calls.iter().position(|c| matches!(c, Call::FactoryDeposit { .. }));
        assert!(allowance.unwrap() < deposit.unwrap());
    }

    #[tokio::test]
    async fn test_deposit_non_weth_never_reads_wrapped_balance() {
        let token = Address::from_low_u64_be(OTHER_TOKEN);
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.wallet_balances.insert(token, U256::from(10));
        });
        user(&env)
            .deposit(token, U256::from(10), &TxParams::new())
            .await
            .unwrap();

        let calls = env.calls();
        assert!(!calls.iter().any(|c| matches!(c, Call::BalanceOf { .. })));
        assert!(calls.iter().any(is_approve));
    }

    #[tokio::test]
    async fn test_deposit_propagates_failure_without_depositing() {
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.native_balance = U256::from(5);
        });
        let err = user(&env)
            .deposit(weth(), U256::from(100), &TxParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, GteError::Reverted(_)));
        assert!(!env
            .calls()
            .iter()
            .any(|c| matches!(c, Call::FactoryDeposit { .. })));
    }

    #[tokio::test]
    async fn test_deposit_rejects_invalid_params_before_calls() {
        let env = MockEnv::initialized();
        let params = TxParams::new().gas(0u64);
        let err = user(&env)
            .deposit(weth(), U256::from(1), &params)
            .await
            .unwrap_err();
        assert!(err.is_caller_input());
        assert!(env.calls().is_empty());
    }

    #[tokio::test]
    async fn test_factory_operations_require_init() {
        let env = MockEnv::default();
        let user = user(&env);

        assert!(matches!(user.get_clob_factory(), Err(GteError::NotInitialized(_))));
        let err = user
            .deposit(weth(), U256::from(1), &TxParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, GteError::NotInitialized(_)));
        let err = user.get_token_balance(weth()).await.unwrap_err();
        assert!(matches!(err, GteError::NotInitialized(_)));
        assert!(env.calls().is_empty());
    }

    #[tokio::test]
    async fn test_withdraw_and_exchange_balance() {
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.exchange_balances.insert(weth(), U256::from(70));
        });
        let user = user(&env);

        user.withdraw(weth(), U256::from(30), &TxParams::new()).await.unwrap();
        assert_eq!(user.get_token_balance(weth()).await.unwrap(), U256::from(40));
        assert_eq!(
            env.calls()[0],
            Call::FactoryWithdraw {
                account: user.account(),
                token: weth(),
                amount: U256::from(30),
                to_operator: false,
            }
        );
    }

    #[tokio::test]
    async fn test_wrap_and_unwrap() {
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.native_balance = U256::from(100);
        });
        let user = user(&env);

        user.wrap_eth(U256::from(60), &TxParams::new()).await.unwrap();
        user.unwrap_eth(U256::from(20), &TxParams::new()).await.unwrap();
        assert_eq!(user.get_eth_balance().await.unwrap(), U256::from(60));
        env.with_state(|s| assert_eq!(s.wallet_balances[&weth()], U256::from(40)));
    }

    #[tokio::test]
    async fn test_approve_withdraw_role_requires_opt_in() {
        let env = MockEnv::initialized();
        let user = user(&env);
        let operator = Address::from_low_u64_be(OPERATOR);

        let err = user
            .approve_operator(
                operator,
                &[OperatorRole::ClobLimit, OperatorRole::Withdraw],
                UnsafeOptIn::none(),
                &TxParams::new(),
            )
            .await
            .unwrap_err();
        assert!(err.is_caller_input());
        assert!(matches!(
            err,
            GteError::RolePolicy(RoleRejection::UnsafeWithdrawRequired)
        ));

        let err = user
            .approve_operator(
                operator,
                &[OperatorRole::LaunchpadFill],
                UnsafeOptIn::none().with_withdraw(),
                &TxParams::new(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GteError::RolePolicy(RoleRejection::UnsafeLaunchpadFillRequired)
        ));
        assert!(env.calls().is_empty());
    }

    #[tokio::test]
    async fn test_approve_and_disapprove_operator() {
        let env = MockEnv::initialized();
        let user = user(&env);
        let operator = Address::from_low_u64_be(OPERATOR);
        let roles = [OperatorRole::Withdraw, OperatorRole::ClobFill];

        user.approve_operator(
            operator,
            &roles,
            UnsafeOptIn::none().with_withdraw(),
            &TxParams::new(),
        )
        .await
        .unwrap();
        assert!(user.is_operator_approved(operator).await.unwrap());

        // revocation is never gated
        user.disapprove_operator(operator, &roles, &TxParams::new())
            .await
            .unwrap();
        assert!(!user.is_operator_approved(operator).await.unwrap());

        let calls = env.calls();
        assert_eq!(
            calls[0],
            Call::ApproveOperator { operator, roles: U256::from(0b1_0010) }
        );
        assert_eq!(
            calls[2],
            Call::DisapproveOperator { operator, roles: U256::from(0b1_0010) }
        );
    }

    #[test]
    fn test_encode_roles_ignores_order_and_duplicates() {
        let user = user(&MockEnv::default());
        let a = user.encode_roles(&[OperatorRole::Deposit, OperatorRole::Deposit, OperatorRole::Admin]);
        let b = user.encode_roles(&[OperatorRole::Admin, OperatorRole::Deposit]);
        assert_eq!(a, b);
        assert_eq!(a, U256::from(0b1001));
        assert_eq!(user.encode_roles(&[]), U256::zero());
    }

    #[tokio::test]
    async fn test_total_usd_defaults_to_zero() {
        let env = MockEnv::initialized();
        let user = user(&env);
        assert_eq!(user.get_total_usd_balance().await.unwrap(), 0.0);
        assert!(user.get_token_balances().await.unwrap().is_empty());

        env.with_state(|s| {
            s.portfolio.total_usd_balance = Some(Decimal::new(12_550, 2));
        });
        assert_eq!(user.get_total_usd_balance().await.unwrap(), 125.5);
    }

    #[tokio::test]
    async fn test_lp_positions_pass_through() {
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.lp_positions = json!([{ "pool": "0xabc" }]);
        });
        let positions = user(&env).get_lp_positions().await.unwrap();
        assert_eq!(positions[0]["pool"], "0xabc");
    }

    fn open_record(original: u64, filled: u64) -> OpenOrderRecord {
        serde_json::from_value(json!({
            "orderId": "7",
            "marketAddress": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "side": "buy",
            "originalSize": original.to_string(),
            "sizeFilled": filled.to_string(),
            "limitPrice": "2500",
            "placedAt": 1_700_000_000_000u64
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_open_orders_mapping() {
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.open_orders = vec![open_record(100, 25), open_record(10, 0)];
        });
        let market = Market::from_address_str("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let orders = user(&env)
            .get_open_orders(Some(&market), Page::default())
            .await
            .unwrap();

        assert_eq!(orders.len(), 2);
        for order in &orders {
            assert_eq!(order.status, OrderStatus::Open);
            assert_eq!(order.time_in_force, TimeInForce::Gtc);
            assert_eq!(order.order_type, OrderType::Limit);
            assert_eq!(
                order.remaining_amount.unwrap(),
                order.original_amount.unwrap() - order.filled_amount.unwrap()
            );
        }
        assert_eq!(orders[0].remaining_amount, Some(U256::from(75)));
        assert_eq!(
            orders[0].market_address_checksum(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert_eq!(
            env.calls()[0],
            Call::Rest {
                endpoint: "open_orders",
                market: Some(market.address),
                page: Some(Page::new(100, 0)),
            }
        );
    }

    #[tokio::test]
    async fn test_open_orders_overfill_is_malformed() {
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.open_orders = vec![open_record(10, 11)];
        });
        let err = user(&env)
            .get_open_orders(None, Page::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GteError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_filled_orders_and_history() {
        let env = MockEnv::initialized();
        let filled: FilledOrderRecord = serde_json::from_value(json!({
            "orderId": "9",
            "marketAddress": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "side": "sell",
            "sizeFilled": "5",
            "price": "3000",
            "filledAt": "1700000000500",
            "txnHash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b"
        }))
        .unwrap();
        let history: OrderHistoryRecord = serde_json::from_value(json!({
            "orderId": "9",
            "marketAddress": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            "side": "sell",
            "originalSize": "5",
            "sizeFilled": "5",
            "limitPrice": "3000",
            "placedAt": "1700000000000",
            "status": "filled"
        }))
        .unwrap();
        env.with_state(|s| {
            s.filled_orders = vec![filled];
            s.order_history = vec![history];
        });
        let user = user(&env);

        let filled = user.get_filled_orders(None, Page::default()).await.unwrap();
        assert_eq!(filled[0].status, OrderStatus::Filled);
        assert_eq!(filled[0].time_in_force, TimeInForce::Gtc);
        assert_eq!(filled[0].filled_at, Some(1_700_000_000_500));
        assert!(filled[0].txn_hash.is_some());

        let history = user
            .get_order_history(None, Page::new(10, 10))
            .await
            .unwrap();
        assert_eq!(history[0].status, OrderStatus::Filled);
        assert_eq!(history[0].remaining_amount, Some(U256::zero()));
    }

    #[tokio::test]
    async fn test_trades_mapping() {
        let env = MockEnv::initialized();
        env.with_state(|s| {
            s.trades = vec![serde_json::from_value(json!({
                "tradeId": 3,
                "marketAddress": "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
                "side": "ask",
                "price": "1",
                "size": "2",
                "timestamp": 1_700_000_000_000u64
            }))
            .unwrap()];
        });
        let market = Market::from_address_str("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        let trades = user(&env)
            .get_trades(&market, Page::default().offset(100))
            .await
            .unwrap();
        assert_eq!(trades[0].side, OrderSide::Sell);
        assert_eq!(trades[0].size, U256::from(2));
        assert!(matches!(
            env.calls()[0],
            Call::Rest { endpoint: "trades", page: Some(Page { limit: 100, offset: 100 }), .. }
        ));
    }
}
