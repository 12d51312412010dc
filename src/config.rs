//! Configuration for GTE SDK

use crate::error::{GteError, Result};
use crate::types::{chain_ids, endpoints};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::Address;
use std::str::FromStr;
use url::Url;

/// Network type for GTE
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Network {
    /// MegaETH testnet
    Testnet,
    /// Any other deployment; endpoints and chain ID must be supplied
    Custom,
}

impl FromStr for Network {
    type Err = GteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "custom" => Ok(Network::Custom),
            _ => Err(GteError::config("Invalid network. Use 'testnet' or 'custom'")),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Testnet => write!(f, "testnet"),
            Network::Custom => write!(f, "custom"),
        }
    }
}

/// Deployed contract addresses the account client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    /// Wrapped native token
    pub weth: Address,
    /// CLOB manager (operator approvals)
    pub clob_manager: Address,
    /// CLOB factory (exchange-held balances, deposit spender)
    pub clob_factory: Address,
}

impl ContractAddresses {
    /// Parse contract addresses from hex strings
    pub fn parse(weth: &str, clob_manager: &str, clob_factory: &str) -> Result<Self> {
        Ok(Self {
            weth: parse_address("weth", weth)?,
            clob_manager: parse_address("clob_manager", clob_manager)?,
            clob_factory: parse_address("clob_factory", clob_factory)?,
        })
    }
}

fn parse_address(name: &str, value: &str) -> Result<Address> {
    if !value.starts_with("0x") || value.len() != 42 {
        return Err(GteError::config(format!(
            "Invalid {} address format. Expected 0x followed by 40 hex characters",
            name
        )));
    }
    value
        .parse::<Address>()
        .map_err(|e| GteError::config(format!("Invalid {} address: {}", name, e)))
}

/// Configuration for GTE client
#[derive(Debug, Clone)]
pub struct Config {
    /// Chain ID override
    pub chain_id: Option<u64>,

    /// REST API base URL
    pub api_url: Url,

    /// JSON-RPC URL
    pub rpc_url: Url,

    /// Network
    pub network: Network,

    /// Account address
    pub account: Address,

    /// Wallet signing account transactions
    pub wallet: Option<LocalWallet>,

    /// Contract addresses
    pub contracts: ContractAddresses,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Create a new configuration
    ///
    /// # Arguments
    ///
    /// * `api_url` - The REST API base URL (e.g., "https://api-testnet.gte.xyz/v1")
    /// * `rpc_url` - The JSON-RPC URL
    /// * `network` - Network name ("testnet" or "custom")
    /// * `account` - Account address (0x... format); may be empty when a key is given
    /// * `private_key` - Private key (hex string); the account is derived from it
    /// * `contracts` - Deployed contract addresses
    pub fn new(
        api_url: &str,
        rpc_url: &str,
        network: &str,
        account: &str,
        private_key: Option<&str>,
        contracts: ContractAddresses,
    ) -> Result<Self> {
        let api_url = Url::parse(api_url).map_err(|_| GteError::config("Invalid API URL"))?;
        let rpc_url = Url::parse(rpc_url).map_err(|_| GteError::config("Invalid RPC URL"))?;
        let network = Network::from_str(network)?;

        let wallet = private_key
            .map(|key| {
                let bytes = hex::decode(key.trim_start_matches("0x"))
                    .map_err(|e| GteError::config(format!("Invalid private key hex: {}", e)))?;
                LocalWallet::from_bytes(&bytes)
                    .map_err(|e| GteError::config(format!("Invalid private key: {}", e)))
            })
            .transpose()?;

        // The wallet is authoritative; an explicit address must agree with it
        let account = match (&wallet, account.is_empty()) {
            (Some(wallet), true) => wallet.address(),
            (Some(wallet), false) => {
                let given = parse_address("account", account)?;
                if given != wallet.address() {
                    return Err(GteError::config(format!(
                        "Account {:?} does not match private key address {:?}",
                        given,
                        wallet.address()
                    )));
                }
                given
            }
            (None, _) => parse_address("account", account)?,
        };

        Ok(Self {
            chain_id: None,
            api_url,
            rpc_url,
            network,
            account,
            wallet,
            contracts,
            timeout_secs: 30,
        })
    }

    /// Create a testnet configuration with the default endpoints
    pub fn testnet(
        account: &str,
        private_key: Option<&str>,
        contracts: ContractAddresses,
    ) -> Result<Self> {
        Self::new(
            endpoints::GTE_TESTNET_API_URL,
            endpoints::MEGAETH_TESTNET_RPC_URL,
            "testnet",
            account,
            private_key,
            contracts,
        )
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the chain ID
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Check if this is testnet
    pub fn is_testnet(&self) -> bool {
        self.network == Network::Testnet
    }

    /// Wrapped native token address
    pub fn weth_address(&self) -> Address {
        self.contracts.weth
    }

    /// Get the wallet
    pub fn get_wallet(&self) -> Result<&LocalWallet> {
        self.wallet
            .as_ref()
            .ok_or_else(|| GteError::config("Wallet is not available"))
    }

    /// Get the chain ID for the current network
    pub fn get_chain_id(&self) -> Result<u64> {
        match (self.chain_id, &self.network) {
            (Some(chain_id), _) => Ok(chain_id),
            (None, Network::Testnet) => Ok(chain_ids::MEGAETH_TESTNET_CHAIN_ID),
            (None, Network::Custom) => Err(GteError::config(
                "Chain ID must be set for custom networks",
            )),
        }
    }
}
