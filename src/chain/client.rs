//! Signer-backed chain client

use std::sync::Arc;

use async_trait::async_trait;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, U256},
};
use tracing::info;

use crate::chain::contracts::ClobFactoryContract;
use crate::chain::traits::{ChainClient, ClobFactory};
use crate::config::Config;
use crate::error::{GteError, Result};

/// Provider plus local wallet signer
pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Chain client that owns the signer middleware and the CLOB factory handle
#[derive(Debug, Clone)]
pub struct ClobClient {
    /// Signing client shared by every contract handle
    client: Arc<SignerClient>,
    /// Expected chain ID
    chain_id: u64,
    /// CLOB factory address
    factory_address: Address,
    /// Factory handle, set by [`ClobClient::init`]
    clob_factory: Option<Arc<ClobFactoryContract<SignerClient>>>,
}

impl ClobClient {
    /// Create a chain client from configuration. Requires a wallet.
    pub fn new(config: &Config) -> Result<Self> {
        let chain_id = config.get_chain_id()?;
        let wallet = config
            .get_wallet()
            .map_err(|_| GteError::config("Wallet is required for chain operations"))?
            .clone()
            .with_chain_id(chain_id);

        let provider = Provider::new(Http::new(config.rpc_url.clone()));
        let client = Arc::new(SignerMiddleware::new(provider, wallet));

        Ok(Self {
            client,
            chain_id,
            factory_address: config.contracts.clob_factory,
            clob_factory: None,
        })
    }

    /// Verify the RPC chain ID and bind the CLOB factory
    pub async fn init(&mut self) -> Result<()> {
        let remote = self
            .client
            .get_chainid()
            .await
            .map_err(|e| GteError::provider(format!("Failed to get chain ID: {}", e)))?;
        if remote != U256::from(self.chain_id) {
            return Err(GteError::config(format!(
                "RPC chain ID {} does not match configured chain ID {}",
                remote, self.chain_id
            )));
        }

        self.clob_factory = Some(Arc::new(ClobFactoryContract::new(
            self.factory_address,
            self.client.clone(),
        )?));
        info!("✅ CLOB client initialized on chain {}", self.chain_id);
        Ok(())
    }

    /// Whether [`ClobClient::init`] has completed
    pub fn is_initialized(&self) -> bool {
        self.clob_factory.is_some()
    }

    /// Shared signing client
    pub fn client(&self) -> Arc<SignerClient> {
        self.client.clone()
    }
}

#[async_trait]
impl ChainClient for ClobClient {
    async fn get_balance(&self, address: Address) -> Result<U256> {
        self.client
            .get_balance(address, None)
            .await
            .map_err(|e| GteError::provider(format!("Failed to get balance: {}", e)))
    }

    fn clob_factory(&self) -> Option<Arc<dyn ClobFactory>> {
        self.clob_factory
            .clone()
            .map(|factory| factory as Arc<dyn ClobFactory>)
    }

    fn factory_address(&self) -> Address {
        self.factory_address
    }
}
