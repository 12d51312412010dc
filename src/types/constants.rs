//! Constants used throughout the GTE SDK

/// Chain IDs for different networks
pub mod chain_ids {
    /// MegaETH testnet chain ID
    pub const MEGAETH_TESTNET_CHAIN_ID: u64 = 6342;
}

/// Default API endpoints
pub mod endpoints {
    /// GTE testnet REST API base URL
    pub const GTE_TESTNET_API_URL: &str = "https://api-testnet.gte.xyz/v1";

    /// MegaETH testnet RPC URL
    pub const MEGAETH_TESTNET_RPC_URL: &str = "https://carrot.megaeth.com/rpc";
}

/// Account REST API paths, relative to the API base URL
pub mod paths {
    /// Portfolio path suffix
    pub const PORTFOLIO: &str = "portfolio";
    /// LP positions path suffix
    pub const LP_POSITIONS: &str = "lppositions";
    /// Trades path suffix
    pub const TRADES: &str = "trades";
    /// Open orders path suffix
    pub const OPEN_ORDERS: &str = "open_orders";
    /// Filled orders path suffix
    pub const FILLED_ORDERS: &str = "filled_orders";
    /// Order history path suffix
    pub const ORDER_HISTORY: &str = "order_history";
}

/// Pagination defaults
pub mod pagination {
    /// Default page size
    pub const DEFAULT_LIMIT: u32 = 100;
    /// Default page offset
    pub const DEFAULT_OFFSET: u32 = 0;
}

/// Contract ABI constants
pub mod abi {
    /// ERC20 ABI for token operations
    pub const ERC20_ABI: &str = r#"[
        {
            "inputs": [{"internalType": "address", "name": "account", "type": "address"}],
            "name": "balanceOf",
            "outputs": [{"internalType": "uint256", "name": "", "type": "uint256"}],
            "stateMutability": "view",
            "type": "function"
        },
        {
            "inputs": [
                {"internalType": "address", "name": "spender", "type": "address"},
                {"internalType": "uint256", "name": "amount", "type": "uint256"}
            ],
            "name": "approve",
            "outputs": [{"internalType": "bool", "name": "", "type": "bool"}],
            "stateMutability": "nonpayable",
            "type": "function"
        },
        {
            "inputs": [
                {"internalType": "address", "name": "owner", "type": "address"},
                {"internalType": "address", "name": "spender", "type": "address"}
            ],
            "name": "allowance",
            "outputs": [{"internalType": "uint256", "name": "", "type": "uint256"}],
            "stateMutability": "view",
            "type": "function"
        }
    ]"#;

    /// WETH ABI; extends the ERC20 surface with native wrapping
    pub const WETH_ABI: &str = r#"[
        {
            "inputs": [{"internalType": "address", "name": "account", "type": "address"}],
            "name": "balanceOf",
            "outputs": [{"internalType": "uint256", "name": "", "type": "uint256"}],
            "stateMutability": "view",
            "type": "function"
        },
        {
            "inputs": [
                {"internalType": "address", "name": "spender", "type": "address"},
                {"internalType": "uint256", "name": "amount", "type": "uint256"}
            ],
            "name": "approve",
            "outputs": [{"internalType": "bool", "name": "", "type": "bool"}],
            "stateMutability": "nonpayable",
            "type": "function"
        },
        {
            "inputs": [
                {"internalType": "address", "name": "owner", "type": "address"},
                {"internalType": "address", "name": "spender", "type": "address"}
            ],
            "name": "allowance",
            "outputs": [{"internalType": "uint256", "name": "", "type": "uint256"}],
            "stateMutability": "view",
            "type": "function"
        },
        {
            "inputs": [],
            "name": "deposit",
            "outputs": [],
            "stateMutability": "payable",
            "type": "function"
        },
        {
            "inputs": [{"internalType": "uint256", "name": "wad", "type": "uint256"}],
            "name": "withdraw",
            "outputs": [],
            "stateMutability": "nonpayable",
            "type": "function"
        }
    ]"#;

    /// CLOB manager ABI for operator management
    pub const CLOB_MANAGER_ABI: &str = r#"[
        {
            "inputs": [
                {"internalType": "address", "name": "operator", "type": "address"},
                {"internalType": "uint256", "name": "roles", "type": "uint256"}
            ],
            "name": "approveOperator",
            "outputs": [],
            "stateMutability": "nonpayable",
            "type": "function"
        },
        {
            "inputs": [
                {"internalType": "address", "name": "operator", "type": "address"},
                {"internalType": "uint256", "name": "roles", "type": "uint256"}
            ],
            "name": "disapproveOperator",
            "outputs": [],
            "stateMutability": "nonpayable",
            "type": "function"
        },
        {
            "inputs": [
                {"internalType": "address", "name": "account", "type": "address"},
                {"internalType": "address", "name": "operator", "type": "address"}
            ],
            "name": "approvedOperators",
            "outputs": [{"internalType": "bool", "name": "", "type": "bool"}],
            "stateMutability": "view",
            "type": "function"
        }
    ]"#;

    /// CLOB factory ABI for exchange-held balances
    pub const CLOB_FACTORY_ABI: &str = r#"[
        {
            "inputs": [
                {"internalType": "address", "name": "account", "type": "address"},
                {"internalType": "address", "name": "token", "type": "address"},
                {"internalType": "uint256", "name": "amount", "type": "uint256"},
                {"internalType": "bool", "name": "fromOperator", "type": "bool"}
            ],
            "name": "deposit",
            "outputs": [],
            "stateMutability": "nonpayable",
            "type": "function"
        },
        {
            "inputs": [
                {"internalType": "address", "name": "account", "type": "address"},
                {"internalType": "address", "name": "token", "type": "address"},
                {"internalType": "uint256", "name": "amount", "type": "uint256"},
                {"internalType": "bool", "name": "toOperator", "type": "bool"}
            ],
            "name": "withdraw",
            "outputs": [],
            "stateMutability": "nonpayable",
            "type": "function"
        },
        {
            "inputs": [
                {"internalType": "address", "name": "account", "type": "address"},
                {"internalType": "address", "name": "token", "type": "address"}
            ],
            "name": "getAccountBalance",
            "outputs": [{"internalType": "uint256", "name": "", "type": "uint256"}],
            "stateMutability": "view",
            "type": "function"
        }
    ]"#;
}
