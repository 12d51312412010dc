//! # GTE Rust SDK
//!
//! A Rust SDK for account operations on the GTE orderbook DEX.
//!
//! ## Features
//!
//! - **User Client**: one handle per account for balances, deposits, withdrawals and operators
//! - **Chain Access**: ethers-based ERC20, WETH, CLOB manager and CLOB factory handles
//! - **Account API**: portfolio, trades and order history over REST
//! - **Operator Roles**: role masks with opt-in checks for sensitive roles
//! - **Error Handling**: a single error type for every operation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gte_rust_sdk::{Config, ContractAddresses, Page, TxParams, UserClient};
//! use ethers::types::U256;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let contracts = ContractAddresses::parse(
//!         "0x776401b9BC8aAe31A685731B7147D4445fD9FB19", // WETH
//!         "0xD7310f8A0D569Dd0803D28BB29f4E0A471fA84F6", // CLOB manager
//!         "0xfaf0BB6F2f4690CA4319e489F6Dc742167B9fB10", // CLOB factory
//!     )?;
//!     let config = Config::testnet("", Some("your_private_key"), contracts)?;
//!
//!     let user = UserClient::connect(config).await?;
//!
//!     // Deposit 0.1 WETH, wrapping native currency if needed
//!     let weth = user.config().weth_address();
//!     user.deposit(weth, U256::exp10(17), &TxParams::new()).await?;
//!
//!     let orders = user.get_open_orders(None, Page::default()).await?;
//!     println!("Open orders: {}", orders.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod chain;
pub mod config;
pub mod error;
pub mod types;
pub mod user;

// Re-exports for convenience
pub use chain::TxParams;
pub use config::{Config, ContractAddresses, Network};
pub use error::{GteError, Result};
pub use types::*;
pub use user::UserClient;
