//! On-chain collaborators: traits, ethers-backed handles, transaction helpers

pub mod client;
pub mod contracts;
pub mod traits;
pub mod tx;

pub use client::{ClobClient, SignerClient};
pub use contracts::*;
pub use traits::*;
pub use tx::*;
