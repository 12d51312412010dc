//! REST API access for account data

pub mod client;
pub mod utils;

pub use client::{ApiClient, UserApi};
