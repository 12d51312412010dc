//! Account-facing client

pub mod client;

#[cfg(test)]
pub(crate) mod mock;

pub use client::UserClient;
