//! Type definitions for the GTE account API

pub mod constants;
pub mod market;
pub mod orders;
pub mod account;
pub mod api;
pub mod operator;

// Re-export commonly used types
pub use constants::*;
pub use market::*;
pub use orders::*;
pub use account::*;
pub use api::*;
pub use operator::*;
