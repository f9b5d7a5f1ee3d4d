//! Hub Bridge - mint side of the lock-and-mint token bridge
//!
//! A single instance on the hub chain pairs each wrapped token with its
//! canonical token on every origin chain and keeps a separate value-locked
//! ledger per `(origin chain, origin token)`. Wrapped supply minted against
//! one origin can only be redeemed on that origin up to what it locked, so a
//! drained or compromised origin cannot pull liquidity from the others.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
