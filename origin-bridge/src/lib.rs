//! Origin Bridge - lock side of the lock-and-mint token bridge
//!
//! One instance runs on every origin chain. It custodies the canonical
//! tokens (CW20 or the native denom), tracks how much of each is backing
//! wrapped supply on the hub, and emits Mint packets through the messaging
//! endpoint. Unlock packets from the hub release custody back to users.
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `decimals` - Local/shared decimal conversion

pub mod contract;
pub mod decimals;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
