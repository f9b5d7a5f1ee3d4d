//! Wrapped Token - hub-side representation of bridged tokens
//!
//! A standard CW20 (delegating to `cw20-base`) whose supply is controlled
//! entirely by the hub bridge: the bridge is the only minter, and it may burn
//! from any holder when that holder bridges out. There is no public burn, so
//! wrapped supply can only leave through the bridge.

pub mod contract;
pub mod error;
pub mod msg;

pub use crate::error::ContractError;
