//! Execute handlers for the origin bridge contract.
//!
//! - `outgoing` - Bridge and BridgeNative (lock and emit Mint)
//! - `incoming` - OnPacketReceived (Unlock)
//! - `config` - Token registration, hub chain, peers and fee withdrawal
//! - `admin` - Two-step ownership transfer

mod admin;
mod config;
mod incoming;
mod outgoing;

pub use admin::*;
pub use config::*;
pub use incoming::*;
pub use outgoing::*;
