//! Execute handlers for the hub bridge contract.
//!
//! - `outgoing` - Bridge (burn and emit Unlock)
//! - `incoming` - OnPacketReceived (Mint)
//! - `config` - Token pairing, withdrawal fee and peers
//! - `admin` - Two-step ownership transfer

mod admin;
mod config;
mod incoming;
mod outgoing;

pub use admin::*;
pub use config::*;
pub use incoming::*;
pub use outgoing::*;
