//! State definitions for the hub bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:hub-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Basis point denominator; fees must stay strictly below it
pub const BPS_DENOMINATOR: u128 = 10_000;

#[cw_serde]
pub struct Config {
    /// Messaging endpoint on this chain; the only caller of `OnPacketReceived`
    pub endpoint: Addr,
    /// Denom that pays messaging fees
    pub native_denom: String,
    /// Fee retained on bridge-out, in basis points
    pub withdrawal_fee_bps: u16,
    /// When false, transport options must be empty
    pub use_custom_options: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// (wrapped token, origin chain id) => origin token key
pub const LOCAL_TO_REMOTE: Map<(&Addr, u32), String> = Map::new("local_to_remote");

/// (origin chain id, origin token key) => wrapped token
pub const REMOTE_TO_LOCAL: Map<(u32, &str), Addr> = Map::new("remote_to_local");

/// (origin chain id, origin token key) => wrapped supply backed by that origin
pub const TOTAL_VALUE_LOCKED: Map<(u32, &str), Uint128> = Map::new("total_value_locked");

/// origin chain id => trusted origin ledger address
pub const PEERS: Map<u32, String> = Map::new("peers");
