//! State definitions for the origin bridge contract

use bridge_common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:origin-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Messaging endpoint on this chain; the only caller of `OnPacketReceived`
    pub endpoint: Addr,
    /// Endpoint id of the hub chain
    pub hub_chain_id: u32,
    /// Denom that pays messaging fees (and can itself be bridged)
    pub native_denom: String,
    pub native_decimals: u8,
    /// When false, transport options must be empty
    pub use_custom_options: bool,
}

/// A token this ledger custodies. Immutable once written.
#[cw_serde]
pub struct TokenRegistration {
    pub asset: AssetInfo,
    pub local_decimals: u8,
    pub shared_decimals: u8,
    /// `10^(local_decimals - shared_decimals)`
    pub conversion_rate: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// token key (CW20 address or native denom) => registration
pub const TOKENS: Map<&str, TokenRegistration> = Map::new("tokens");

/// token key => value locked for the hub, in shared decimals
pub const LOCKED_VALUE_SD: Map<&str, Uint128> = Map::new("locked_value_sd");

/// remote chain id => trusted ledger address on that chain
pub const PEERS: Map<u32, String> = Map::new("peers");
