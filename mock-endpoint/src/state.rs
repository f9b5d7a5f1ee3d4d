use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:bridge-mock-endpoint";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Endpoint id of the chain this instance represents
    pub chain_id: u32,
    pub native_denom: String,
    pub base_fee: Uint128,
    pub per_byte_fee: Uint128,
}

/// A packet accepted by `Send`, waiting for the harness to relay it.
#[cw_serde]
pub struct OutboundPacket {
    pub nonce: u64,
    pub src_chain_id: u32,
    pub dst_chain_id: u32,
    /// Ledger that sent the packet
    pub sender: Addr,
    pub payload: Binary,
    pub options: Binary,
    pub fee_paid: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const NEXT_NONCE: Item<u64> = Item::new("next_nonce");

/// nonce => packet
pub const OUTBOX: Map<u64, OutboundPacket> = Map::new("outbox");

/// (src_chain_id, nonce) => delivered
pub const DELIVERED: Map<(u32, u64), bool> = Map::new("delivered");
