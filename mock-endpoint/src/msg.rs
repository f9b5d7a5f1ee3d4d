use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use bridge_common::QuoteResponse;

use crate::state::{Config, OutboundPacket};

#[cw_serde]
pub struct InstantiateMsg {
    pub chain_id: u32,
    pub native_denom: String,
    pub base_fee: Uint128,
    pub per_byte_fee: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Same shape as `EndpointExecuteMsg::Send`
    Send {
        dst_chain_id: u32,
        payload: Binary,
        options: Binary,
        refund_address: String,
    },
    /// Hand a packet emitted on `src_chain_id` to `receiver` on this chain.
    Deliver {
        src_chain_id: u32,
        nonce: u64,
        sender: String,
        receiver: String,
        payload: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Same shape as `EndpointQueryMsg::Quote`
    #[returns(QuoteResponse)]
    Quote {
        dst_chain_id: u32,
        payload: Binary,
        options: Binary,
    },

    #[returns(OutboxResponse)]
    Outbox {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(Config)]
    Config {},
}

#[cw_serde]
pub struct OutboxResponse {
    pub packets: Vec<OutboundPacket>,
}
