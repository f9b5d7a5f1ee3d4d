//! Messaging transport interface
//!
//! The ledgers never talk to each other directly. Each chain runs an
//! endpoint contract that quotes and accepts outbound payloads and calls
//! `OnPacketReceived` on the destination ledger when delivering. Only the
//! message shapes live here; the endpoint itself is an external collaborator.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

/// Execute messages accepted by an endpoint
#[cw_serde]
pub enum EndpointExecuteMsg {
    /// Send `payload` to the ledger peer on `dst_chain_id`.
    /// Attached funds pay the messaging fee; excess goes to `refund_address`.
    Send {
        dst_chain_id: u32,
        payload: Binary,
        options: Binary,
        refund_address: String,
    },
}

/// Query messages accepted by an endpoint
#[cw_serde]
#[derive(QueryResponses)]
pub enum EndpointQueryMsg {
    #[returns(QuoteResponse)]
    Quote {
        dst_chain_id: u32,
        payload: Binary,
        options: Binary,
    },
}

/// Messaging fee quote, in the chain's native denom
#[cw_serde]
pub struct QuoteResponse {
    pub native_fee: Uint128,
}

/// Callback an endpoint invokes on the receiving ledger
#[cw_serde]
pub enum ReceiverExecuteMsg {
    OnPacketReceived {
        src_chain_id: u32,
        /// Ledger address on the source chain that emitted the packet
        sender: String,
        payload: Binary,
    },
}

/// Ask the endpoint what sending `payload` to `dst_chain_id` costs.
pub fn quote(
    querier: &QuerierWrapper,
    endpoint: &Addr,
    dst_chain_id: u32,
    payload: &Binary,
    options: &Binary,
) -> StdResult<Uint128> {
    let response: QuoteResponse = querier.query_wasm_smart(
        endpoint,
        &EndpointQueryMsg::Quote {
            dst_chain_id,
            payload: payload.clone(),
            options: options.clone(),
        },
    )?;
    Ok(response.native_fee)
}

/// Build the endpoint `Send` call, forwarding `fee` of `denom`.
pub fn send_msg(
    endpoint: &Addr,
    dst_chain_id: u32,
    payload: Binary,
    options: Binary,
    refund_address: String,
    fee: Uint128,
    denom: &str,
) -> StdResult<CosmosMsg> {
    let funds = if fee.is_zero() {
        vec![]
    } else {
        coins(fee.u128(), denom)
    };
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: endpoint.to_string(),
        msg: to_json_binary(&EndpointExecuteMsg::Send {
            dst_chain_id,
            payload,
            options,
            refund_address,
        })?,
        funds,
    }))
}
