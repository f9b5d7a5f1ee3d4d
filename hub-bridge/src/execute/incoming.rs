//! Inbound packet handler (Mint from an origin chain).

use bridge_common::{packet_hash, MintPacket, PacketType};
use cosmwasm_std::{to_json_binary, Binary, DepsMut, MessageInfo, Response, WasmMsg};
use wrapped_token::msg::ExecuteMsg as WrappedTokenMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, PEERS, REMOTE_TO_LOCAL, TOTAL_VALUE_LOCKED};

/// Mint wrapped tokens for a Mint packet and credit the source chain's ledger.
pub fn execute_on_packet_received(
    deps: DepsMut,
    info: MessageInfo,
    src_chain_id: u32,
    sender: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.endpoint {
        return Err(ContractError::NotAuthorized);
    }
    let peer = PEERS.may_load(deps.storage, src_chain_id)?;
    if peer.as_deref() != Some(sender.as_str()) {
        return Err(ContractError::InvalidPeer {
            chain_id: src_chain_id,
            sender,
        });
    }

    let packet_type = PacketType::from_payload(&payload)?;
    if packet_type != PacketType::Mint {
        return Err(ContractError::UnknownPacketType {
            tag: packet_type.tag(),
        });
    }
    let packet = MintPacket::decode(&payload)?;

    let local_token = REMOTE_TO_LOCAL
        .may_load(deps.storage, (src_chain_id, packet.token.as_str()))?
        .ok_or(ContractError::UnsupportedToken {
            token: packet.token.clone(),
        })?;

    let locked = TOTAL_VALUE_LOCKED
        .may_load(deps.storage, (src_chain_id, packet.token.as_str()))?
        .unwrap_or_default()
        .checked_add(packet.amount_sd)?;
    TOTAL_VALUE_LOCKED.save(deps.storage, (src_chain_id, packet.token.as_str()), &locked)?;

    let recipient = deps
        .api
        .addr_validate(&packet.recipient)
        .map_err(|_| ContractError::InvalidRecipient)?;

    let mut response = Response::new();
    if !packet.amount_sd.is_zero() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: local_token.to_string(),
            msg: to_json_binary(&WrappedTokenMsg::Mint {
                recipient: recipient.to_string(),
                amount: packet.amount_sd,
            })?,
            funds: vec![],
        });
    }

    Ok(response
        .add_attribute("method", "on_packet_received")
        .add_attribute("src_chain_id", src_chain_id.to_string())
        .add_attribute("origin_token", packet.token)
        .add_attribute("local_token", local_token)
        .add_attribute("recipient", recipient)
        .add_attribute("amount_sd", packet.amount_sd)
        .add_attribute("total_value_locked", locked)
        .add_attribute("packet_hash", packet_hash(&payload)))
}
