//! Inbound packet handler (Unlock from the hub).

use bridge_common::{packet_hash, Asset, PacketType, UnlockPacket};
use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::decimals::sd_to_ld;
use crate::error::ContractError;
use crate::state::{CONFIG, LOCKED_VALUE_SD, PEERS, TOKENS};

/// Release custody for an Unlock packet delivered by the endpoint.
///
/// The locked value drops by the full `total_amount_sd`; only
/// `withdraw_amount_sd` is paid out, so the difference stays behind as a
/// withdrawable fee.
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
    if src_chain_id != config.hub_chain_id {
        return Err(ContractError::InvalidSourceChain {
            chain_id: src_chain_id,
        });
    }
    let peer = PEERS.may_load(deps.storage, src_chain_id)?;
    if peer.as_deref() != Some(sender.as_str()) {
        return Err(ContractError::InvalidPeer {
            chain_id: src_chain_id,
            sender,
        });
    }

    let packet_type = PacketType::from_payload(&payload)?;
    if packet_type != PacketType::Unlock {
        return Err(ContractError::UnknownPacketType {
            tag: packet_type.tag(),
        });
    }
    let packet = UnlockPacket::decode(&payload)?;

    let registration = TOKENS.may_load(deps.storage, &packet.token)?.ok_or(
        ContractError::UnsupportedToken {
            token: packet.token.clone(),
        },
    )?;

    let locked = LOCKED_VALUE_SD
        .may_load(deps.storage, &packet.token)?
        .unwrap_or_default();
    let remaining = locked.checked_sub(packet.total_amount_sd).map_err(|_| {
        ContractError::InsufficientLiquidity {
            requested: packet.total_amount_sd,
            available: locked,
        }
    })?;
    LOCKED_VALUE_SD.save(deps.storage, &packet.token, &remaining)?;

    let recipient = deps
        .api
        .addr_validate(&packet.recipient)
        .map_err(|_| ContractError::InvalidRecipient)?;
    let withdraw_amount = sd_to_ld(packet.withdraw_amount_sd, registration.conversion_rate)?;
    let fee_amount = sd_to_ld(packet.fee_sd(), registration.conversion_rate)?;

    let mut response = Response::new();
    if !withdraw_amount.is_zero() {
        // native payouts are always bank coin; there is no wrapped native token here
        let transfer = Asset::new(registration.asset, withdraw_amount).transfer_msg(&recipient)?;
        response = response.add_message(transfer);
    }

    Ok(response
        .add_attribute("method", "on_packet_received")
        .add_attribute("src_chain_id", src_chain_id.to_string())
        .add_attribute("token", packet.token)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", withdraw_amount)
        .add_attribute("fee", fee_amount)
        .add_attribute("amount_sd", packet.total_amount_sd)
        .add_attribute("unwrap_to_native", packet.unwrap_to_native.to_string())
        .add_attribute("packet_hash", packet_hash(&payload)))
}
