//! Outgoing transfer handler (Bridge).
//!
//! Wrapped tokens are burned on the hub and an Unlock packet releases the
//! canonical token on the origin chain. The request is bounded by what that
//! origin chain locked, never by total wrapped supply.

use bridge_common::transport::{quote, send_msg};
use bridge_common::{packet_hash, validate_remote_address, UnlockPacket};
use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};
use wrapped_token::msg::ExecuteMsg as WrappedTokenMsg;

use crate::error::ContractError;
use crate::state::{BPS_DENOMINATOR, CONFIG, LOCAL_TO_REMOTE, PEERS, TOTAL_VALUE_LOCKED};

#[allow(clippy::too_many_arguments)]
pub fn execute_bridge(
    deps: DepsMut,
    info: MessageInfo,
    local_token: String,
    destination_chain_id: u32,
    amount: Uint128,
    recipient: String,
    unwrap_to_native: bool,
    options: Option<Binary>,
    refund_address: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    // an Unlock the origin cannot pay out would strand the burned value
    validate_remote_address(&recipient).map_err(|_| ContractError::InvalidRecipient)?;

    let local = deps
        .api
        .addr_validate(&local_token)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;
    let origin_token = LOCAL_TO_REMOTE
        .may_load(deps.storage, (&local, destination_chain_id))?
        .ok_or(ContractError::UnsupportedToken {
            token: local_token.clone(),
        })?;
    let peer = PEERS
        .may_load(deps.storage, destination_chain_id)?
        .ok_or(ContractError::PeerNotSet {
            chain_id: destination_chain_id,
        })?;

    let options = options.unwrap_or_default();
    if !config.use_custom_options && !options.is_empty() {
        return Err(ContractError::CustomOptionsDisabled);
    }

    let available = TOTAL_VALUE_LOCKED
        .may_load(deps.storage, (destination_chain_id, origin_token.as_str()))?
        .unwrap_or_default();
    if amount > available {
        return Err(ContractError::InsufficientLiquidity {
            chain_id: destination_chain_id,
            requested: amount,
            available,
        });
    }
    TOTAL_VALUE_LOCKED.save(
        deps.storage,
        (destination_chain_id, origin_token.as_str()),
        &(available - amount),
    )?;

    let fee = amount.multiply_ratio(config.withdrawal_fee_bps as u128, BPS_DENOMINATOR);
    let payload = UnlockPacket {
        token: origin_token.clone(),
        recipient: recipient.clone(),
        withdraw_amount_sd: amount - fee,
        total_amount_sd: amount,
        unwrap_to_native,
    }
    .encode()?;

    let fee_required = quote(
        &deps.querier,
        &config.endpoint,
        destination_chain_id,
        &payload,
        &options,
    )?;
    let fee_sent = paid_amount(&info, &config.native_denom)?;
    if fee_sent < fee_required {
        return Err(ContractError::InsufficientValue {
            required: fee_required,
            sent: fee_sent,
        });
    }

    let hash = packet_hash(&payload);
    let burn = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: local.to_string(),
        msg: to_json_binary(&WrappedTokenMsg::BridgeBurn {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });
    let refund = refund_address.unwrap_or_else(|| info.sender.to_string());
    let send = send_msg(
        &config.endpoint,
        destination_chain_id,
        payload,
        options,
        refund,
        fee_sent,
        &config.native_denom,
    )?;

    Ok(Response::new()
        .add_message(burn)
        .add_message(send)
        .add_attribute("method", "bridge")
        .add_attribute("local_token", local)
        .add_attribute("origin_token", origin_token)
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("dst_chain_id", destination_chain_id.to_string())
        .add_attribute("peer", peer)
        .add_attribute("amount_sd", amount)
        .add_attribute("withdrawal_fee", fee)
        .add_attribute("unwrap_to_native", unwrap_to_native.to_string())
        .add_attribute("fee", fee_required)
        .add_attribute("packet_hash", hash))
}

/// Amount of `denom` attached; any other denom is rejected.
fn paid_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    let mut paid = Uint128::zero();
    for coin in &info.funds {
        if coin.denom != denom {
            return Err(ContractError::UnexpectedFunds {
                denom: coin.denom.clone(),
            });
        }
        paid = paid.checked_add(coin.amount)?;
    }
    Ok(paid)
}
