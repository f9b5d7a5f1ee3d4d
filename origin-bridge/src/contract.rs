//! Origin Bridge Contract - Entry Points

use bridge_common::{Ownership, OWNERSHIP};
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership, execute_bridge, execute_bridge_native,
    execute_cancel_ownership_transfer, execute_on_packet_received, execute_register_token,
    execute_set_hub_chain_id, execute_set_peer, execute_set_use_custom_options,
    execute_transfer_ownership, execute_withdraw_fee,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_collected_fees, query_config, query_locked_value, query_ownership, query_peer,
    query_quote, query_token, query_tokens,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let endpoint = deps.api.addr_validate(&msg.endpoint)?;

    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "native denom cannot be empty".to_string(),
        });
    }

    let config = Config {
        endpoint,
        hub_chain_id: msg.hub_chain_id,
        native_denom: msg.native_denom,
        native_decimals: msg.native_decimals,
        use_custom_options: false,
    };
    CONFIG.save(deps.storage, &config)?;
    OWNERSHIP.save(deps.storage, &Ownership::new(owner.clone()))?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("endpoint", config.endpoint)
        .add_attribute("hub_chain_id", config.hub_chain_id.to_string())
        .add_attribute("native_denom", config.native_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Outgoing transfers
        ExecuteMsg::Bridge {
            token,
            amount,
            recipient,
            options,
            refund_address,
        } => execute_bridge(
            deps,
            env,
            info,
            token,
            amount,
            recipient,
            options,
            refund_address,
        ),
        ExecuteMsg::BridgeNative {
            amount,
            recipient,
            options,
            refund_address,
        } => execute_bridge_native(deps, info, amount, recipient, options, refund_address),

        // Inbound packets
        ExecuteMsg::OnPacketReceived {
            src_chain_id,
            sender,
            payload,
        } => execute_on_packet_received(deps, info, src_chain_id, sender, payload),

        // Configuration
        ExecuteMsg::RegisterToken {
            token,
            shared_decimals,
        } => execute_register_token(deps, info, token, shared_decimals),
        ExecuteMsg::SetHubChainId { chain_id } => execute_set_hub_chain_id(deps, info, chain_id),
        ExecuteMsg::SetPeer { chain_id, peer } => execute_set_peer(deps, info, chain_id, peer),
        ExecuteMsg::SetUseCustomOptions { enabled } => {
            execute_set_use_custom_options(deps, info, enabled)
        }
        ExecuteMsg::WithdrawFee { token, to, amount } => {
            execute_withdraw_fee(deps, env, info, token, to, amount)
        }

        // Ownership
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),
        ExecuteMsg::CancelOwnershipTransfer {} => execute_cancel_ownership_transfer(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::Peer { chain_id } => to_json_binary(&query_peer(deps, chain_id)?),
        QueryMsg::Token { token } => to_json_binary(&query_token(deps, token)?),
        QueryMsg::Tokens { start_after, limit } => {
            to_json_binary(&query_tokens(deps, start_after, limit)?)
        }
        QueryMsg::LockedValue { token } => to_json_binary(&query_locked_value(deps, token)?),
        QueryMsg::CollectedFees { token } => {
            to_json_binary(&query_collected_fees(deps, env, token)?)
        }
        QueryMsg::Quote { options } => to_json_binary(&query_quote(deps, options)?),
    }
}
