//! Hub Bridge Contract - Entry Points

use bridge_common::{Ownership, OWNERSHIP};
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership, execute_bridge, execute_cancel_ownership_transfer,
    execute_on_packet_received, execute_register_token, execute_set_peer,
    execute_set_use_custom_options, execute_set_withdrawal_fee_bps, execute_transfer_ownership,
    validate_fee_bps,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_config, query_local_to_remote, query_ownership, query_pairings, query_peer,
    query_quote, query_remote_to_local, query_total_value_locked,
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

    validate_fee_bps(msg.withdrawal_fee_bps)?;
    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let endpoint = deps.api.addr_validate(&msg.endpoint)?;

    let config = Config {
        endpoint,
        native_denom: msg.native_denom,
        withdrawal_fee_bps: msg.withdrawal_fee_bps,
        use_custom_options: false,
    };
    CONFIG.save(deps.storage, &config)?;
    OWNERSHIP.save(deps.storage, &Ownership::new(owner.clone()))?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("endpoint", config.endpoint)
        .add_attribute(
            "withdrawal_fee_bps",
            config.withdrawal_fee_bps.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Bridge {
            local_token,
            destination_chain_id,
            amount,
            recipient,
            unwrap_to_native,
            options,
            refund_address,
        } => execute_bridge(
            deps,
            info,
            local_token,
            destination_chain_id,
            amount,
            recipient,
            unwrap_to_native,
            options,
            refund_address,
        ),
        ExecuteMsg::OnPacketReceived {
            src_chain_id,
            sender,
            payload,
        } => execute_on_packet_received(deps, info, src_chain_id, sender, payload),

        // Configuration
        ExecuteMsg::RegisterToken {
            local_token,
            origin_chain_id,
            origin_token,
        } => execute_register_token(deps, info, local_token, origin_chain_id, origin_token),
        ExecuteMsg::SetWithdrawalFeeBps { bps } => execute_set_withdrawal_fee_bps(deps, info, bps),
        ExecuteMsg::SetPeer { chain_id, peer } => execute_set_peer(deps, info, chain_id, peer),
        ExecuteMsg::SetUseCustomOptions { enabled } => {
            execute_set_use_custom_options(deps, info, enabled)
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
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::Peer { chain_id } => to_json_binary(&query_peer(deps, chain_id)?),
        QueryMsg::LocalToRemote {
            local_token,
            origin_chain_id,
        } => to_json_binary(&query_local_to_remote(deps, local_token, origin_chain_id)?),
        QueryMsg::RemoteToLocal {
            origin_chain_id,
            origin_token,
        } => to_json_binary(&query_remote_to_local(deps, origin_chain_id, origin_token)?),
        QueryMsg::TotalValueLocked {
            origin_chain_id,
            origin_token,
        } => to_json_binary(&query_total_value_locked(
            deps,
            origin_chain_id,
            origin_token,
        )?),
        QueryMsg::Pairings { start_after, limit } => {
            to_json_binary(&query_pairings(deps, start_after, limit)?)
        }
        QueryMsg::Quote {
            destination_chain_id,
            options,
        } => to_json_binary(&query_quote(deps, destination_chain_id, options)?),
    }
}
