//! Configuration handlers (owner only).

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::assert_owner;
use crate::state::{BPS_DENOMINATOR, CONFIG, LOCAL_TO_REMOTE, PEERS, REMOTE_TO_LOCAL};

/// Pair `local_token` with `origin_token` on `origin_chain_id`.
///
/// Both directions are one-to-one per origin chain, so a pairing can be
/// written exactly once.
pub fn execute_register_token(
    deps: DepsMut,
    info: MessageInfo,
    local_token: String,
    origin_chain_id: u32,
    origin_token: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let local = deps
        .api
        .addr_validate(&local_token)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;
    if origin_token.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "origin token cannot be empty".to_string(),
        });
    }

    if LOCAL_TO_REMOTE.has(deps.storage, (&local, origin_chain_id)) {
        return Err(ContractError::AlreadyRegistered {
            token: local.to_string(),
        });
    }
    if REMOTE_TO_LOCAL.has(deps.storage, (origin_chain_id, origin_token.as_str())) {
        return Err(ContractError::AlreadyRegistered {
            token: origin_token,
        });
    }

    LOCAL_TO_REMOTE.save(deps.storage, (&local, origin_chain_id), &origin_token)?;
    REMOTE_TO_LOCAL.save(deps.storage, (origin_chain_id, origin_token.as_str()), &local)?;

    Ok(Response::new()
        .add_attribute("method", "register_token")
        .add_attribute("local_token", local)
        .add_attribute("origin_chain_id", origin_chain_id.to_string())
        .add_attribute("origin_token", origin_token))
}

pub fn execute_set_withdrawal_fee_bps(
    deps: DepsMut,
    info: MessageInfo,
    bps: u16,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    validate_fee_bps(bps)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.withdrawal_fee_bps = bps;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_withdrawal_fee_bps")
        .add_attribute("withdrawal_fee_bps", bps.to_string()))
}

/// Trust `peer` as the origin ledger on `chain_id`. Idempotent.
pub fn execute_set_peer(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u32,
    peer: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    if peer.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "peer cannot be empty".to_string(),
        });
    }
    PEERS.save(deps.storage, chain_id, &peer)?;

    Ok(Response::new()
        .add_attribute("method", "set_peer")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("peer", peer))
}

pub fn execute_set_use_custom_options(
    deps: DepsMut,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.use_custom_options = enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_use_custom_options")
        .add_attribute("enabled", enabled.to_string()))
}

pub fn validate_fee_bps(bps: u16) -> Result<(), ContractError> {
    if u128::from(bps) >= BPS_DENOMINATOR {
        return Err(ContractError::InvalidFee { bps });
    }
    Ok(())
}
