//! Ownership handlers.
//!
//! Transfer is two-step: the owner proposes, the proposed owner accepts.
//! The owner may cancel a pending proposal. There is no renounce.

use bridge_common::OWNERSHIP;
use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;

/// Fail with `NotAuthorized` unless `sender` is the current owner.
pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    OWNERSHIP.load(storage)?.assert_owner(sender)?;
    Ok(())
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let proposed_owner = deps.api.addr_validate(&new_owner)?;
    let ownership = OWNERSHIP
        .load(deps.storage)?
        .propose(&info.sender, proposed_owner.clone())?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("owner", info.sender)
        .add_attribute("proposed_owner", proposed_owner))
}

pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let previous = OWNERSHIP.load(deps.storage)?;
    let previous_owner = previous.owner().clone();
    let ownership = previous.accept(&info.sender)?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("method", "accept_ownership")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("owner", info.sender))
}

pub fn execute_cancel_ownership_transfer(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let ownership = OWNERSHIP.load(deps.storage)?.cancel(&info.sender)?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new().add_attribute("method", "cancel_ownership_transfer"))
}
