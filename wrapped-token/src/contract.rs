use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult, Uint128};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::set_contract_version;
use cw20::MinterResponse;
use cw20_base::state::{BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

pub const CONTRACT_NAME: &str = "crates.io:bridge-wrapped-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let bridge = deps.api.addr_validate(&msg.bridge)?;

    let base_msg = cw20_base::msg::InstantiateMsg {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        initial_balances: vec![],
        mint: Some(MinterResponse {
            minter: bridge.to_string(),
            cap: None,
        }),
        marketing: None,
    };
    let res = cw20_base::contract::instantiate(deps.branch(), env, info, base_msg)?;

    // cw20-base records its own name; this contract identifies as the wrapper.
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(res
        .add_attribute("method", "instantiate")
        .add_attribute("bridge", bridge))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BridgeBurn { owner, amount } => execute_bridge_burn(deps, info, owner, amount),
        other => match other.into_cw20() {
            Some(base_msg) => Ok(cw20_base::contract::execute(deps, env, info, base_msg)?),
            None => Err(ContractError::Std(StdError::generic_err(
                "message has no cw20 equivalent",
            ))),
        },
    }
}

/// Burn from `owner` on behalf of the bridge. No allowance is consumed.
pub fn execute_bridge_burn(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    let is_bridge = token_info
        .mint
        .as_ref()
        .map(|minter| minter.minter == info.sender)
        .unwrap_or(false);
    if !is_bridge {
        return Err(ContractError::Unauthorized);
    }

    let owner_addr = deps.api.addr_validate(&owner)?;
    BALANCES.update(
        deps.storage,
        &owner_addr,
        |balance: Option<Uint128>| -> StdResult<_> {
            Ok(balance.unwrap_or_default().checked_sub(amount)?)
        },
    )?;

    token_info.total_supply = token_info.total_supply.checked_sub(amount)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("method", "bridge_burn")
        .add_attribute("from", owner_addr)
        .add_attribute("amount", amount))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    cw20_base::contract::query(deps, env, msg)
}
