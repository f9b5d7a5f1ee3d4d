//! Configuration handlers (owner only).
//!
//! - Token registration
//! - Hub chain id and peers
//! - Fee withdrawal

use bridge_common::{Asset, AssetInfo};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::decimals::conversion_rate;
use crate::error::ContractError;
use crate::execute::assert_owner;
use crate::query::collected_fees;
use crate::state::{TokenRegistration, CONFIG, LOCKED_VALUE_SD, PEERS, TOKENS};

// ============================================================================
// Token Registration
// ============================================================================

/// Register a token for bridging with the given shared precision.
pub fn execute_register_token(
    deps: DepsMut,
    info: MessageInfo,
    token: AssetInfo,
    shared_decimals: u8,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    if token.key().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "token cannot be empty".to_string(),
        });
    }

    let (asset, local_decimals) = match token {
        AssetInfo::Native { denom } => {
            if denom != config.native_denom {
                return Err(ContractError::InvalidAddress {
                    reason: format!("native denom must be {}", config.native_denom),
                });
            }
            (AssetInfo::Native { denom }, config.native_decimals)
        }
        AssetInfo::Cw20 { contract_addr } => {
            let addr = deps.api.addr_validate(&contract_addr).map_err(|e| {
                ContractError::InvalidAddress {
                    reason: e.to_string(),
                }
            })?;
            let token_info: TokenInfoResponse = deps
                .querier
                .query_wasm_smart(&addr, &Cw20QueryMsg::TokenInfo {})?;
            (
                AssetInfo::Cw20 {
                    contract_addr: addr.to_string(),
                },
                token_info.decimals,
            )
        }
    };

    let key = asset.key().to_string();
    if TOKENS.has(deps.storage, &key) {
        return Err(ContractError::AlreadyRegistered { token: key });
    }

    let rate = conversion_rate(local_decimals, shared_decimals).ok_or(
        ContractError::InvalidSharedDecimals {
            shared_decimals,
            local_decimals,
        },
    )?;

    TOKENS.save(
        deps.storage,
        &key,
        &TokenRegistration {
            asset,
            local_decimals,
            shared_decimals,
            conversion_rate: rate,
        },
    )?;
    LOCKED_VALUE_SD.save(deps.storage, &key, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "register_token")
        .add_attribute("token", key)
        .add_attribute("local_decimals", local_decimals.to_string())
        .add_attribute("shared_decimals", shared_decimals.to_string())
        .add_attribute("conversion_rate", rate))
}

// ============================================================================
// Remote Chain Configuration
// ============================================================================

pub fn execute_set_hub_chain_id(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u32,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.hub_chain_id = chain_id;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_hub_chain_id")
        .add_attribute("hub_chain_id", chain_id.to_string()))
}

/// Trust `peer` as the ledger on `chain_id`. Setting the same peer twice is a no-op.
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

// ============================================================================
// Fee Withdrawal
// ============================================================================

/// Withdraw custody in excess of the locked value.
pub fn execute_withdraw_fee(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let registration = TOKENS
        .may_load(deps.storage, &token)?
        .ok_or(ContractError::UnsupportedToken {
            token: token.clone(),
        })?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    let available = collected_fees(deps.as_ref(), &env.contract.address, &registration)?;
    if amount > available {
        return Err(ContractError::InsufficientFeesCollected {
            requested: amount,
            available,
        });
    }

    let to_addr = deps.api.addr_validate(&to)?;
    let transfer = Asset::new(registration.asset, amount).transfer_msg(to_addr.as_str())?;

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", "withdraw_fee")
        .add_attribute("token", token)
        .add_attribute("to", to_addr)
        .add_attribute("amount", amount))
}
