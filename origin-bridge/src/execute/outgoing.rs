//! Outgoing transfer handlers (Bridge and BridgeNative).
//!
//! Tokens are locked on this chain, the locked value grows by the
//! shared-decimal amount, and a Mint packet is sent to the hub. Dust below
//! the conversion rate goes straight back to the sender.

use bridge_common::transport::{quote, send_msg};
use bridge_common::{packet_hash, validate_remote_address, MintPacket};
use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response,
    Storage, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::decimals::remove_dust;
use crate::error::ContractError;
use crate::state::{Config, TokenRegistration, CONFIG, LOCKED_VALUE_SD, PEERS, TOKENS};

/// Lock a registered CW20 token for the hub.
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    recipient: String,
    options: Option<Binary>,
    refund_address: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    validate_transfer(amount, &recipient)?;

    let registration = load_registration(deps.storage, &token)?;
    if registration.asset.is_native() {
        // the native denom arrives as funds, not through an allowance
        return Err(ContractError::UnsupportedToken { token });
    }

    let fee_sent = paid_amount(&info, &config.native_denom)?;
    let options = checked_options(&config, options)?;
    let lock = lock(deps, &config, &registration, amount, recipient, &options)?;
    if fee_sent < lock.fee_required {
        return Err(ContractError::InsufficientValue {
            required: lock.fee_required,
            sent: fee_sent,
        });
    }

    let token_addr = registration.asset.key().to_string();
    let mut messages: Vec<CosmosMsg> = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_addr.clone(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    })];
    if !lock.dust.is_zero() {
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token_addr,
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: info.sender.to_string(),
                amount: lock.dust,
            })?,
            funds: vec![],
        }));
    }

    let refund = refund_address.unwrap_or_else(|| info.sender.to_string());
    messages.push(send_msg(
        &config.endpoint,
        config.hub_chain_id,
        lock.payload,
        options,
        refund,
        fee_sent,
        &config.native_denom,
    )?);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "bridge")
        .add_attribute("token", token)
        .add_attribute("sender", info.sender)
        .add_attributes(lock.attributes))
}

/// Lock the native denom for the hub. Funds cover `amount` plus the messaging fee.
pub fn execute_bridge_native(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
    recipient: String,
    options: Option<Binary>,
    refund_address: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    validate_transfer(amount, &recipient)?;

    let registration = load_registration(deps.storage, &config.native_denom)?;
    let sent = paid_amount(&info, &config.native_denom)?;
    let options = checked_options(&config, options)?;
    let lock = lock(deps, &config, &registration, amount, recipient, &options)?;

    let required = amount.checked_add(lock.fee_required)?;
    if sent < required {
        return Err(ContractError::InsufficientValue { required, sent });
    }
    // everything beyond `amount` goes to the endpoint, which refunds the excess
    let fee_forwarded = sent - amount;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !lock.dust.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(lock.dust.u128(), &config.native_denom),
        }));
    }

    let refund = refund_address.unwrap_or_else(|| info.sender.to_string());
    messages.push(send_msg(
        &config.endpoint,
        config.hub_chain_id,
        lock.payload,
        options,
        refund,
        fee_forwarded,
        &config.native_denom,
    )?);

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "bridge_native")
        .add_attribute("token", config.native_denom)
        .add_attribute("sender", info.sender)
        .add_attributes(lock.attributes))
}

// ============================================================================
// Helpers
// ============================================================================

/// Outcome of locking value for a Mint packet.
struct Lock {
    dust: Uint128,
    payload: Binary,
    fee_required: Uint128,
    attributes: Vec<(&'static str, String)>,
}

/// Record `amount` as locked and encode the Mint packet for the hub.
fn lock(
    deps: DepsMut,
    config: &Config,
    registration: &TokenRegistration,
    amount: Uint128,
    recipient: String,
    options: &Binary,
) -> Result<Lock, ContractError> {
    let peer = PEERS
        .may_load(deps.storage, config.hub_chain_id)?
        .ok_or(ContractError::PeerNotSet {
            chain_id: config.hub_chain_id,
        })?;

    let (amount_sd, dust) = remove_dust(amount, registration.conversion_rate);
    if amount_sd.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: format!(
                "amount {} is below the conversion rate {}",
                amount, registration.conversion_rate
            ),
        });
    }

    let key = registration.asset.key();
    let payload = MintPacket {
        token: key.to_string(),
        recipient: recipient.clone(),
        amount_sd,
    }
    .encode()?;

    let fee_required = quote(
        &deps.querier,
        &config.endpoint,
        config.hub_chain_id,
        &payload,
        options,
    )?;

    let locked = LOCKED_VALUE_SD
        .may_load(deps.storage, key)?
        .unwrap_or_default()
        .checked_add(amount_sd)?;
    LOCKED_VALUE_SD.save(deps.storage, key, &locked)?;

    let attributes = vec![
        ("recipient", recipient),
        ("amount", amount.to_string()),
        ("amount_sd", amount_sd.to_string()),
        ("dust", dust.to_string()),
        ("dst_chain_id", config.hub_chain_id.to_string()),
        ("peer", peer),
        ("fee", fee_required.to_string()),
        ("packet_hash", packet_hash(payload.as_slice())),
    ];

    Ok(Lock {
        dust,
        payload,
        fee_required,
        attributes,
    })
}

fn validate_transfer(amount: Uint128, recipient: &str) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    // the hub would reject the Mint after the value is already locked
    validate_remote_address(recipient).map_err(|_| ContractError::InvalidRecipient)?;
    Ok(())
}

/// Options are forwarded to the endpoint only when the owner enabled them.
fn checked_options(config: &Config, options: Option<Binary>) -> Result<Binary, ContractError> {
    let options = options.unwrap_or_default();
    if !config.use_custom_options && !options.is_empty() {
        return Err(ContractError::CustomOptionsDisabled);
    }
    Ok(options)
}

fn load_registration(
    storage: &dyn Storage,
    token: &str,
) -> Result<TokenRegistration, ContractError> {
    TOKENS
        .may_load(storage, token)?
        .ok_or(ContractError::UnsupportedToken {
            token: token.to_string(),
        })
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
