use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Uint128, WasmMsg,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use bridge_common::packet_hash;
use bridge_common::transport::ReceiverExecuteMsg;
use bridge_common::QuoteResponse;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, OutboxResponse, QueryMsg};
use crate::state::{
    Config, OutboundPacket, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DELIVERED, NEXT_NONCE, OUTBOX,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        chain_id: msg.chain_id,
        native_denom: msg.native_denom,
        base_fee: msg.base_fee,
        per_byte_fee: msg.per_byte_fee,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("chain_id", config.chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Send {
            dst_chain_id,
            payload,
            options,
            refund_address,
        } => execute_send(deps, info, dst_chain_id, payload, options, refund_address),
        ExecuteMsg::Deliver {
            src_chain_id,
            nonce,
            sender,
            receiver,
            payload,
        } => execute_deliver(deps, src_chain_id, nonce, sender, receiver, payload),
    }
}

fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    dst_chain_id: u32,
    payload: Binary,
    options: Binary,
    refund_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let refund_addr = deps.api.addr_validate(&refund_address)?;

    let required = quote_fee(&config, &payload)?;
    let sent: Uint128 = info
        .funds
        .iter()
        .filter(|c| c.denom == config.native_denom)
        .map(|c| c.amount)
        .sum();
    if sent < required {
        return Err(ContractError::InsufficientFee { required, sent });
    }

    let nonce = NEXT_NONCE.load(deps.storage)?;
    NEXT_NONCE.save(deps.storage, &(nonce + 1))?;

    let hash = packet_hash(payload.as_slice());
    OUTBOX.save(
        deps.storage,
        nonce,
        &OutboundPacket {
            nonce,
            src_chain_id: config.chain_id,
            dst_chain_id,
            sender: info.sender.clone(),
            payload,
            options,
            fee_paid: required,
        },
    )?;

    let mut response = Response::new()
        .add_attribute("action", "send")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("dst_chain_id", dst_chain_id.to_string())
        .add_attribute("fee", required)
        .add_attribute("packet_hash", hash);

    let excess = sent - required;
    if !excess.is_zero() {
        response = response
            .add_message(BankMsg::Send {
                to_address: refund_addr.to_string(),
                amount: coins(excess.u128(), &config.native_denom),
            })
            .add_attribute("refund", excess);
    }

    Ok(response)
}

fn execute_deliver(
    deps: DepsMut,
    src_chain_id: u32,
    nonce: u64,
    sender: String,
    receiver: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    if DELIVERED.has(deps.storage, (src_chain_id, nonce)) {
        return Err(ContractError::AlreadyDelivered {
            src_chain_id,
            nonce,
        });
    }
    DELIVERED.save(deps.storage, (src_chain_id, nonce), &true)?;

    let receiver = deps.api.addr_validate(&receiver)?;
    let msg = WasmMsg::Execute {
        contract_addr: receiver.to_string(),
        msg: to_json_binary(&ReceiverExecuteMsg::OnPacketReceived {
            src_chain_id,
            sender: sender.clone(),
            payload,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "deliver")
        .add_attribute("src_chain_id", src_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", sender)
        .add_attribute("receiver", receiver))
}

/// `base_fee + per_byte_fee * len(payload)`
pub fn quote_fee(config: &Config, payload: &Binary) -> StdResult<Uint128> {
    let per_byte = config
        .per_byte_fee
        .checked_mul(Uint128::from(payload.len() as u128))?;
    Ok(config.base_fee.checked_add(per_byte)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Quote { payload, .. } => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&QuoteResponse {
                native_fee: quote_fee(&config, &payload)?,
            })
        }
        QueryMsg::Outbox { start_after, limit } => {
            to_json_binary(&query_outbox(deps, start_after, limit)?)
        }
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
    }
}

fn query_outbox(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<OutboxResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let packets = OUTBOX
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, packet)| packet))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(OutboxResponse { packets })
}
