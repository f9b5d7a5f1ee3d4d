//! Query handlers for the origin bridge contract.

use bridge_common::transport::quote;
use bridge_common::{AssetInfo, MintPacket, QuoteResponse, OWNERSHIP};
use cosmwasm_std::{Addr, Binary, Deps, Env, Order, StdError, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};
use cw_storage_plus::Bound;

use crate::decimals::sd_to_ld;
use crate::msg::{
    CollectedFeesResponse, ConfigResponse, LockedValueResponse, OwnershipResponse, PeerResponse,
    TokenResponse, TokensResponse,
};
use crate::state::{TokenRegistration, CONFIG, LOCKED_VALUE_SD, PEERS, TOKENS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        endpoint: config.endpoint,
        hub_chain_id: config.hub_chain_id,
        native_denom: config.native_denom,
        native_decimals: config.native_decimals,
        use_custom_options: config.use_custom_options,
    })
}

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    let ownership = OWNERSHIP.load(deps.storage)?;
    Ok(OwnershipResponse {
        owner: ownership.owner().clone(),
        pending_owner: ownership.proposed_owner().cloned(),
    })
}

pub fn query_peer(deps: Deps, chain_id: u32) -> StdResult<PeerResponse> {
    Ok(PeerResponse {
        chain_id,
        peer: PEERS.may_load(deps.storage, chain_id)?,
    })
}

// ============================================================================
// Token Queries
// ============================================================================

pub fn query_token(deps: Deps, token: String) -> StdResult<TokenResponse> {
    let registration = TOKENS
        .may_load(deps.storage, &token)?
        .ok_or_else(|| StdError::not_found(format!("token {token}")))?;
    token_response(deps, registration)
}

/// Paginated list of registered tokens, ordered by key.
pub fn query_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.and_then(|(_, registration)| token_response(deps, registration)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

fn token_response(deps: Deps, registration: TokenRegistration) -> StdResult<TokenResponse> {
    let locked_value_sd = LOCKED_VALUE_SD
        .may_load(deps.storage, registration.asset.key())?
        .unwrap_or_default();
    Ok(TokenResponse {
        token: registration.asset,
        local_decimals: registration.local_decimals,
        shared_decimals: registration.shared_decimals,
        conversion_rate: registration.conversion_rate,
        locked_value_sd,
    })
}

pub fn query_locked_value(deps: Deps, token: String) -> StdResult<LockedValueResponse> {
    let amount_sd = LOCKED_VALUE_SD
        .may_load(deps.storage, &token)?
        .unwrap_or_default();
    Ok(LockedValueResponse { token, amount_sd })
}

pub fn query_collected_fees(
    deps: Deps,
    env: Env,
    token: String,
) -> StdResult<CollectedFeesResponse> {
    let registration = TOKENS
        .may_load(deps.storage, &token)?
        .ok_or_else(|| StdError::not_found(format!("token {token}")))?;
    let amount = collected_fees(deps, &env.contract.address, &registration)?;
    Ok(CollectedFeesResponse { token, amount })
}

/// Custody held by `contract` beyond what backs hub supply, in local decimals.
pub fn collected_fees(
    deps: Deps,
    contract: &Addr,
    registration: &TokenRegistration,
) -> StdResult<Uint128> {
    let balance = match &registration.asset {
        AssetInfo::Native { denom } => deps.querier.query_balance(contract, denom)?.amount,
        AssetInfo::Cw20 { contract_addr } => {
            let res: BalanceResponse = deps.querier.query_wasm_smart(
                contract_addr,
                &Cw20QueryMsg::Balance {
                    address: contract.to_string(),
                },
            )?;
            res.balance
        }
    };

    let locked_sd = LOCKED_VALUE_SD
        .may_load(deps.storage, registration.asset.key())?
        .unwrap_or_default();
    let locked = sd_to_ld(locked_sd, registration.conversion_rate)?;

    Ok(balance.saturating_sub(locked))
}

// ============================================================================
// Messaging Fee
// ============================================================================

/// Fee for a Mint packet to the hub. Mint packets have a fixed size.
pub fn query_quote(deps: Deps, options: Option<Binary>) -> StdResult<QuoteResponse> {
    let config = CONFIG.load(deps.storage)?;
    let payload = MintPacket::default()
        .encode()
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let native_fee = quote(
        &deps.querier,
        &config.endpoint,
        config.hub_chain_id,
        &payload,
        &options.unwrap_or_default(),
    )?;
    Ok(QuoteResponse { native_fee })
}
