//! Query handlers for the hub bridge contract.

use bridge_common::transport::quote;
use bridge_common::{QuoteResponse, UnlockPacket, OWNERSHIP};
use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ConfigResponse, LocalToRemoteResponse, OwnershipResponse, PairingResponse, PairingsResponse,
    PeerResponse, RemoteToLocalResponse, TotalValueLockedResponse,
};
use crate::state::{CONFIG, LOCAL_TO_REMOTE, PEERS, REMOTE_TO_LOCAL, TOTAL_VALUE_LOCKED};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        endpoint: config.endpoint,
        native_denom: config.native_denom,
        withdrawal_fee_bps: config.withdrawal_fee_bps,
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
// Pairing Queries
// ============================================================================

pub fn query_local_to_remote(
    deps: Deps,
    local_token: String,
    origin_chain_id: u32,
) -> StdResult<LocalToRemoteResponse> {
    let local = deps.api.addr_validate(&local_token)?;
    Ok(LocalToRemoteResponse {
        origin_token: LOCAL_TO_REMOTE.may_load(deps.storage, (&local, origin_chain_id))?,
    })
}

pub fn query_remote_to_local(
    deps: Deps,
    origin_chain_id: u32,
    origin_token: String,
) -> StdResult<RemoteToLocalResponse> {
    Ok(RemoteToLocalResponse {
        local_token: REMOTE_TO_LOCAL
            .may_load(deps.storage, (origin_chain_id, origin_token.as_str()))?,
    })
}

pub fn query_total_value_locked(
    deps: Deps,
    origin_chain_id: u32,
    origin_token: String,
) -> StdResult<TotalValueLockedResponse> {
    Ok(TotalValueLockedResponse {
        amount_sd: TOTAL_VALUE_LOCKED
            .may_load(deps.storage, (origin_chain_id, origin_token.as_str()))?
            .unwrap_or_default(),
    })
}

pub fn query_pairings(
    deps: Deps,
    start_after: Option<(u32, String)>,
    limit: Option<u32>,
) -> StdResult<PairingsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .as_ref()
        .map(|(chain_id, token)| Bound::exclusive((*chain_id, token.as_str())));

    let pairings = REMOTE_TO_LOCAL
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| -> StdResult<PairingResponse> {
            let ((origin_chain_id, origin_token), local_token) = item?;
            let total_value_locked = TOTAL_VALUE_LOCKED
                .may_load(deps.storage, (origin_chain_id, origin_token.as_str()))?
                .unwrap_or_default();
            Ok(PairingResponse {
                origin_chain_id,
                origin_token,
                local_token,
                total_value_locked,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PairingsResponse { pairings })
}

// ============================================================================
// Messaging Fee
// ============================================================================

/// Fee for an Unlock packet to `destination_chain_id`. Unlock packets have a fixed size.
pub fn query_quote(
    deps: Deps,
    destination_chain_id: u32,
    options: Option<Binary>,
) -> StdResult<QuoteResponse> {
    let config = CONFIG.load(deps.storage)?;
    let payload = UnlockPacket::default()
        .encode()
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let native_fee = quote(
        &deps.querier,
        &config.endpoint,
        destination_chain_id,
        &payload,
        &options.unwrap_or_default(),
    )?;
    Ok(QuoteResponse { native_fee })
}
