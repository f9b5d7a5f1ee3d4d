//! Message types for the hub bridge contract

use bridge_common::QuoteResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender
    pub owner: Option<String>,
    pub endpoint: String,
    pub native_denom: String,
    /// Must be below 10000
    pub withdrawal_fee_bps: u16,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Outgoing Transfers (Burn)
    // ========================================================================
    /// Burn wrapped tokens and release the canonical token on `destination_chain_id`.
    ///
    /// No allowance is needed; the hub burns directly from the caller.
    /// Attached `native_denom` funds pay the messaging fee.
    Bridge {
        local_token: String,
        destination_chain_id: u32,
        amount: Uint128,
        /// Recipient on the origin chain
        recipient: String,
        unwrap_to_native: bool,
        options: Option<Binary>,
        refund_address: Option<String>,
    },

    // ========================================================================
    // Inbound Packets
    // ========================================================================
    /// Endpoint callback carrying a Mint packet from an origin chain
    OnPacketReceived {
        src_chain_id: u32,
        sender: String,
        payload: Binary,
    },

    // ========================================================================
    // Configuration (owner only)
    // ========================================================================
    /// Pair a wrapped token with its canonical token on an origin chain. Irreversible.
    RegisterToken {
        local_token: String,
        origin_chain_id: u32,
        origin_token: String,
    },

    SetWithdrawalFeeBps {
        bps: u16,
    },

    SetPeer {
        chain_id: u32,
        peer: String,
    },

    /// Allow non-empty transport options on outbound packets
    SetUseCustomOptions {
        enabled: bool,
    },

    // ========================================================================
    // Ownership
    // ========================================================================
    TransferOwnership {
        new_owner: String,
    },

    AcceptOwnership {},

    CancelOwnershipTransfer {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnershipResponse)]
    Ownership {},

    #[returns(PeerResponse)]
    Peer { chain_id: u32 },

    #[returns(LocalToRemoteResponse)]
    LocalToRemote {
        local_token: String,
        origin_chain_id: u32,
    },

    #[returns(RemoteToLocalResponse)]
    RemoteToLocal {
        origin_chain_id: u32,
        origin_token: String,
    },

    /// Wrapped supply backed by one origin chain, in shared decimals
    #[returns(TotalValueLockedResponse)]
    TotalValueLocked {
        origin_chain_id: u32,
        origin_token: String,
    },

    /// Paginated pairings ordered by `(origin_chain_id, origin_token)`
    #[returns(PairingsResponse)]
    Pairings {
        start_after: Option<(u32, String)>,
        limit: Option<u32>,
    },

    /// Messaging fee for an Unlock packet to `destination_chain_id`
    #[returns(QuoteResponse)]
    Quote {
        destination_chain_id: u32,
        options: Option<Binary>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub endpoint: Addr,
    pub native_denom: String,
    pub withdrawal_fee_bps: u16,
    pub use_custom_options: bool,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct PeerResponse {
    pub chain_id: u32,
    pub peer: Option<String>,
}

#[cw_serde]
pub struct LocalToRemoteResponse {
    pub origin_token: Option<String>,
}

#[cw_serde]
pub struct RemoteToLocalResponse {
    pub local_token: Option<Addr>,
}

#[cw_serde]
pub struct TotalValueLockedResponse {
    pub amount_sd: Uint128,
}

#[cw_serde]
pub struct PairingResponse {
    pub origin_chain_id: u32,
    pub origin_token: String,
    pub local_token: Addr,
    pub total_value_locked: Uint128,
}

#[cw_serde]
pub struct PairingsResponse {
    pub pairings: Vec<PairingResponse>,
}
