//! Message types for the origin bridge contract

use bridge_common::{AssetInfo, QuoteResponse};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender
    pub owner: Option<String>,
    /// Messaging endpoint contract on this chain
    pub endpoint: String,
    /// Endpoint id of the hub chain
    pub hub_chain_id: u32,
    /// Native denom (pays messaging fees)
    pub native_denom: String,
    /// Decimals of the native denom
    pub native_decimals: u8,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Outgoing Transfers (Lock)
    // ========================================================================
    /// Lock a CW20 token and mint its representation on the hub.
    ///
    /// Requires an allowance of `amount` for this contract. Attached
    /// `native_denom` funds pay the messaging fee.
    Bridge {
        token: String,
        amount: Uint128,
        /// Recipient on the hub chain
        recipient: String,
        options: Option<Binary>,
        /// Receives the unused messaging fee; defaults to the sender
        refund_address: Option<String>,
    },

    /// Lock the native denom. Attached funds must cover `amount` plus the
    /// messaging fee.
    BridgeNative {
        amount: Uint128,
        recipient: String,
        options: Option<Binary>,
        refund_address: Option<String>,
    },

    // ========================================================================
    // Inbound Packets
    // ========================================================================
    /// Endpoint callback carrying an Unlock packet from the hub
    OnPacketReceived {
        src_chain_id: u32,
        sender: String,
        payload: Binary,
    },

    // ========================================================================
    // Configuration (owner only)
    // ========================================================================
    RegisterToken {
        token: AssetInfo,
        shared_decimals: u8,
    },

    SetHubChainId {
        chain_id: u32,
    },

    /// Trust `peer` as the ledger on `chain_id`. Overwrites any previous peer.
    SetPeer {
        chain_id: u32,
        peer: String,
    },

    /// Allow non-empty transport options on outbound packets
    SetUseCustomOptions {
        enabled: bool,
    },

    /// Withdraw accrued bridge fees (custody above the locked value)
    WithdrawFee {
        token: String,
        to: String,
        amount: Uint128,
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

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnershipResponse)]
    Ownership {},

    #[returns(PeerResponse)]
    Peer { chain_id: u32 },

    #[returns(TokenResponse)]
    Token { token: String },

    #[returns(TokensResponse)]
    Tokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(LockedValueResponse)]
    LockedValue { token: String },

    #[returns(CollectedFeesResponse)]
    CollectedFees { token: String },

    /// Messaging fee for a Mint packet to the hub
    #[returns(QuoteResponse)]
    Quote { options: Option<Binary> },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub endpoint: Addr,
    pub hub_chain_id: u32,
    pub native_denom: String,
    pub native_decimals: u8,
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
pub struct TokenResponse {
    pub token: AssetInfo,
    pub local_decimals: u8,
    pub shared_decimals: u8,
    pub conversion_rate: Uint128,
    pub locked_value_sd: Uint128,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}

#[cw_serde]
pub struct LockedValueResponse {
    pub token: String,
    pub amount_sd: Uint128,
}

#[cw_serde]
pub struct CollectedFeesResponse {
    pub token: String,
    /// Withdrawable amount in local decimals
    pub amount: Uint128,
}
