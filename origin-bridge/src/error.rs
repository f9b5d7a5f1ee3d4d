//! Error types for the origin bridge contract

use bridge_common::{OwnershipError, PacketError};
use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    /// Malformed packet bytes (distinct from ledger-level rejections)
    #[error("{0}")]
    Packet(PacketError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Not authorized")]
    NotAuthorized,

    #[error("Not the pending owner")]
    NotPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Token already registered: {token}")]
    AlreadyRegistered { token: String },

    #[error("Token not supported: {token}")]
    UnsupportedToken { token: String },

    #[error("Invalid shared decimals: {shared_decimals} exceeds local decimals {local_decimals}")]
    InvalidSharedDecimals {
        shared_decimals: u8,
        local_decimals: u8,
    },

    #[error("No peer configured for chain {chain_id}")]
    PeerNotSet { chain_id: u32 },

    // ========================================================================
    // Transfer Errors
    // ========================================================================
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid recipient")]
    InvalidRecipient,

    #[error("Insufficient value: required {required}, sent {sent}")]
    InsufficientValue { required: Uint128, sent: Uint128 },

    #[error("Unexpected funds: {denom}")]
    UnexpectedFunds { denom: String },

    #[error("Custom options are disabled: options must be empty")]
    CustomOptionsDisabled,

    #[error("Insufficient liquidity: requested {requested}, available {available}")]
    InsufficientLiquidity {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Insufficient fees collected: requested {requested}, available {available}")]
    InsufficientFeesCollected {
        requested: Uint128,
        available: Uint128,
    },

    // ========================================================================
    // Inbound Packet Errors
    // ========================================================================
    #[error("Invalid source chain: {chain_id}")]
    InvalidSourceChain { chain_id: u32 },

    #[error("Invalid peer {sender} for chain {chain_id}")]
    InvalidPeer { chain_id: u32, sender: String },

    #[error("Unknown packet type: {tag}")]
    UnknownPacketType { tag: u8 },
}

impl From<PacketError> for ContractError {
    fn from(err: PacketError) -> Self {
        match err {
            PacketError::UnknownPacketType { tag } => ContractError::UnknownPacketType { tag },
            other => ContractError::Packet(other),
        }
    }
}

impl From<OwnershipError> for ContractError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::NotAuthorized => ContractError::NotAuthorized,
            OwnershipError::NotPendingOwner => ContractError::NotPendingOwner,
            OwnershipError::NoPendingTransfer => ContractError::NoPendingOwner,
        }
    }
}
