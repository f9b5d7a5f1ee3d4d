use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Insufficient messaging fee: required {required}, sent {sent}")]
    InsufficientFee { required: Uint128, sent: Uint128 },

    #[error("Packet {nonce} from chain {src_chain_id} already delivered")]
    AlreadyDelivered { src_chain_id: u32, nonce: u64 },
}
