use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};
use cw20::{Cw20ExecuteMsg, Expiration};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Should equal the shared decimals of the bridged token
    pub decimals: u8,
    /// Hub bridge address; becomes the sole minter
    pub bridge: String,
}

/// CW20 execute surface without the public burn variants, plus `BridgeBurn`.
#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Bridge only (enforced by the cw20-base minter check)
    Mint {
        recipient: String,
        amount: Uint128,
    },
    /// Bridge only: burn `amount` from `owner` without an allowance
    BridgeBurn {
        owner: String,
        amount: Uint128,
    },
}

impl ExecuteMsg {
    /// The equivalent cw20-base message, for every variant except `BridgeBurn`.
    pub fn into_cw20(self) -> Option<Cw20ExecuteMsg> {
        Some(match self {
            ExecuteMsg::Transfer { recipient, amount } => {
                Cw20ExecuteMsg::Transfer { recipient, amount }
            }
            ExecuteMsg::Send {
                contract,
                amount,
                msg,
            } => Cw20ExecuteMsg::Send {
                contract,
                amount,
                msg,
            },
            ExecuteMsg::IncreaseAllowance {
                spender,
                amount,
                expires,
            } => Cw20ExecuteMsg::IncreaseAllowance {
                spender,
                amount,
                expires,
            },
            ExecuteMsg::DecreaseAllowance {
                spender,
                amount,
                expires,
            } => Cw20ExecuteMsg::DecreaseAllowance {
                spender,
                amount,
                expires,
            },
            ExecuteMsg::TransferFrom {
                owner,
                recipient,
                amount,
            } => Cw20ExecuteMsg::TransferFrom {
                owner,
                recipient,
                amount,
            },
            ExecuteMsg::SendFrom {
                owner,
                contract,
                amount,
                msg,
            } => Cw20ExecuteMsg::SendFrom {
                owner,
                contract,
                amount,
                msg,
            },
            ExecuteMsg::Mint { recipient, amount } => Cw20ExecuteMsg::Mint { recipient, amount },
            ExecuteMsg::BridgeBurn { .. } => return None,
        })
    }
}

/// Queries are the standard cw20-base set (`Minter` returns the bridge).
pub type QueryMsg = cw20_base::msg::QueryMsg;
