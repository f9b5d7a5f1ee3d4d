//! Asset identifiers for tokens custodied by an origin ledger.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, BankMsg, Coin, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

/// A token known to the chain: either a bank denom or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { contract_addr: String },
}

impl AssetInfo {
    /// The identifier used as storage key and as the token field of packets.
    pub fn key(&self) -> &str {
        match self {
            AssetInfo::Native { denom } => denom,
            AssetInfo::Cw20 { contract_addr } => contract_addr,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An amount of a specific asset.
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: Uint128) -> Self {
        Self { info, amount }
    }

    /// Build the message that moves this asset out of the calling contract.
    pub fn transfer_msg(&self, recipient: impl Into<String>) -> StdResult<CosmosMsg> {
        let recipient = recipient.into();
        Ok(match &self.info {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient,
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount: self.amount,
                }],
            }),
            AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient,
                    amount: self.amount,
                })?,
                funds: vec![],
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[test]
    fn test_key_and_display() {
        let native = AssetInfo::Native {
            denom: "uluna".to_string(),
        };
        let cw20 = AssetInfo::Cw20 {
            contract_addr: "contract0".to_string(),
        };

        assert_eq!(native.key(), "uluna");
        assert!(native.is_native());
        assert_eq!(cw20.to_string(), "contract0");
        assert!(!cw20.is_native());
    }

    #[test]
    fn test_native_transfer_msg() {
        let asset = Asset::new(
            AssetInfo::Native {
                denom: "uluna".to_string(),
            },
            Uint128::new(42),
        );

        let msg = asset.transfer_msg("terra1user").unwrap();
        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "terra1user".to_string(),
                amount: vec![Coin::new(42, "uluna")],
            })
        );
    }

    #[test]
    fn test_cw20_transfer_msg() {
        let asset = Asset::new(
            AssetInfo::Cw20 {
                contract_addr: "contract0".to_string(),
            },
            Uint128::new(7),
        );

        match asset.transfer_msg("terra1user").unwrap() {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, "contract0");
                assert!(funds.is_empty());
                let parsed: Cw20ExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    parsed,
                    Cw20ExecuteMsg::Transfer {
                        recipient: "terra1user".to_string(),
                        amount: Uint128::new(7),
                    }
                );
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
