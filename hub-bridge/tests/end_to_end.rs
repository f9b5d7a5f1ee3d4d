//! End-to-end flows across two origin chains and the hub.
//!
//! Every ledger and endpoint lives in one cw-multi-test `App`. Packets are
//! relayed by reading the source endpoint's outbox and delivering them
//! through the destination endpoint.

use bridge_common::AssetInfo;
use cosmwasm_std::{coins, Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use hub_bridge::msg::{PairingsResponse, TotalValueLockedResponse};
use mock_endpoint::msg::{OutboxResponse, QueryMsg as EndpointQueryMsg};
use origin_bridge::msg::{CollectedFeesResponse, LockedValueResponse};

const HUB_CHAIN_ID: u32 = 1;
const CHAIN_A: u32 = 101;
const CHAIN_B: u32 = 102;
const MESSAGING_FEE: u128 = 5_000;
const FEE_BPS: u16 = 20;
const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;
const SD_TO_LD: u128 = 1_000_000_000_000;
const USER: &str = "terra1qnufjmd8vwm6j6d3q28wxqr4d8408f340plraj";

// ============================================================================
// Test Setup
// ============================================================================

fn contract_hub() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        hub_bridge::contract::execute,
        hub_bridge::contract::instantiate,
        hub_bridge::contract::query,
    ))
}

fn contract_origin() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        origin_bridge::contract::execute,
        origin_bridge::contract::instantiate,
        origin_bridge::contract::query,
    ))
}

fn contract_wrapped_token() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        wrapped_token::contract::execute,
        wrapped_token::contract::instantiate,
        wrapped_token::contract::query,
    ))
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

fn contract_endpoint() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_endpoint::contract::execute,
        mock_endpoint::contract::instantiate,
        mock_endpoint::contract::query,
    ))
}

/// Bridge ledger and endpoint of one chain
struct Chain {
    chain_id: u32,
    endpoint: Addr,
    bridge: Addr,
}

struct Network {
    app: App,
    owner: Addr,
    user: Addr,
    hub: Chain,
    chain_a: Chain,
    chain_b: Chain,
    token_a: Addr,
    token_b: Addr,
    wrapped: Addr,
    wrapped_luna: Addr,
}

fn instantiate_endpoint(app: &mut App, code_id: u64, owner: &Addr, chain_id: u32) -> Addr {
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &mock_endpoint::msg::InstantiateMsg {
            chain_id,
            native_denom: "uluna".to_string(),
            base_fee: Uint128::new(MESSAGING_FEE),
            per_byte_fee: Uint128::zero(),
        },
        &[],
        format!("endpoint-{chain_id}"),
        None,
    )
    .unwrap()
}

fn instantiate_origin(app: &mut App, code_id: u64, owner: &Addr, chain_id: u32) -> Chain {
    let endpoint_code = app.store_code(contract_endpoint());
    let endpoint = instantiate_endpoint(app, endpoint_code, owner, chain_id);
    let bridge = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &origin_bridge::msg::InstantiateMsg {
                owner: None,
                endpoint: endpoint.to_string(),
                hub_chain_id: HUB_CHAIN_ID,
                native_denom: "uluna".to_string(),
                native_decimals: 6,
            },
            &[],
            format!("origin-bridge-{chain_id}"),
            None,
        )
        .unwrap();
    Chain {
        chain_id,
        endpoint,
        bridge,
    }
}

fn instantiate_cw20(app: &mut App, code_id: u64, owner: &Addr, user: &Addr, symbol: &str) -> Addr {
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{symbol} Token"),
            symbol: symbol.to_string(),
            decimals: 18,
            initial_balances: vec![Cw20Coin {
                address: user.to_string(),
                amount: Uint128::new(100 * ONE_TOKEN),
            }],
            mint: None,
            marketing: None,
        },
        &[],
        symbol.to_lowercase(),
        None,
    )
    .unwrap()
}

fn instantiate_wrapped(app: &mut App, code_id: u64, owner: &Addr, hub: &Addr, symbol: &str) -> Addr {
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &wrapped_token::msg::InstantiateMsg {
            name: format!("Wrapped {symbol}"),
            symbol: symbol.to_string(),
            decimals: 6,
            bridge: hub.to_string(),
        },
        &[],
        symbol.to_lowercase(),
        None,
    )
    .unwrap()
}

fn setup() -> Network {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked(USER);

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &user, coins(10_000_000_000, "uluna"))
            .unwrap();
    });

    let origin_code = app.store_code(contract_origin());
    let chain_a = instantiate_origin(&mut app, origin_code, &owner, CHAIN_A);
    let chain_b = instantiate_origin(&mut app, origin_code, &owner, CHAIN_B);

    let endpoint_code = app.store_code(contract_endpoint());
    let hub_endpoint = instantiate_endpoint(&mut app, endpoint_code, &owner, HUB_CHAIN_ID);
    let hub_code = app.store_code(contract_hub());
    let hub_bridge = app
        .instantiate_contract(
            hub_code,
            owner.clone(),
            &hub_bridge::msg::InstantiateMsg {
                owner: None,
                endpoint: hub_endpoint.to_string(),
                native_denom: "uluna".to_string(),
                withdrawal_fee_bps: FEE_BPS,
            },
            &[],
            "hub-bridge",
            None,
        )
        .unwrap();
    let hub = Chain {
        chain_id: HUB_CHAIN_ID,
        endpoint: hub_endpoint,
        bridge: hub_bridge,
    };

    let cw20_code = app.store_code(contract_cw20());
    let token_a = instantiate_cw20(&mut app, cw20_code, &owner, &user, "TESTA");
    let token_b = instantiate_cw20(&mut app, cw20_code, &owner, &user, "TESTB");

    let wrapped_code = app.store_code(contract_wrapped_token());
    let wrapped = instantiate_wrapped(&mut app, wrapped_code, &owner, &hub.bridge, "wTEST");
    let wrapped_luna = instantiate_wrapped(&mut app, wrapped_code, &owner, &hub.bridge, "wLUNA");

    // origin side: register the canonical tokens and trust the hub
    for (chain, token) in [(&chain_a, &token_a), (&chain_b, &token_b)] {
        let msgs = vec![
            origin_bridge::msg::ExecuteMsg::SetPeer {
                chain_id: HUB_CHAIN_ID,
                peer: hub.bridge.to_string(),
            },
            origin_bridge::msg::ExecuteMsg::RegisterToken {
                token: AssetInfo::Cw20 {
                    contract_addr: token.to_string(),
                },
                shared_decimals: 6,
            },
        ];
        for msg in msgs {
            app.execute_contract(owner.clone(), chain.bridge.clone(), &msg, &[])
                .unwrap();
        }
    }
    app.execute_contract(
        owner.clone(),
        chain_a.bridge.clone(),
        &origin_bridge::msg::ExecuteMsg::RegisterToken {
            token: AssetInfo::Native {
                denom: "uluna".to_string(),
            },
            shared_decimals: 6,
        },
        &[],
    )
    .unwrap();

    // hub side: trust both origins and pair one wrapped token with both chains
    let msgs = vec![
        hub_bridge::msg::ExecuteMsg::SetPeer {
            chain_id: CHAIN_A,
            peer: chain_a.bridge.to_string(),
        },
        hub_bridge::msg::ExecuteMsg::SetPeer {
            chain_id: CHAIN_B,
            peer: chain_b.bridge.to_string(),
        },
        hub_bridge::msg::ExecuteMsg::RegisterToken {
            local_token: wrapped.to_string(),
            origin_chain_id: CHAIN_A,
            origin_token: token_a.to_string(),
        },
        hub_bridge::msg::ExecuteMsg::RegisterToken {
            local_token: wrapped.to_string(),
            origin_chain_id: CHAIN_B,
            origin_token: token_b.to_string(),
        },
        hub_bridge::msg::ExecuteMsg::RegisterToken {
            local_token: wrapped_luna.to_string(),
            origin_chain_id: CHAIN_A,
            origin_token: "uluna".to_string(),
        },
    ];
    for msg in msgs {
        app.execute_contract(owner.clone(), hub.bridge.clone(), &msg, &[])
            .unwrap();
    }

    Network {
        app,
        owner,
        user,
        hub,
        chain_a,
        chain_b,
        token_a,
        token_b,
        wrapped,
        wrapped_luna,
    }
}

// ============================================================================
// Helpers
// ============================================================================

impl Network {
    fn chain(&self, chain_id: u32) -> &Chain {
        match chain_id {
            HUB_CHAIN_ID => &self.hub,
            CHAIN_A => &self.chain_a,
            _ => &self.chain_b,
        }
    }

    /// Deliver the newest packet sent from `from` to the ledger on `to`.
    fn relay(&mut self, from: u32, to: u32) -> Result<AppResponse, String> {
        let source = self.chain(from);
        let outbox: OutboxResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &source.endpoint,
                &EndpointQueryMsg::Outbox {
                    start_after: None,
                    limit: Some(30),
                },
            )
            .map_err(|e| e.to_string())?;
        let packet = outbox
            .packets
            .last()
            .cloned()
            .ok_or_else(|| "outbox is empty".to_string())?;
        assert_eq!(packet.dst_chain_id, to);

        let destination = self.chain(to);
        let msg = mock_endpoint::msg::ExecuteMsg::Deliver {
            src_chain_id: packet.src_chain_id,
            nonce: packet.nonce,
            sender: packet.sender.to_string(),
            receiver: destination.bridge.to_string(),
            payload: packet.payload,
        };
        let endpoint = destination.endpoint.clone();
        self.app
            .execute_contract(Addr::unchecked("terra1relayer"), endpoint, &msg, &[])
            .map_err(|e| e.root_cause().to_string())
    }

    fn lock_cw20(&mut self, chain_id: u32, token: &Addr, amount: u128) {
        let bridge = self.chain(chain_id).bridge.clone();
        let user = self.user.clone();
        self.app
            .execute_contract(
                user.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: bridge.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
        self.app
            .execute_contract(
                user.clone(),
                bridge,
                &origin_bridge::msg::ExecuteMsg::Bridge {
                    token: token.to_string(),
                    amount: Uint128::new(amount),
                    recipient: user.to_string(),
                    options: None,
                    refund_address: None,
                },
                &coins(MESSAGING_FEE, "uluna"),
            )
            .unwrap();
    }

    fn bridge_from_hub(
        &mut self,
        local_token: &Addr,
        destination_chain_id: u32,
        amount_sd: u128,
        unwrap_to_native: bool,
    ) -> Result<AppResponse, String> {
        let user = self.user.clone();
        self.app
            .execute_contract(
                user.clone(),
                self.hub.bridge.clone(),
                &hub_bridge::msg::ExecuteMsg::Bridge {
                    local_token: local_token.to_string(),
                    destination_chain_id,
                    amount: Uint128::new(amount_sd),
                    recipient: user.to_string(),
                    unwrap_to_native,
                    options: None,
                    refund_address: None,
                },
                &coins(MESSAGING_FEE, "uluna"),
            )
            .map_err(|e| e.root_cause().to_string())
    }

    fn cw20_balance(&self, token: &Addr, who: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: who.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    fn supply(&self, token: &Addr) -> Uint128 {
        let res: TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})
            .unwrap();
        res.total_supply
    }

    fn tvl(&self, chain_id: u32, origin_token: &str) -> Uint128 {
        let res: TotalValueLockedResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.hub.bridge,
                &hub_bridge::msg::QueryMsg::TotalValueLocked {
                    origin_chain_id: chain_id,
                    origin_token: origin_token.to_string(),
                },
            )
            .unwrap();
        res.amount_sd
    }

    fn locked(&self, chain_id: u32, token: &str) -> Uint128 {
        let res: LockedValueResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.chain(chain_id).bridge,
                &origin_bridge::msg::QueryMsg::LockedValue {
                    token: token.to_string(),
                },
            )
            .unwrap();
        res.amount_sd
    }

    fn collected_fees(&self, chain_id: u32, token: &str) -> Uint128 {
        let res: CollectedFeesResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.chain(chain_id).bridge,
                &origin_bridge::msg::QueryMsg::CollectedFees {
                    token: token.to_string(),
                },
            )
            .unwrap();
        res.amount
    }
}

// ============================================================================
// Flows
// ============================================================================

#[test]
fn test_cw20_round_trip_with_withdrawal_fee() {
    let mut net = setup();
    let token_a = net.token_a.clone();
    let wrapped = net.wrapped.clone();
    let user = net.user.clone();

    // 10 tokens plus dust that cannot be represented in 6 shared decimals
    net.lock_cw20(CHAIN_A, &token_a, 10 * ONE_TOKEN + 12_345);
    assert_eq!(
        net.cw20_balance(&token_a, &user),
        Uint128::new(90 * ONE_TOKEN)
    );
    assert_eq!(net.locked(CHAIN_A, token_a.as_str()), Uint128::new(10_000_000));

    net.relay(CHAIN_A, HUB_CHAIN_ID).unwrap();
    assert_eq!(net.cw20_balance(&wrapped, &user), Uint128::new(10_000_000));
    assert_eq!(net.tvl(CHAIN_A, token_a.as_str()), Uint128::new(10_000_000));

    net.bridge_from_hub(&wrapped, CHAIN_A, 10_000_000, false)
        .unwrap();
    assert_eq!(net.supply(&wrapped), Uint128::zero());
    assert_eq!(net.tvl(CHAIN_A, token_a.as_str()), Uint128::zero());

    net.relay(HUB_CHAIN_ID, CHAIN_A).unwrap();
    assert_eq!(net.locked(CHAIN_A, token_a.as_str()), Uint128::zero());
    // 20 bps stays behind on the origin chain
    assert_eq!(
        net.cw20_balance(&token_a, &user),
        Uint128::new(90 * ONE_TOKEN + 9_980_000 * SD_TO_LD)
    );
    let fees = net.collected_fees(CHAIN_A, token_a.as_str());
    assert_eq!(fees, Uint128::new(20_000 * SD_TO_LD));

    let owner = net.owner.clone();
    let origin = net.chain_a.bridge.clone();
    net.app
        .execute_contract(
            owner.clone(),
            origin,
            &origin_bridge::msg::ExecuteMsg::WithdrawFee {
                token: token_a.to_string(),
                to: owner.to_string(),
                amount: fees,
            },
            &[],
        )
        .unwrap();
    assert_eq!(net.cw20_balance(&token_a, &owner), fees);
    assert_eq!(net.collected_fees(CHAIN_A, token_a.as_str()), Uint128::zero());
}

#[test]
fn test_liquidity_is_isolated_per_origin_chain() {
    let mut net = setup();
    let token_a = net.token_a.clone();
    let token_b = net.token_b.clone();
    let wrapped = net.wrapped.clone();
    let user = net.user.clone();

    net.lock_cw20(CHAIN_A, &token_a, 10 * ONE_TOKEN);
    net.relay(CHAIN_A, HUB_CHAIN_ID).unwrap();
    net.lock_cw20(CHAIN_B, &token_b, ONE_TOKEN);
    net.relay(CHAIN_B, HUB_CHAIN_ID).unwrap();

    // one fungible wrapped balance backed by two ledgers
    assert_eq!(net.cw20_balance(&wrapped, &user), Uint128::new(11_000_000));

    let err = net
        .bridge_from_hub(&wrapped, CHAIN_B, 2_000_000, false)
        .unwrap_err();
    assert_eq!(
        err,
        "Insufficient liquidity on chain 102: requested 2000000, available 1000000"
    );

    net.bridge_from_hub(&wrapped, CHAIN_B, 1_000_000, false)
        .unwrap();
    net.relay(HUB_CHAIN_ID, CHAIN_B).unwrap();

    assert_eq!(net.tvl(CHAIN_B, token_b.as_str()), Uint128::zero());
    assert_eq!(net.locked(CHAIN_B, token_b.as_str()), Uint128::zero());
    assert_eq!(net.tvl(CHAIN_A, token_a.as_str()), Uint128::new(10_000_000));
    assert_eq!(net.locked(CHAIN_A, token_a.as_str()), Uint128::new(10_000_000));
    assert_eq!(net.supply(&wrapped), Uint128::new(10_000_000));
    assert_eq!(
        net.cw20_balance(&token_b, &user),
        Uint128::new(99 * ONE_TOKEN + 998_000 * SD_TO_LD)
    );

    let pairings: PairingsResponse = net
        .app
        .wrap()
        .query_wasm_smart(
            &net.hub.bridge,
            &hub_bridge::msg::QueryMsg::Pairings {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(pairings.pairings.len(), 3);
}

#[test]
fn test_native_round_trip() {
    let mut net = setup();
    let user = net.user.clone();
    let wrapped_luna = net.wrapped_luna.clone();
    let origin = net.chain_a.bridge.clone();
    let start = net.app.wrap().query_balance(&user, "uluna").unwrap().amount;

    net.app
        .execute_contract(
            user.clone(),
            origin.clone(),
            &origin_bridge::msg::ExecuteMsg::BridgeNative {
                amount: Uint128::new(1_000_000),
                recipient: user.to_string(),
                options: None,
                refund_address: None,
            },
            &coins(1_000_000 + MESSAGING_FEE, "uluna"),
        )
        .unwrap();
    net.relay(CHAIN_A, HUB_CHAIN_ID).unwrap();
    assert_eq!(
        net.cw20_balance(&wrapped_luna, &user),
        Uint128::new(1_000_000)
    );
    assert_eq!(net.tvl(CHAIN_A, "uluna"), Uint128::new(1_000_000));

    net.bridge_from_hub(&wrapped_luna, CHAIN_A, 1_000_000, true)
        .unwrap();
    net.relay(HUB_CHAIN_ID, CHAIN_A).unwrap();

    let end = net.app.wrap().query_balance(&user, "uluna").unwrap().amount;
    // two messaging fees and the 20 bps withdrawal fee
    assert_eq!(
        end,
        start - Uint128::new(2 * MESSAGING_FEE) - Uint128::new(2_000)
    );
    assert_eq!(net.locked(CHAIN_A, "uluna"), Uint128::zero());
    assert_eq!(net.collected_fees(CHAIN_A, "uluna"), Uint128::new(2_000));
}

#[test]
fn test_replayed_packet_is_rejected() {
    let mut net = setup();
    let token_a = net.token_a.clone();
    let wrapped = net.wrapped.clone();

    net.lock_cw20(CHAIN_A, &token_a, ONE_TOKEN);
    net.relay(CHAIN_A, HUB_CHAIN_ID).unwrap();
    let err = net.relay(CHAIN_A, HUB_CHAIN_ID).unwrap_err();
    assert_eq!(err, "Packet 0 from chain 101 already delivered");
    assert_eq!(net.supply(&wrapped), Uint128::new(1_000_000));
}

#[test]
fn test_unpayable_recipient_is_rejected_before_value_moves() {
    let mut net = setup();
    let token_a = net.token_a.clone();
    let wrapped = net.wrapped.clone();
    let user = net.user.clone();
    let origin = net.chain_a.bridge.clone();
    let hub = net.hub.bridge.clone();

    // origin side: no collateral is locked for a recipient the hub would refuse
    net.app
        .execute_contract(
            user.clone(),
            token_a.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: origin.to_string(),
                amount: Uint128::new(ONE_TOKEN),
                expires: None,
            },
            &[],
        )
        .unwrap();
    let res = net.app.execute_contract(
        user.clone(),
        origin,
        &origin_bridge::msg::ExecuteMsg::Bridge {
            token: token_a.to_string(),
            amount: Uint128::new(ONE_TOKEN),
            recipient: "NOT A VALID ADDRESS".to_string(),
            options: None,
            refund_address: None,
        },
        &coins(MESSAGING_FEE, "uluna"),
    );
    assert_eq!(res.unwrap_err().root_cause().to_string(), "Invalid recipient");
    assert_eq!(net.locked(CHAIN_A, token_a.as_str()), Uint128::zero());

    net.lock_cw20(CHAIN_A, &token_a, 10 * ONE_TOKEN);
    net.relay(CHAIN_A, HUB_CHAIN_ID).unwrap();

    // hub side: nothing is burned for a recipient the origin would refuse
    let res = net.app.execute_contract(
        user.clone(),
        hub,
        &hub_bridge::msg::ExecuteMsg::Bridge {
            local_token: wrapped.to_string(),
            destination_chain_id: CHAIN_A,
            amount: Uint128::new(10_000_000),
            recipient: "NOT A VALID ADDRESS".to_string(),
            unwrap_to_native: false,
            options: None,
            refund_address: None,
        },
        &coins(MESSAGING_FEE, "uluna"),
    );
    assert_eq!(res.unwrap_err().root_cause().to_string(), "Invalid recipient");
    assert_eq!(net.supply(&wrapped), Uint128::new(10_000_000));
    assert_eq!(net.tvl(CHAIN_A, token_a.as_str()), Uint128::new(10_000_000));

    // the value is still fully redeemable
    net.bridge_from_hub(&wrapped, CHAIN_A, 10_000_000, false)
        .unwrap();
    net.relay(HUB_CHAIN_ID, CHAIN_A).unwrap();
    assert_eq!(net.locked(CHAIN_A, token_a.as_str()), Uint128::zero());
    assert_eq!(net.tvl(CHAIN_A, token_a.as_str()), Uint128::zero());
    assert_eq!(net.supply(&wrapped), Uint128::zero());
}
