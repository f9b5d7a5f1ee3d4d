//! Mock Endpoint - loopback messaging transport for tests
//!
//! Speaks the endpoint side of `bridge_common::transport`: it quotes a
//! linear fee, accepts paid `Send` calls into an outbox, and lets the test
//! harness hand a packet to the receiving ledger with `Deliver`. Each
//! `(src_chain_id, nonce)` can be delivered once.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
