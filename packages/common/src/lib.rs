//! Common - Shared Types and Utilities for the Token Bridge Contracts
//!
//! This package provides the pieces both ledgers must agree on byte-for-byte
//! (the packet codec) together with the asset identifiers, the messaging
//! transport interface and the two-step ownership state machine.

pub mod address;
pub mod asset;
pub mod hash;
pub mod ownership;
pub mod packet;
pub mod transport;

pub use address::{validate_remote_address, AddressError};
pub use asset::{Asset, AssetInfo};
pub use hash::{keccak256, packet_hash};
pub use ownership::{Ownership, OwnershipError, OWNERSHIP};
pub use packet::{MintPacket, Packet, PacketError, PacketType, UnlockPacket};
pub use transport::QuoteResponse;
