//! Packet hashing
//!
//! Both ledgers emit `packet_hash = keccak256(payload)` when a packet is
//! sent and when it is received, so an indexer can pair the two events.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// 0x-prefixed hex keccak256 of an encoded packet (for attributes)
pub fn packet_hash(payload: &[u8]) -> String {
    format!("0x{}", hex::encode(keccak256(payload)))
}
