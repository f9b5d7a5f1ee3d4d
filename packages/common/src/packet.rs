//! Bridge packet codec
//!
//! Both ledgers exchange exactly two packet kinds. A packet is a tag byte
//! followed by fixed-width fields, so the transport can relay it as opaque
//! bytes and either side can reject a foreign tag before reading anything else.
//!
//! # Byte Layout
//!
//! | tag | packet | fields                                                         | size  |
//! |-----|--------|----------------------------------------------------------------|-------|
//! | 0   | Mint   | token (64), recipient (64), amount_sd (32)                     | 161   |
//! | 1   | Unlock | token (64), recipient (64), withdraw_amount_sd (32), total_amount_sd (32), unwrap_to_native (1) | 194 |
//!
//! - Address slots hold the UTF-8 address (or native denom) left-aligned and
//!   zero padded to 64 bytes.
//! - Amount slots are uint256 big-endian. Amounts are shared-decimal `u128`
//!   values, so the upper 16 bytes must be zero.
//! - The boolean slot is a single `0x00` / `0x01` byte.

use cosmwasm_std::{Binary, Uint128};
use thiserror::Error;

/// Width of an address slot in bytes
pub const ADDRESS_SLOT_LEN: usize = 64;

/// Width of an amount slot in bytes (uint256)
pub const AMOUNT_SLOT_LEN: usize = 32;

/// Encoded size of a Mint packet
pub const MINT_PACKET_LEN: usize = 1 + 2 * ADDRESS_SLOT_LEN + AMOUNT_SLOT_LEN;

/// Encoded size of an Unlock packet
pub const UNLOCK_PACKET_LEN: usize = 1 + 2 * ADDRESS_SLOT_LEN + 2 * AMOUNT_SLOT_LEN + 1;

/// Errors raised while encoding or decoding packets.
///
/// These are structural errors; semantic failures (unsupported token, wrong
/// source chain) belong to the ledger receiving the packet.
#[derive(Error, Debug, PartialEq)]
pub enum PacketError {
    #[error("Empty packet payload")]
    Empty,

    #[error("Unknown packet type: {tag}")]
    UnknownPacketType { tag: u8 },

    #[error("Invalid {packet_type} packet length: expected {expected} bytes, got {got}")]
    InvalidLength {
        packet_type: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Address does not fit in a 64-byte slot: {len} bytes")]
    AddressTooLong { len: usize },

    #[error("Malformed address slot")]
    MalformedAddress,

    #[error("Amount does not fit in 128 bits")]
    AmountOverflow,

    #[error("Invalid boolean byte: {value}")]
    InvalidBool { value: u8 },

    #[error("Withdraw amount {withdraw} exceeds total amount {total}")]
    WithdrawExceedsTotal { withdraw: Uint128, total: Uint128 },
}

/// Packet discriminant, stored in the first byte of every payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketType {
    Mint = 0,
    Unlock = 1,
}

impl PacketType {
    /// Read the tag of a payload without interpreting the remaining bytes.
    pub fn from_payload(payload: &[u8]) -> Result<Self, PacketError> {
        let tag = *payload.first().ok_or(PacketError::Empty)?;
        Self::try_from(tag)
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PacketType::Mint => "mint",
            PacketType::Unlock => "unlock",
        }
    }

    fn encoded_len(self) -> usize {
        match self {
            PacketType::Mint => MINT_PACKET_LEN,
            PacketType::Unlock => UNLOCK_PACKET_LEN,
        }
    }
}

impl TryFrom<u8> for PacketType {
    type Error = PacketError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(PacketType::Mint),
            1 => Ok(PacketType::Unlock),
            tag => Err(PacketError::UnknownPacketType { tag }),
        }
    }
}

/// Origin -> hub: mint `amount_sd` wrapped tokens to `recipient`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MintPacket {
    /// Origin token key (CW20 address or native denom on the origin chain)
    pub token: String,
    /// Recipient address on the hub chain
    pub recipient: String,
    pub amount_sd: Uint128,
}

/// Hub -> origin: release `withdraw_amount_sd` to `recipient` and retire
/// `total_amount_sd` from the locked value. The difference is the fee.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnlockPacket {
    /// Origin token key (CW20 address or native denom on the origin chain)
    pub token: String,
    /// Recipient address on the origin chain
    pub recipient: String,
    pub withdraw_amount_sd: Uint128,
    pub total_amount_sd: Uint128,
    pub unwrap_to_native: bool,
}

impl MintPacket {
    pub fn encode(&self) -> Result<Binary, PacketError> {
        let mut writer = SlotWriter::new(PacketType::Mint);
        writer.address(&self.token)?;
        writer.address(&self.recipient)?;
        writer.amount(self.amount_sd);
        Ok(writer.finish())
    }

    pub fn decode(payload: &[u8]) -> Result<Self, PacketError> {
        let mut reader = SlotReader::new(payload, PacketType::Mint)?;
        Ok(Self {
            token: reader.address()?,
            recipient: reader.address()?,
            amount_sd: reader.amount()?,
        })
    }
}

impl UnlockPacket {
    /// Fee retained by the origin ledger, in shared decimals.
    pub fn fee_sd(&self) -> Uint128 {
        self.total_amount_sd.saturating_sub(self.withdraw_amount_sd)
    }

    pub fn encode(&self) -> Result<Binary, PacketError> {
        self.check_amounts()?;
        let mut writer = SlotWriter::new(PacketType::Unlock);
        writer.address(&self.token)?;
        writer.address(&self.recipient)?;
        writer.amount(self.withdraw_amount_sd);
        writer.amount(self.total_amount_sd);
        writer.flag(self.unwrap_to_native);
        Ok(writer.finish())
    }

    pub fn decode(payload: &[u8]) -> Result<Self, PacketError> {
        let mut reader = SlotReader::new(payload, PacketType::Unlock)?;
        let packet = Self {
            token: reader.address()?,
            recipient: reader.address()?,
            withdraw_amount_sd: reader.amount()?,
            total_amount_sd: reader.amount()?,
            unwrap_to_native: reader.flag()?,
        };
        packet.check_amounts()?;
        Ok(packet)
    }

    fn check_amounts(&self) -> Result<(), PacketError> {
        if self.withdraw_amount_sd > self.total_amount_sd {
            return Err(PacketError::WithdrawExceedsTotal {
                withdraw: self.withdraw_amount_sd,
                total: self.total_amount_sd,
            });
        }
        Ok(())
    }
}

/// Closed set of packets a ledger can receive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Packet {
    Mint(MintPacket),
    Unlock(UnlockPacket),
}

impl Packet {
    pub fn packet_type(&self) -> PacketType {
        match self {
            Packet::Mint(_) => PacketType::Mint,
            Packet::Unlock(_) => PacketType::Unlock,
        }
    }

    pub fn encode(&self) -> Result<Binary, PacketError> {
        match self {
            Packet::Mint(packet) => packet.encode(),
            Packet::Unlock(packet) => packet.encode(),
        }
    }

    pub fn decode(payload: &[u8]) -> Result<Self, PacketError> {
        match PacketType::from_payload(payload)? {
            PacketType::Mint => MintPacket::decode(payload).map(Packet::Mint),
            PacketType::Unlock => UnlockPacket::decode(payload).map(Packet::Unlock),
        }
    }
}

// ============================================================================
// Slot encoding
// ============================================================================

struct SlotWriter {
    buf: Vec<u8>,
}

impl SlotWriter {
    fn new(packet_type: PacketType) -> Self {
        let mut buf = Vec::with_capacity(packet_type.encoded_len());
        buf.push(packet_type.tag());
        Self { buf }
    }

    fn address(&mut self, address: &str) -> Result<(), PacketError> {
        let bytes = address.as_bytes();
        if bytes.len() > ADDRESS_SLOT_LEN {
            return Err(PacketError::AddressTooLong { len: bytes.len() });
        }
        // An interior NUL would be read back as the end of the address.
        if bytes.contains(&0) {
            return Err(PacketError::MalformedAddress);
        }
        let mut slot = [0u8; ADDRESS_SLOT_LEN];
        slot[..bytes.len()].copy_from_slice(bytes);
        self.buf.extend_from_slice(&slot);
        Ok(())
    }

    fn amount(&mut self, amount: Uint128) {
        let mut slot = [0u8; AMOUNT_SLOT_LEN];
        slot[AMOUNT_SLOT_LEN - 16..].copy_from_slice(&amount.u128().to_be_bytes());
        self.buf.extend_from_slice(&slot);
    }

    fn flag(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    fn finish(self) -> Binary {
        Binary::from(self.buf)
    }
}

struct SlotReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SlotReader<'a> {
    /// Validates tag first, then the exact length, and positions after the tag.
    fn new(payload: &'a [u8], expected: PacketType) -> Result<Self, PacketError> {
        let packet_type = PacketType::from_payload(payload)?;
        if packet_type != expected {
            return Err(PacketError::UnknownPacketType {
                tag: packet_type.tag(),
            });
        }
        if payload.len() != expected.encoded_len() {
            return Err(PacketError::InvalidLength {
                packet_type: expected.as_str(),
                expected: expected.encoded_len(),
                got: payload.len(),
            });
        }
        Ok(Self {
            bytes: payload,
            pos: 1,
        })
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], PacketError> {
        let end = self.pos + len;
        let slot = self.bytes.get(self.pos..end).ok_or(PacketError::InvalidLength {
            packet_type: "truncated",
            expected: end,
            got: self.bytes.len(),
        })?;
        self.pos = end;
        Ok(slot)
    }

    fn address(&mut self) -> Result<String, PacketError> {
        let slot = self.take(ADDRESS_SLOT_LEN)?;
        let len = slot.iter().position(|b| *b == 0).unwrap_or(slot.len());
        let (address, padding) = slot.split_at(len);
        if padding.iter().any(|b| *b != 0) {
            return Err(PacketError::MalformedAddress);
        }
        std::str::from_utf8(address)
            .map(str::to_string)
            .map_err(|_| PacketError::MalformedAddress)
    }

    fn amount(&mut self) -> Result<Uint128, PacketError> {
        let slot = self.take(AMOUNT_SLOT_LEN)?;
        let (high, low) = slot.split_at(AMOUNT_SLOT_LEN - 16);
        if high.iter().any(|b| *b != 0) {
            return Err(PacketError::AmountOverflow);
        }
        let mut word = [0u8; 16];
        word.copy_from_slice(low);
        Ok(Uint128::new(u128::from_be_bytes(word)))
    }

    fn flag(&mut self) -> Result<bool, PacketError> {
        match self.take(1)?[0] {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(PacketError::InvalidBool { value }),
        }
    }
}
