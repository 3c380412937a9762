use serde::{Deserialize, Serialize};

use super::PACKET_SIZE;
use crate::core::{Error, NodeId, Result};

/// Periodic status datagram exchanged between nodes
///
/// The wire form never depends on the host's byte order or struct layout:
/// fields are shuffled into place explicitly, `counter` most significant
/// byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatusPacket {
    /// Sender identifier or packet sub-type
    pub ident: u8,
    /// Wrapping counter, stepped once per broadcast period
    pub counter: u16,
}

/// Role of a packet, as carried by its identifier byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketKind {
    /// A node announcing itself to peers in range
    Advertisement,
    /// A node reporting its counter
    Status,
    /// Any identifier without a known role
    Other(u8),
}

impl PacketKind {
    /// Returns the identifier byte for this kind
    pub fn ident(&self) -> u8 {
        match self {
            PacketKind::Advertisement => NodeId::ADVERTISEMENT.ident(),
            PacketKind::Status => NodeId::STATUS.ident(),
            PacketKind::Other(ident) => *ident,
        }
    }
}

impl From<u8> for PacketKind {
    fn from(ident: u8) -> Self {
        match NodeId(ident) {
            NodeId::ADVERTISEMENT => PacketKind::Advertisement,
            NodeId::STATUS => PacketKind::Status,
            _ => PacketKind::Other(ident),
        }
    }
}

impl StatusPacket {
    /// Creates a new status packet
    pub fn new(ident: u8, counter: u16) -> Self {
        StatusPacket { ident, counter }
    }

    /// Creates the first packet a node sends
    pub fn first(node: NodeId) -> Self {
        StatusPacket::new(node.ident(), 0)
    }

    /// Returns the packet kind named by the identifier byte
    pub fn kind(&self) -> PacketKind {
        PacketKind::from(self.ident)
    }

    /// Returns the packet for the next broadcast period
    pub fn next(&self) -> Self {
        StatusPacket {
            ident: self.ident,
            counter: self.counter.wrapping_add(1),
        }
    }

    /// Returns the byte receivers drive their indicators from
    ///
    /// This is the last byte on the wire, the low byte of `counter`.
    pub fn indicator(&self) -> u8 {
        self.counter.to_be_bytes()[1]
    }

    /// Returns whether indicator `index` of a row of `count` is lit
    ///
    /// Indicator `index` follows bit `count - index` of the indicator byte,
    /// read as a sign-extended 32-bit value with the bit number taken
    /// modulo 32. Bits above 7 therefore copy the byte's top bit.
    pub fn lit(&self, index: usize, count: usize) -> bool {
        if index >= count {
            return false;
        }
        let code = i32::from(i8::from_be_bytes([self.indicator()]));
        let bit = ((count - index) % 32) as u32;
        code & 1i32.wrapping_shl(bit) != 0
    }

    /// Encodes the packet into its wire form
    pub fn encode(&self) -> [u8; PACKET_SIZE] {
        let [hi, lo] = self.counter.to_be_bytes();
        [self.ident, hi, lo]
    }

    /// Decodes a packet from its wire form
    ///
    /// Fails with `Error::InvalidLength` unless `bytes` is exactly
    /// `PACKET_SIZE` long.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let wire: [u8; PACKET_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::invalid_length(bytes.len()))?;
        Ok(StatusPacket::from(wire))
    }
}

impl From<[u8; PACKET_SIZE]> for StatusPacket {
    fn from(wire: [u8; PACKET_SIZE]) -> Self {
        StatusPacket {
            ident: wire[0],
            counter: u16::from_be_bytes([wire[1], wire[2]]),
        }
    }
}

impl From<StatusPacket> for [u8; PACKET_SIZE] {
    fn from(packet: StatusPacket) -> Self {
        packet.encode()
    }
}

impl TryFrom<&[u8]> for StatusPacket {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        StatusPacket::decode(bytes)
    }
}

/// Encodes a status packet into its 3-byte wire form
pub fn encode(packet: StatusPacket) -> [u8; PACKET_SIZE] {
    packet.encode()
}

/// Decodes a status packet from a 3-byte wire buffer
pub fn decode(bytes: &[u8]) -> Result<StatusPacket> {
    StatusPacket::decode(bytes)
}
