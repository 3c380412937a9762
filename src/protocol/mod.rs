//! Protocol implementation module
//!
//! This module defines the status packet, its wire encoding and the
//! constants the surrounding scheduler and dispatcher rely on.
//!
//! Wire layout (3 bytes, fixed):
//! - 1 byte identifier
//! - 2 bytes counter (big-endian)

pub mod codec;
pub mod packet;

pub use self::codec::StatusCodec;
pub use self::packet::{decode, encode, PacketKind, StatusPacket};

use std::time::Duration;

// Constants
/// Size of an encoded status packet in bytes
pub const PACKET_SIZE: usize = 3;

/// Interval in milliseconds between two status broadcasts
pub const BROADCAST_PERIOD_MS: u64 = 500;

/// Message type tag frames carrying a status packet are sent with
pub const MESSAGE_TYPE_ID: u8 = 0x41;

/// Returns the broadcast period as a `Duration` for timer APIs
pub fn broadcast_period() -> Duration {
    Duration::from_millis(BROADCAST_PERIOD_MS)
}
