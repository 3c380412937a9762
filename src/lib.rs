//! spotcomm: status packet wire format for wireless sensor nodes
//!
//! This library defines the 3-byte status datagram that heterogeneous nodes
//! exchange every broadcast period, with a byte order that does not depend
//! on the processor on either end of the link.
pub mod core;
pub mod protocol;

// Re-export commonly used items
pub use self::core::{Error, LinkConfig, NodeId, Result};
pub use self::protocol::{
    broadcast_period, decode, encode, PacketKind, StatusCodec, StatusPacket, BROADCAST_PERIOD_MS,
    MESSAGE_TYPE_ID, PACKET_SIZE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
