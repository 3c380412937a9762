use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Error, Result};
use crate::protocol::{PacketKind, BROADCAST_PERIOD_MS, MESSAGE_TYPE_ID};

/// Identifier byte a node stamps into the packets it sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u8);

impl NodeId {
    /// Identifier used by nodes advertising themselves to peers in range
    pub const ADVERTISEMENT: NodeId = NodeId(0x01);

    /// Identifier used by nodes sending their status counter
    pub const STATUS: NodeId = NodeId(0x02);

    /// Creates a new node identifier
    pub fn new(ident: u8) -> Self {
        NodeId(ident)
    }

    /// Returns the raw identifier byte
    pub fn ident(&self) -> u8 {
        self.0
    }

    /// Returns the packet kind this identifier stands for
    pub fn kind(&self) -> PacketKind {
        PacketKind::from(self.0)
    }
}

impl From<u8> for NodeId {
    fn from(ident: u8) -> Self {
        NodeId(ident)
    }
}

/// Link parameters handed to the scheduler and dispatcher that carry status packets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Identifier stamped into outgoing packets
    pub node: NodeId,
    /// Interval between two status broadcasts
    #[serde(serialize_with = "super::serde::serialize_duration_ms")]
    #[serde(deserialize_with = "super::serde::deserialize_duration_ms")]
    pub broadcast_period: Duration,
    /// Message type tag frames carrying the packet are sent with
    pub message_type: u8,
}

impl Default for LinkConfig {
    fn default() -> Self {
        LinkConfig {
            node: NodeId::STATUS,
            broadcast_period: Duration::from_millis(BROADCAST_PERIOD_MS),
            message_type: MESSAGE_TYPE_ID,
        }
    }
}

impl LinkConfig {
    /// Checks that the configuration can drive a periodic broadcast
    pub fn validate(&self) -> Result<()> {
        if self.broadcast_period.is_zero() {
            return Err(Error::config("broadcast period must be non-zero"));
        }
        Ok(())
    }
}
