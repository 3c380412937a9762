//! Core types for spotcomm
//!
//! This module contains the error taxonomy, node identity and link configuration.

pub mod error;
pub mod types;
pub mod serde;

pub use self::error::{Error, Result};
pub use self::types::{LinkConfig, NodeId};
