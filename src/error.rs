//! # Radio Error Handling
//!
//! This module defines the RadioError enum, which represents the different error
//! types that can occur in the wmbus-radio crate.

use crate::config::ConfigError;
use crate::radio::hal::TransportError;
use thiserror::Error;

/// Represents the different error types that can occur in the radio crate.
#[derive(Debug, Error)]
pub enum RadioError {
    /// Indicates an invalid pin or parameter combination, detected before any
    /// hardware I/O is attempted. Fatal to construction, never retried.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Indicates a bus communication failure while talking to the chip.
    /// The controller moves to the Error state and requires explicit
    /// re-initialization.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Indicates an operation was attempted while the controller is in the
    /// Error state. Only `initialize()` leaves that state.
    #[error("Radio is faulted; re-initialization required")]
    Faulted,

    /// Indicates a receive operation was attempted before `initialize()`.
    #[error("Radio is not configured; call initialize() first")]
    NotConfigured,
}
