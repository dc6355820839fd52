//! # Register/Strobe Transport for Radio Hardware
//!
//! This module defines the bus trait the chip drivers are written against:
//! raw single-byte register reads/writes and command strobes over SPI, with
//! no policy of its own. Platform implementations live alongside it; a
//! recording mock is always available for tests and host-side development.

use thiserror::Error;

/// Errors that can occur during bus transactions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("SPI communication error")]
    Spi,

    #[error("GPIO operation error")]
    Gpio,

    #[error("Chip not responding (version register read 0x{version:02X})")]
    ChipNotResponding { version: u8 },
}

/// Register/strobe transport trait for sub-GHz transceivers.
///
/// All operations are synchronous and blocking for the duration of the bus
/// transaction; writes are observed by the chip in call order. The trait is
/// not reentrant-safe and must only be used from a single calling context.
pub trait RegisterBus {
    /// Write one byte to one chip register.
    fn write_register(&mut self, address: u8, value: u8) -> Result<(), TransportError>;

    /// Read one byte from one chip register.
    fn read_register(&mut self, address: u8) -> Result<u8, TransportError>;

    /// Send a single command byte that triggers a chip action without a data
    /// payload. Chips without a strobe concept (SX1276) never call this.
    fn strobe(&mut self, command: u8) -> Result<(), TransportError>;

    /// Read one byte from the chip's FIFO access address.
    ///
    /// Kept separate from `read_register` because FIFO reads consume data and
    /// must not be replayed or cached by an implementation.
    fn read_fifo(&mut self, address: u8) -> Result<u8, TransportError>;

    /// Busy-wait for the given number of microseconds.
    ///
    /// Datasheet-mandated settle times (reset, synthesizer calibration) go
    /// through this hook so mock implementations stay instantaneous.
    fn delay_us(&mut self, micros: u32);
}

// Recording mock (always available for testing)
pub mod mock;

// Platform implementations
#[cfg(feature = "raspberry-pi")]
pub mod raspberry_pi;

pub use mock::{BusOp, MockBus};

#[cfg(feature = "raspberry-pi")]
pub use raspberry_pi::RaspberryPiBus;
