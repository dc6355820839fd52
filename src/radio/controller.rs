//! # Radio Controller
//!
//! Chip-agnostic receive controller. Owns the transceiver facade and the one
//! [`ReceiveState`] instance in the system, and sequences the receive
//! lifecycle: initialize → listen → assemble frame → deliver → re-arm.
//!
//! ## State machine
//!
//! ```text
//! Idle --initialize--> Configuring --ok--> Listening
//! Listening --frame assembled--> FrameReady --delivered--> Listening
//! any state --TransportError--> Error --initialize--> Configuring
//! ```
//!
//! `Error` is terminal for everything except `initialize()`: a failed
//! register sequence may have left the chip in an inconsistent mode, so the
//! only safe recovery is to replay the full configuration. `restart_receive`
//! fails fast in `Error` rather than silently re-arming.
//!
//! ## Concurrency contract
//!
//! The controller is built for a single-threaded, cooperative run loop. No
//! operation yields mid-transaction and no state is lock-guarded: all calls
//! must come from one logical context. An interrupt handler watching the
//! data-ready pin must only set a flag for the run loop; it must never call
//! into the controller while another bus transaction may be in flight.

use crate::config::RadioConfig;
use crate::error::RadioError;
use crate::radio::frame::Frame;
use crate::radio::hal::{RegisterBus, TransportError};
use crate::radio::transceiver::Transceiver;
use log::{debug, info, warn};

/// Receive lifecycle states. Owned exclusively by [`Radio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiveState {
    /// Constructed, no hardware touched yet
    Idle,
    /// RF configuration sequence in progress
    Configuring,
    /// Receiver armed, waiting for a frame
    Listening,
    /// A complete frame has been assembled and not yet delivered
    FrameReady,
    /// A transport error occurred; only `initialize()` leaves this state
    Error,
}

/// Chip-agnostic wM-Bus receive controller.
pub struct Radio<B: RegisterBus> {
    transceiver: Transceiver<B>,
    config: RadioConfig,
    state: ReceiveState,
    assembly: Vec<u8>,
    expected_len: Option<usize>,
}

impl<B: RegisterBus> Radio<B> {
    /// Validate the configuration and bind the matching chip driver.
    ///
    /// No hardware I/O happens here; the radio starts in `Idle` and touches
    /// the bus first in [`Self::initialize`].
    pub fn new(config: RadioConfig, bus: B) -> Result<Self, RadioError> {
        config.validate()?;
        let transceiver = Transceiver::from_config(&config, bus);
        info!(
            "Radio controller created for {} at {} MHz",
            transceiver.name(),
            config.frequency_mhz
        );
        Ok(Self {
            transceiver,
            config,
            state: ReceiveState::Idle,
            assembly: Vec::new(),
            expected_len: None,
        })
    }

    /// Current receive state.
    pub fn state(&self) -> ReceiveState {
        self.state
    }

    /// The configuration this radio was constructed with.
    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    /// Reset the chip, write the full RF profile, and arm the receiver.
    ///
    /// This is the entry point from `Idle` and the only way out of `Error`:
    /// the whole `configure_rf` + `restart_rx` sequence is replayed so the
    /// chip cannot be left with a half-applied configuration.
    pub fn initialize(&mut self) -> Result<(), RadioError> {
        self.state = ReceiveState::Configuring;
        self.assembly.clear();
        self.expected_len = None;

        let frequency = self.config.frequency_mhz;
        self.guard(|t| t.setup(frequency))?;
        self.guard(|t| t.restart_rx())?;

        self.state = ReceiveState::Listening;
        info!("{} listening", self.transceiver.name());
        Ok(())
    }

    /// Drain pending FIFO bytes and deliver a frame once one is complete.
    ///
    /// The first byte of a wM-Bus frame is the L-field, so a frame is
    /// complete after L+1 bytes. On completion the RSSI is sampled, the
    /// receiver is re-armed, and the frame is returned; the controller keeps
    /// no copy. Returns `Ok(None)` while a frame is still partial.
    ///
    /// Callers typically invoke this from the run loop after the data-ready
    /// pin fires, or on a polling interval.
    pub fn try_receive(&mut self) -> Result<Option<Frame>, RadioError> {
        match self.state {
            ReceiveState::Idle | ReceiveState::Configuring => {
                return Err(RadioError::NotConfigured)
            }
            ReceiveState::Error => return Err(RadioError::Faulted),
            ReceiveState::Listening | ReceiveState::FrameReady => {}
        }

        while let Some(byte) = self.guard(|t| t.read_byte())? {
            if self.assembly.is_empty() {
                // L-field: number of bytes that follow it
                if byte == 0 {
                    warn!("Discarding frame with zero L-field");
                    self.restart_assembly()?;
                    continue;
                }
                self.expected_len = Some(byte as usize + 1);
            }
            self.assembly.push(byte);

            if Some(self.assembly.len()) == self.expected_len {
                self.state = ReceiveState::FrameReady;
                let rssi_dbm = self.guard(|t| t.rssi_dbm())?;
                let frame = Frame::new(std::mem::take(&mut self.assembly), rssi_dbm);
                self.expected_len = None;

                debug!(
                    "Frame received: {} bytes at {} dBm",
                    frame.data().len(),
                    rssi_dbm
                );
                self.restart_assembly()?;
                return Ok(Some(frame));
            }
        }

        Ok(None)
    }

    /// Current RSSI in dBm, for the diagnostics/sensor layer.
    pub fn rssi_dbm(&mut self) -> Result<i16, RadioError> {
        if self.state == ReceiveState::Error {
            return Err(RadioError::Faulted);
        }
        self.guard(|t| t.rssi_dbm())
    }

    /// Re-arm the receiver, discarding any partially assembled frame.
    ///
    /// Caller-level recovery policy ("no frame in N seconds") lands here.
    /// Fails fast with [`RadioError::Faulted`] in `Error`: a corrupted
    /// register sequence must be re-initialized, not re-armed.
    pub fn restart_receive(&mut self) -> Result<(), RadioError> {
        match self.state {
            ReceiveState::Idle | ReceiveState::Configuring => Err(RadioError::NotConfigured),
            ReceiveState::Error => Err(RadioError::Faulted),
            ReceiveState::Listening | ReceiveState::FrameReady => {
                if !self.assembly.is_empty() {
                    debug!("Discarding {} partial bytes", self.assembly.len());
                }
                self.restart_assembly()
            }
        }
    }

    /// Restart RX and reset frame assembly, returning to `Listening`.
    fn restart_assembly(&mut self) -> Result<(), RadioError> {
        self.assembly.clear();
        self.expected_len = None;
        self.guard(|t| t.restart_rx())?;
        self.state = ReceiveState::Listening;
        Ok(())
    }

    /// Run a transceiver operation, latching `Error` on transport failure.
    fn guard<T>(
        &mut self,
        op: impl FnOnce(&mut Transceiver<B>) -> Result<T, TransportError>,
    ) -> Result<T, RadioError> {
        match op(&mut self.transceiver) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("{}: transport error: {err}", self.transceiver.name());
                self.state = ReceiveState::Error;
                Err(RadioError::Transport(err))
            }
        }
    }
}
