//! # Transceiver Facade
//!
//! Chip-agnostic dispatch over the two supported chip drivers. Exactly two
//! chip families exist, so this is a closed tagged variant rather than a
//! trait object: the compiler checks that every operation handles both
//! chips, and adding a third would be a deliberate API change.
//!
//! The facade is also where the CC1101's raw RSSI byte gets converted to
//! dBm: the chip driver deliberately returns the register value untouched,
//! and the uniform `rssi_dbm` surface applies the datasheet curve on its
//! behalf. The SX1276 driver already speaks dBm.

use crate::config::{RadioConfig, RadioVariant};
use crate::radio::cc1101::Cc1101Driver;
use crate::radio::hal::{RegisterBus, TransportError};
use crate::radio::sx1276::Sx1276Driver;
use log::info;

/// Closed set of chip drivers behind a uniform operation surface.
pub enum Transceiver<B: RegisterBus> {
    Cc1101(Cc1101Driver<B>),
    Sx1276(Sx1276Driver<B>),
}

impl<B: RegisterBus> Transceiver<B> {
    /// Bind the chip driver selected by the configuration. Unconditional:
    /// there is no runtime-optional degradation if a driver is missing.
    pub fn from_config(config: &RadioConfig, bus: B) -> Self {
        match config.variant {
            RadioVariant::Cc1101 => Transceiver::Cc1101(Cc1101Driver::new(bus)),
            RadioVariant::Sx1276 => Transceiver::Sx1276(Sx1276Driver::new(bus)),
        }
    }

    /// Chip name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            Transceiver::Cc1101(_) => "CC1101",
            Transceiver::Sx1276(_) => "SX1276",
        }
    }

    /// Reset and probe the chip, then write the full RF profile for the
    /// given carrier frequency.
    pub fn setup(&mut self, frequency_mhz: f32) -> Result<(), TransportError> {
        match self {
            Transceiver::Cc1101(driver) => {
                driver.reset()?;
                driver.configure_rf(frequency_mhz)?;
            }
            Transceiver::Sx1276(driver) => {
                driver.reset()?;
                driver.configure_rf(frequency_mhz)?;
            }
        }
        info!("{} setup completed for {frequency_mhz} MHz", self.name());
        Ok(())
    }

    /// Restart the receiver using the chip's mandated sequence.
    pub fn restart_rx(&mut self) -> Result<(), TransportError> {
        match self {
            Transceiver::Cc1101(driver) => driver.restart_rx(),
            Transceiver::Sx1276(driver) => driver.restart_rx(),
        }
    }

    /// Current RSSI in dBm.
    pub fn rssi_dbm(&mut self) -> Result<i16, TransportError> {
        match self {
            Transceiver::Cc1101(driver) => {
                let raw = driver.read_rssi_raw()?;
                Ok(Cc1101Driver::<B>::rssi_to_dbm(raw))
            }
            Transceiver::Sx1276(driver) => driver.read_rssi(),
        }
    }

    /// Pop one byte from the chip's RX FIFO, if any are pending.
    pub fn read_byte(&mut self) -> Result<Option<u8>, TransportError> {
        match self {
            Transceiver::Cc1101(driver) => driver.read_byte(),
            Transceiver::Sx1276(driver) => driver.read_byte(),
        }
    }
}
