//! # CC1101 Chip Driver
//!
//! Chip-specific driver for the TI CC1101 sub-GHz transceiver, built on top
//! of the [`RegisterBus`] transport. Translates high-level intents (configure
//! RF, restart receive, read RSSI) into the register writes and command
//! strobes the CC1101 datasheet dictates.
//!
//! The CC1101 signals events on its GDO0/GDO2 pins and is commanded through
//! single-byte strobes; status registers are read with the burst bit set.
//! RSSI is returned as the raw register byte at this layer; the register
//! encoding is non-linear and profile-dependent, so conversion to dBm is a
//! caller concern (see [`Cc1101Driver::rssi_to_dbm`]).

use crate::radio::cc1101_registers::*;
use crate::radio::hal::{RegisterBus, TransportError};
use log::{debug, trace};

/// Driver for the CC1101 transceiver (radio variant A).
///
/// Holds no receive state of its own; sequencing across operations belongs to
/// the radio controller. Every `TransportError` from the bus propagates
/// unchanged; retries are controller policy, not chip policy.
pub struct Cc1101Driver<B: RegisterBus> {
    bus: B,
}

impl<B: RegisterBus> Cc1101Driver<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Reset the chip and verify it responds on the bus.
    ///
    /// Issues SRES, waits out the datasheet reset time, flushes both FIFOs,
    /// then probes the version register: 0x00 or 0xFF means the chip is
    /// absent or the wiring is bad.
    pub fn reset(&mut self) -> Result<(), TransportError> {
        self.bus.strobe(STROBE_SRES)?;
        self.bus.delay_us(1000);
        self.bus.strobe(STROBE_SFTX)?;
        self.bus.strobe(STROBE_SFRX)?;

        let version = self.chip_version()?;
        if version == 0x00 || version == 0xFF {
            return Err(TransportError::ChipNotResponding { version });
        }
        debug!("CC1101 detected, version: 0x{version:02X}");
        Ok(())
    }

    /// Read the chip version status register.
    pub fn chip_version(&mut self) -> Result<u8, TransportError> {
        self.bus.read_register(REG_VERSION | BURST)
    }

    /// Write the full wM-Bus RF profile and program the carrier frequency.
    ///
    /// The profile table is written in datasheet order, every register every
    /// time: several registers latch side effects on write, so the sequence
    /// may not be shortened. Only the three FREQ registers depend on the
    /// requested frequency. Finishes with an SCAL strobe to calibrate the
    /// synthesizer at the new frequency.
    pub fn configure_rf(&mut self, frequency_mhz: f32) -> Result<(), TransportError> {
        for &(address, value) in WMBUS_RF_SETTINGS.iter() {
            self.bus.write_register(address, value)?;
        }

        // FREQ = f_carrier * 2^16 / f_xosc, 24-bit big-endian
        let frequency_hz = (frequency_mhz as f64 * 1e6) as u64;
        let frf = (frequency_hz * (1 << 16)) / F_OSC as u64;
        self.bus.write_register(REG_FREQ2, (frf >> 16) as u8)?;
        self.bus.write_register(REG_FREQ1, (frf >> 8) as u8)?;
        self.bus.write_register(REG_FREQ0, frf as u8)?;

        self.bus.strobe(STROBE_SCAL)?;
        self.bus.delay_us(750);

        debug!("CC1101 RF configured for {frequency_mhz} MHz (FREQ=0x{frf:06X})");
        Ok(())
    }

    /// Restart the receiver.
    ///
    /// Exactly three strobes, in this order: force idle, flush the RX FIFO,
    /// re-enter RX. Flushing before idling corrupts chip state; entering RX
    /// before flushing leaves stale bytes in the FIFO.
    pub fn restart_rx(&mut self) -> Result<(), TransportError> {
        self.bus.strobe(STROBE_SIDLE)?;
        self.bus.delay_us(100);
        self.bus.strobe(STROBE_SFRX)?;
        self.bus.strobe(STROBE_SRX)?;
        self.bus.delay_us(100);
        trace!("CC1101 RX restarted");
        Ok(())
    }

    /// Read the raw RSSI status register.
    ///
    /// No dBm conversion happens here; see [`Self::rssi_to_dbm`].
    pub fn read_rssi_raw(&mut self) -> Result<u8, TransportError> {
        self.bus.read_register(REG_RSSI | BURST)
    }

    /// Read one byte from the RX FIFO, if any are pending.
    ///
    /// Checks RXBYTES first (masking the overflow flag in bit 7) so an empty
    /// FIFO is never popped.
    pub fn read_byte(&mut self) -> Result<Option<u8>, TransportError> {
        let rxbytes = self.bus.read_register(REG_RXBYTES | BURST)?;
        if rxbytes & 0x7F == 0 {
            return Ok(None);
        }
        let byte = self.bus.read_fifo(REG_RXFIFO | BURST)?;
        Ok(Some(byte))
    }

    /// Convert a raw RSSI register value to dBm per the CC1101 datasheet.
    ///
    /// The register is a signed two's-complement value in half-dB steps with
    /// a 74 dB offset.
    pub fn rssi_to_dbm(raw: u8) -> i16 {
        if raw >= 128 {
            (raw as i16 - 256) / 2 - 74
        } else {
            raw as i16 / 2 - 74
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radio::hal::MockBus;

    #[test]
    fn rssi_to_dbm_matches_datasheet_fold() {
        // Two's-complement fold point: 127 is the strongest positive raw
        // value, 128 the weakest negative one.
        assert_eq!(Cc1101Driver::<MockBus>::rssi_to_dbm(127), -11);
        assert_eq!(Cc1101Driver::<MockBus>::rssi_to_dbm(128), -138);
        assert_eq!(Cc1101Driver::<MockBus>::rssi_to_dbm(0), -74);
    }

    #[test]
    fn read_byte_checks_fifo_count_first() {
        let mut driver = Cc1101Driver::new(MockBus::new());
        assert_eq!(driver.read_byte().unwrap(), None);
    }

    #[test]
    fn reset_rejects_unresponsive_chip() {
        // Version register reads 0x00 on an absent chip.
        let mut driver = Cc1101Driver::new(MockBus::new());
        assert_eq!(
            driver.reset(),
            Err(TransportError::ChipNotResponding { version: 0x00 })
        );
    }
}
