//! # Raspberry Pi Bus Implementation
//!
//! [`RegisterBus`] implementation for Raspberry Pi 4 and 5, providing SPI
//! register access and GPIO control for CC1101 and SX1276 radio modules.
//!
//! ## Hardware Setup
//!
//! ### SPI0 Pins (recommended)
//! ```text
//! Pi Pin │ BCM GPIO │ Radio Pin │ Function
//! ───────┼──────────┼───────────┼─────────────
//! 19     │ GPIO 10  │ MOSI      │ SPI data out
//! 21     │ GPIO 9   │ MISO      │ SPI data in
//! 23     │ GPIO 11  │ SCLK      │ SPI clock
//! 24     │ GPIO 8   │ CSn/NSS   │ Chip select
//! ```
//!
//! Data-ready wiring is chip-specific: GDO0/GDO2 for CC1101, DIO/IRQ for
//! SX1276. Those pins carry edge interrupts for the caller's run loop and are
//! not read by the bus itself.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use wmbus_radio::config::{RadioConfig, RadioVariant};
//! use wmbus_radio::radio::hal::raspberry_pi::RaspberryPiBus;
//!
//! let mut config = RadioConfig::new(RadioVariant::Sx1276, 8);
//! config.irq_pin = Some(24);
//! config.reset_pin = Some(22);
//! config.validate()?;
//!
//! let bus = RaspberryPiBus::new(0, &config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::{RadioConfig, RadioVariant};
use crate::radio::hal::{RegisterBus, TransportError};
use log::{debug, warn};
use rppal::gpio::{Gpio, OutputPin};
use rppal::spi::{BitOrder, Bus, Mode, SlaveSelect, Spi};
use std::thread;
use std::time::Duration;

/// SPI clock for both chip families. CC1101 tops out at 6.5 MHz for burst
/// access; 4 MHz leaves margin on long wires.
const SPI_SPEED_HZ: u32 = 4_000_000;

/// Raspberry Pi implementation of [`RegisterBus`].
///
/// The SPI address-byte encoding differs between the chip families (CC1101
/// sets bit 7 for reads, SX1276 sets bit 7 for writes), so the bus is bound
/// to a [`RadioVariant`] at construction.
pub struct RaspberryPiBus {
    spi: Spi,
    variant: RadioVariant,
    reset_pin: Option<OutputPin>,
}

impl RaspberryPiBus {
    /// Open the given SPI bus and claim the reset pin from the configuration.
    ///
    /// # Arguments
    ///
    /// * `spi_bus` - SPI bus number (0 for primary SPI, 1 for auxiliary SPI)
    /// * `config` - Validated radio configuration (variant, reset pin)
    pub fn new(spi_bus: u8, config: &RadioConfig) -> Result<Self, TransportError> {
        let (bus, slave_select) = match spi_bus {
            0 => (Bus::Spi0, SlaveSelect::Ss0),
            1 => (Bus::Spi1, SlaveSelect::Ss0),
            _ => {
                warn!("Invalid SPI bus {spi_bus}, only 0 and 1 are supported");
                return Err(TransportError::Spi);
            }
        };

        let mut spi = Spi::new(bus, slave_select, SPI_SPEED_HZ, Mode::Mode0)
            .map_err(|_| TransportError::Spi)?;
        spi.set_bit_order(BitOrder::MsbFirst)
            .map_err(|_| TransportError::Spi)?;

        let reset_pin = match config.reset_pin {
            Some(pin) => {
                let gpio = Gpio::new().map_err(|_| TransportError::Gpio)?;
                Some(
                    gpio.get(pin)
                        .map_err(|_| TransportError::Gpio)?
                        .into_output_high(),
                )
            }
            None => None,
        };

        debug!(
            "SPI{spi_bus} opened for {} at {SPI_SPEED_HZ} Hz",
            config.variant.name()
        );

        Ok(Self {
            spi,
            variant: config.variant,
            reset_pin,
        })
    }

    /// Pulse the hardware reset line, if wired.
    ///
    /// Both chips use an active-low reset with a microsecond-scale minimum
    /// pulse; 100 us low followed by a 5 ms settle covers both datasheets.
    pub fn hardware_reset(&mut self) -> Result<(), TransportError> {
        if let Some(pin) = self.reset_pin.as_mut() {
            pin.set_low();
            thread::sleep(Duration::from_micros(100));
            pin.set_high();
            thread::sleep(Duration::from_millis(5));
            debug!("Hardware reset pulsed");
        }
        Ok(())
    }

    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), TransportError> {
        self.spi
            .transfer(rx, tx)
            .map(|_| ())
            .map_err(|_| TransportError::Spi)
    }
}

impl RegisterBus for RaspberryPiBus {
    fn write_register(&mut self, address: u8, value: u8) -> Result<(), TransportError> {
        let header = match self.variant {
            // CC1101: bit 7 clear selects a write
            RadioVariant::Cc1101 => address,
            // SX1276: bit 7 set selects a write
            RadioVariant::Sx1276 => address | 0x80,
        };
        let tx = [header, value];
        let mut rx = [0u8; 2];
        self.transfer(&tx, &mut rx)
    }

    fn read_register(&mut self, address: u8) -> Result<u8, TransportError> {
        let header = match self.variant {
            // CC1101: bit 7 set selects a read; burst bits pass through
            RadioVariant::Cc1101 => address | 0x80,
            // SX1276: bit 7 clear selects a read
            RadioVariant::Sx1276 => address & 0x7F,
        };
        let tx = [header, 0x00];
        let mut rx = [0u8; 2];
        self.transfer(&tx, &mut rx)?;
        Ok(rx[1])
    }

    fn strobe(&mut self, command: u8) -> Result<(), TransportError> {
        let tx = [command];
        let mut rx = [0u8; 1];
        self.transfer(&tx, &mut rx)
    }

    fn read_fifo(&mut self, address: u8) -> Result<u8, TransportError> {
        self.read_register(address)
    }

    fn delay_us(&mut self, micros: u32) {
        thread::sleep(Duration::from_micros(micros as u64));
    }
}
