//! # wmbus-radio - A Rust Crate for wM-Bus Radio Reception
//!
//! The wmbus-radio crate drives sub-GHz radio transceivers to receive raw
//! wireless M-Bus (wM-Bus) telegrams from utility meters, such as
//! electricity, gas, water, and heat meters. Two chip families are
//! supported behind one controller: the TI CC1101 and the Semtech SX1276.
//!
//! ## Features
//!
//! - Register-exact CC1101 and SX1276 configuration for wM-Bus T-mode
//! - Uniform receive lifecycle: initialize, listen, deliver frame, re-arm
//! - RSSI reporting in dBm for both chip families
//! - Construction-time validation of chip/pin combinations, before any I/O
//! - Raspberry Pi SPI/GPIO support behind the `raspberry-pi` feature
//! - Recording mock bus for hardware-free testing
//!
//! ## Usage
//!
//! ```rust
//! use wmbus_radio::{
//!     init_logger, MockBus, Radio, RadioConfig, RadioVariant, ReceiveState,
//! };
//!
//! init_logger();
//!
//! let mut config = RadioConfig::new(RadioVariant::Cc1101, 8);
//! config.gdo0_pin = Some(24);
//! config.gdo2_pin = Some(25);
//!
//! let bus = MockBus::new();
//! // Make the mock's version register read as real silicon
//! bus.set_register(0x31 | 0xC0, 0x14);
//!
//! let mut radio = Radio::new(config, bus)?;
//! radio.initialize()?;
//! assert_eq!(radio.state(), ReceiveState::Listening);
//!
//! // In the run loop: poll after the data-ready pin fires.
//! if let Some(frame) = radio.try_receive()? {
//!     println!("{}", frame.as_rtlwmbus());
//! }
//! # Ok::<(), wmbus_radio::RadioError>(())
//! ```
//!
//! Frame contents are raw: decrypting and decoding the telegram payload is
//! the job of a downstream decoder such as wmbusmeters.

pub mod config;
pub mod error;
pub mod logging;
pub mod radio;

pub use crate::config::{ConfigError, RadioConfig, RadioVariant};
pub use crate::error::RadioError;
pub use crate::logging::{init_logger, log_info};

// Core radio types
pub use radio::controller::{Radio, ReceiveState};
pub use radio::frame::Frame;
pub use radio::hal::{MockBus, RegisterBus, TransportError};
pub use radio::transceiver::Transceiver;

#[cfg(feature = "raspberry-pi")]
pub use radio::hal::raspberry_pi::RaspberryPiBus;
