//! # Radio Configuration and Validation
//!
//! This module defines the construction-time configuration for a wM-Bus radio:
//! which transceiver chip is fitted, how its pins are wired, and the RF carrier
//! frequency. Validation is a pure function of the configuration: it performs
//! no I/O, so it can run long before any hardware exists.
//!
//! ## Pin rules
//!
//! The two supported chips signal "data ready" differently, so the legal pin
//! set depends on the chip:
//! - **CC1101**: `gdo0_pin` and `gdo2_pin` are required, `irq_pin` is rejected
//! - **SX1276**: `irq_pin` is required, `gdo0_pin`/`gdo2_pin` are rejected
//!
//! The chip-select pin is always required; the reset pin is always optional.
//!
//! ## Example
//!
//! ```rust
//! use wmbus_radio::config::{RadioConfig, RadioVariant};
//!
//! let config = RadioConfig {
//!     variant: RadioVariant::Sx1276,
//!     cs_pin: 8,
//!     reset_pin: Some(25),
//!     frequency_mhz: 868.95,
//!     gdo0_pin: None,
//!     gdo2_pin: None,
//!     irq_pin: Some(24),
//! };
//! config.validate().expect("valid SX1276 wiring");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default carrier frequency in MHz (EU wM-Bus S/T-mode band).
pub const DEFAULT_FREQUENCY_MHZ: f32 = 868.95;

/// Lowest carrier frequency either chip family can synthesize, in MHz.
pub const MIN_FREQUENCY_MHZ: f32 = 300.0;

/// Highest carrier frequency either chip family can synthesize, in MHz.
pub const MAX_FREQUENCY_MHZ: f32 = 928.0;

/// Supported radio transceiver chips.
///
/// Fixed at construction and immutable for the driver's lifetime. Exactly two
/// chip families exist, so this is a closed enumeration rather than an
/// open-ended plugin registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadioVariant {
    /// TI CC1101-class transceiver (GDO0/GDO2 data-ready pins, strobe commands)
    Cc1101,
    /// Semtech SX1276-class transceiver (single IRQ pin, mode-register writes)
    Sx1276,
}

impl RadioVariant {
    /// Chip name as used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            RadioVariant::Cc1101 => "CC1101",
            RadioVariant::Sx1276 => "SX1276",
        }
    }
}

/// Errors raised by configuration validation.
///
/// Each variant names exactly which rule was broken so a failing configuration
/// can be corrected without consulting the chip wiring tables.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("gdo0_pin is required for CC1101")]
    MissingGdo0,

    #[error("gdo2_pin is required for CC1101")]
    MissingGdo2,

    #[error("irq_pin is not supported for CC1101, use gdo0_pin and gdo2_pin instead")]
    IrqPinUnsupported,

    #[error("irq_pin is required for SX1276")]
    MissingIrq,

    #[error("gdo0_pin and gdo2_pin are not supported for SX1276, use irq_pin instead")]
    GdoPinsUnsupported,

    #[error("frequency {0} MHz out of range {MIN_FREQUENCY_MHZ}-{MAX_FREQUENCY_MHZ} MHz")]
    FrequencyOutOfRange(f32),
}

/// Construction-time configuration for a wM-Bus radio.
///
/// Pin numbers are BCM GPIO identifiers on Raspberry Pi builds; other
/// platforms may map them however their bus implementation sees fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioConfig {
    /// Which transceiver chip is fitted
    pub variant: RadioVariant,
    /// Chip-select pin (always required)
    pub cs_pin: u8,
    /// Radio reset pin (optional for both chips)
    #[serde(default)]
    pub reset_pin: Option<u8>,
    /// Carrier frequency in MHz (default: 868.95)
    #[serde(default = "default_frequency")]
    pub frequency_mhz: f32,
    /// CC1101 FIFO-threshold data pin
    #[serde(default)]
    pub gdo0_pin: Option<u8>,
    /// CC1101 sync-word data pin
    #[serde(default)]
    pub gdo2_pin: Option<u8>,
    /// SX1276 interrupt pin
    #[serde(default)]
    pub irq_pin: Option<u8>,
}

fn default_frequency() -> f32 {
    DEFAULT_FREQUENCY_MHZ
}

impl RadioConfig {
    /// Create a minimal configuration for the given chip with the default
    /// frequency. Variant-specific pins start unset and must be filled in
    /// before validation passes.
    pub fn new(variant: RadioVariant, cs_pin: u8) -> Self {
        Self {
            variant,
            cs_pin,
            reset_pin: None,
            frequency_mhz: DEFAULT_FREQUENCY_MHZ,
            gdo0_pin: None,
            gdo2_pin: None,
            irq_pin: None,
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wmbus_radio::config::RadioConfig;
    ///
    /// let config = RadioConfig::from_json(
    ///     r#"{"variant":"Cc1101","cs_pin":8,"gdo0_pin":24,"gdo2_pin":25}"#,
    /// ).unwrap();
    /// assert_eq!(config.frequency_mhz, 868.95);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the pin/parameter combination for the selected chip.
    ///
    /// Pure function: no I/O, no side effects. Every rule violation maps to a
    /// distinct [`ConfigError`] so the failure is self-describing.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Configuration can drive the selected chip
    /// * `Err(ConfigError)` - Exactly which rule was broken
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FREQUENCY_MHZ..=MAX_FREQUENCY_MHZ).contains(&self.frequency_mhz) {
            return Err(ConfigError::FrequencyOutOfRange(self.frequency_mhz));
        }

        match self.variant {
            RadioVariant::Cc1101 => {
                if self.gdo0_pin.is_none() {
                    return Err(ConfigError::MissingGdo0);
                }
                if self.gdo2_pin.is_none() {
                    return Err(ConfigError::MissingGdo2);
                }
                if self.irq_pin.is_some() {
                    return Err(ConfigError::IrqPinUnsupported);
                }
            }
            RadioVariant::Sx1276 => {
                if self.irq_pin.is_none() {
                    return Err(ConfigError::MissingIrq);
                }
                if self.gdo0_pin.is_some() || self.gdo2_pin.is_some() {
                    return Err(ConfigError::GdoPinsUnsupported);
                }
            }
        }

        Ok(())
    }
}
