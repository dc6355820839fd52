//! # SX1276 Register Definitions and Constants (FSK/OOK mode)
//!
//! Register addresses and mode values for the Semtech SX1276 transceiver
//! operating in FSK mode, per the SX1276/77/78/79 datasheet (rev. 7).
//! wM-Bus is 2-FSK, so the LoRa register bank is never selected.
//!
//! Unlike the CC1101, this chip family has no strobe concept: every state
//! change is a write to the operating-mode register, and FIFO maintenance is
//! a flag write to an IRQ register.

// =============================================================================
// Common Registers
// =============================================================================

/// FIFO read/write access
pub const REG_FIFO: u8 = 0x00;

/// Operating mode and modulation selection
pub const REG_OPMODE: u8 = 0x01;

/// Bit rate setting (MSB)
pub const REG_BITRATEMSB: u8 = 0x02;

/// Bit rate setting (LSB)
pub const REG_BITRATELSB: u8 = 0x03;

/// Frequency deviation setting (MSB)
pub const REG_FDEVMSB: u8 = 0x04;

/// Frequency deviation setting (LSB)
pub const REG_FDEVLSB: u8 = 0x05;

/// RF carrier frequency (MSB)
pub const REG_FRFMSB: u8 = 0x06;

/// RF carrier frequency (MID)
pub const REG_FRFMID: u8 = 0x07;

/// RF carrier frequency (LSB)
pub const REG_FRFLSB: u8 = 0x08;

/// Current RSSI value, in -0.5 dB steps
pub const REG_RSSIVALUE: u8 = 0x11;

/// Channel filter bandwidth control
pub const REG_RXBW: u8 = 0x12;

/// Preamble detector control
pub const REG_PREAMBLEDETECT: u8 = 0x1F;

/// Sync word recognition control
pub const REG_SYNCCONFIG: u8 = 0x27;

/// Sync word byte 1
pub const REG_SYNCVALUE1: u8 = 0x28;

/// Sync word byte 2
pub const REG_SYNCVALUE2: u8 = 0x29;

/// Packet mode settings (length mode, CRC, whitening)
pub const REG_PACKETCONFIG1: u8 = 0x30;

/// Payload length in fixed-length mode (0 = unlimited)
pub const REG_PAYLOADLENGTH: u8 = 0x32;

/// FIFO threshold and TX start condition
pub const REG_FIFOTHRESH: u8 = 0x35;

/// Status: mode-ready, RX-ready, preamble/sync detection flags
pub const REG_IRQFLAGS1: u8 = 0x3E;

/// Status: FIFO handling flags, packet flags
pub const REG_IRQFLAGS2: u8 = 0x3F;

/// Chip version (read-only)
pub const REG_VERSION: u8 = 0x42;

// =============================================================================
// Register Values
// =============================================================================

/// RegOpMode: FSK modulation, standby mode
pub const OPMODE_STANDBY: u8 = 0b001;

/// RegOpMode: FSK modulation, receiver mode
pub const OPMODE_RX: u8 = 0b101;

/// RegIrqFlags2: FIFO overrun flag; writing a 1 clears the FIFO
pub const IRQFLAGS2_FIFO_OVERRUN: u8 = 1 << 4;

/// RegIrqFlags2: FIFO empty flag (read-only)
pub const IRQFLAGS2_FIFO_EMPTY: u8 = 1 << 6;

/// Crystal oscillator frequency in Hz (32 MHz)
pub const F_XOSC: u32 = 32_000_000;

/// Fixed FSK modem profile for wM-Bus T-mode reception.
///
/// Matching intent to the CC1101 profile: ~32.768 kbps, ±50 kHz deviation,
/// 0x54 0x3D sync word, unlimited-length packet mode with CRC off so raw
/// frames reach the decoder untouched. Frequency selection is separate;
/// only the FRF registers depend on it.
pub const WMBUS_MODEM_SETTINGS: [(u8, u8); 12] = [
    (REG_BITRATEMSB, 0x03),     // 32e6 / 0x03D0 = ~32.768 kbps
    (REG_BITRATELSB, 0xD0),
    (REG_FDEVMSB, 0x03),        // 0x0333 * 61 Hz = ~50 kHz deviation
    (REG_FDEVLSB, 0x33),
    (REG_RXBW, 0x09),           // 200 kHz channel filter
    (REG_PREAMBLEDETECT, 0xAA), // detector on, 2 bytes, tolerance 10
    (REG_SYNCCONFIG, 0x91),     // auto-restart RX, sync on, 2 bytes
    (REG_SYNCVALUE1, 0x54),     // wM-Bus T-mode sync word, high byte
    (REG_SYNCVALUE2, 0x3D),     // wM-Bus T-mode sync word, low byte
    (REG_PACKETCONFIG1, 0x00),  // fixed length, CRC off, no filtering
    (REG_PAYLOADLENGTH, 0x00),  // length 0 selects unlimited packet mode
    (REG_FIFOTHRESH, 0x04),     // FIFO-level interrupt after 4 bytes
];
