//! # CC1101 Register Definitions and Constants
//!
//! Register addresses, command strobes, and status registers for the TI
//! CC1101 sub-GHz transceiver, per the CC1101 datasheet (SWRS061I).
//!
//! ## Address Space
//!
//! - 0x00-0x2E: Configuration registers
//! - 0x30-0x3D: Command strobes (when written header-only)
//! - 0x30-0x3B: Status registers (when read with the burst bit set)
//! - 0x3F: FIFO access
//!
//! Status registers share addresses with command strobes; reading one
//! requires the burst bit (`| 0xC0`) so the chip routes the access to the
//! status bank.

// =============================================================================
// Configuration Registers
// =============================================================================

/// GDO2 output pin configuration
pub const REG_IOCFG2: u8 = 0x00;

/// GDO1 output pin configuration
pub const REG_IOCFG1: u8 = 0x01;

/// GDO0 output pin configuration
pub const REG_IOCFG0: u8 = 0x02;

/// RX FIFO and TX FIFO thresholds
pub const REG_FIFOTHR: u8 = 0x03;

/// Sync word, high byte
pub const REG_SYNC1: u8 = 0x04;

/// Sync word, low byte
pub const REG_SYNC0: u8 = 0x05;

/// Packet length
pub const REG_PKTLEN: u8 = 0x06;

/// Packet automation control 1
pub const REG_PKTCTRL1: u8 = 0x07;

/// Packet automation control 0
pub const REG_PKTCTRL0: u8 = 0x08;

/// Device address
pub const REG_ADDR: u8 = 0x09;

/// Channel number
pub const REG_CHANNR: u8 = 0x0A;

/// Frequency synthesizer control 1
pub const REG_FSCTRL1: u8 = 0x0B;

/// Frequency synthesizer control 0
pub const REG_FSCTRL0: u8 = 0x0C;

/// Frequency control word, high byte
pub const REG_FREQ2: u8 = 0x0D;

/// Frequency control word, middle byte
pub const REG_FREQ1: u8 = 0x0E;

/// Frequency control word, low byte
pub const REG_FREQ0: u8 = 0x0F;

/// Modem configuration 4 (channel bandwidth, data rate exponent)
pub const REG_MDMCFG4: u8 = 0x10;

/// Modem configuration 3 (data rate mantissa)
pub const REG_MDMCFG3: u8 = 0x11;

/// Modem configuration 2 (modulation format, sync mode)
pub const REG_MDMCFG2: u8 = 0x12;

/// Modem configuration 1 (preamble length, channel spacing exponent)
pub const REG_MDMCFG1: u8 = 0x13;

/// Modem configuration 0 (channel spacing mantissa)
pub const REG_MDMCFG0: u8 = 0x14;

/// Modem deviation setting
pub const REG_DEVIATN: u8 = 0x15;

/// Main radio control state machine configuration 2
pub const REG_MCSM2: u8 = 0x16;

/// Main radio control state machine configuration 1
pub const REG_MCSM1: u8 = 0x17;

/// Main radio control state machine configuration 0
pub const REG_MCSM0: u8 = 0x18;

/// Frequency offset compensation configuration
pub const REG_FOCCFG: u8 = 0x19;

/// Bit synchronization configuration
pub const REG_BSCFG: u8 = 0x1A;

/// AGC control 2
pub const REG_AGCCTRL2: u8 = 0x1B;

/// AGC control 1
pub const REG_AGCCTRL1: u8 = 0x1C;

/// AGC control 0
pub const REG_AGCCTRL0: u8 = 0x1D;

/// Front end RX configuration
pub const REG_FREND1: u8 = 0x21;

/// Front end TX configuration
pub const REG_FREND0: u8 = 0x22;

/// Frequency synthesizer calibration 3
pub const REG_FSCAL3: u8 = 0x23;

/// Frequency synthesizer calibration 2
pub const REG_FSCAL2: u8 = 0x24;

/// Frequency synthesizer calibration 1
pub const REG_FSCAL1: u8 = 0x25;

/// Frequency synthesizer calibration 0
pub const REG_FSCAL0: u8 = 0x26;

// =============================================================================
// Command Strobes
// =============================================================================

/// Reset chip
pub const STROBE_SRES: u8 = 0x30;

/// Calibrate frequency synthesizer and turn it off
pub const STROBE_SCAL: u8 = 0x33;

/// Enable RX
pub const STROBE_SRX: u8 = 0x34;

/// Exit RX/TX, enter IDLE
pub const STROBE_SIDLE: u8 = 0x36;

/// Flush the RX FIFO
pub const STROBE_SFRX: u8 = 0x3A;

/// Flush the TX FIFO
pub const STROBE_SFTX: u8 = 0x3B;

// =============================================================================
// Status Registers (read with the burst bit)
// =============================================================================

/// Chip version number
pub const REG_VERSION: u8 = 0x31;

/// Received signal strength indication
pub const REG_RSSI: u8 = 0x34;

/// Main radio control state machine state
pub const REG_MARCSTATE: u8 = 0x35;

/// Overflow flag and number of bytes in the RX FIFO
pub const REG_RXBYTES: u8 = 0x3B;

/// RX FIFO access
pub const REG_RXFIFO: u8 = 0x3F;

/// Burst/status access bit pattern; status registers and FIFO burst reads
/// require it in the header byte
pub const BURST: u8 = 0xC0;

/// Crystal oscillator frequency in Hz (26 MHz)
pub const F_OSC: u32 = 26_000_000;

/// Ordered RF register table for wM-Bus T-mode reception.
///
/// Written in full on every `configure_rf` call: some registers latch side
/// effects on write, so the sequence may not be shortened even when a value
/// matches the reset default. Frequency selection is separate; only
/// FREQ2/FREQ1/FREQ0 depend on it.
pub const WMBUS_RF_SETTINGS: [(u8, u8); 32] = [
    (REG_IOCFG2, 0x2E),   // GDO2 high impedance (unused)
    (REG_IOCFG0, 0x00),   // GDO0 asserts on RX FIFO threshold
    (REG_FIFOTHR, 0x00),  // 4 byte TX / 60 byte RX thresholds
    (REG_SYNC1, 0x54),    // wM-Bus T-mode sync word, high byte
    (REG_SYNC0, 0x3D),    // wM-Bus T-mode sync word, low byte
    (REG_PKTLEN, 0x00),
    (REG_PKTCTRL1, 0x00), // no address check, no append status
    (REG_PKTCTRL0, 0x02), // infinite packet length, CRC disabled
    (REG_ADDR, 0x00),
    (REG_CHANNR, 0x00),
    (REG_FSCTRL1, 0x06),  // IF frequency
    (REG_FSCTRL0, 0x00),
    (REG_MDMCFG4, 0x8B),  // ~203 kHz channel bandwidth, DRATE_E=11
    (REG_MDMCFG3, 0xF8),  // DRATE_M=248, ~32.768 kBaud
    (REG_MDMCFG2, 0x13),  // 2-FSK, 16/16 sync bits detected
    (REG_MDMCFG1, 0x22),  // 4 preamble bytes
    (REG_MDMCFG0, 0xF8),
    (REG_DEVIATN, 0x50),  // ±50 kHz deviation
    (REG_MCSM2, 0x07),
    (REG_MCSM1, 0x30),    // CCA always, RX->IDLE, TX->IDLE
    (REG_MCSM0, 0x18),    // auto-calibrate on IDLE->RX/TX
    (REG_FOCCFG, 0x16),
    (REG_BSCFG, 0x6C),
    (REG_AGCCTRL2, 0x43),
    (REG_AGCCTRL1, 0x40),
    (REG_AGCCTRL0, 0x91),
    (REG_FREND1, 0x56),
    (REG_FREND0, 0x10),
    (REG_FSCAL3, 0xE9),
    (REG_FSCAL2, 0x2A),
    (REG_FSCAL1, 0x00),
    (REG_FSCAL0, 0x1F),
];
