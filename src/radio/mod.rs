pub mod hal;

// Chip drivers and their register maps
pub mod cc1101;
pub mod cc1101_registers;
pub mod sx1276;
pub mod sx1276_registers;

// Chip-agnostic layers
pub mod controller;
pub mod frame;
pub mod transceiver;
