//! # Recording Mock Bus
//!
//! In-memory [`RegisterBus`] implementation used by the driver test-suites
//! and for host-side development without radio hardware. Registers behave as
//! a plain byte map (never-written addresses read as 0), strobes and writes
//! are recorded in issuance order, and FIFO reads pop from a seedable byte
//! queue.
//!
//! State lives behind an `Arc`, so a cloned handle observes everything a
//! driver does to the bus after taking ownership of another clone.

use super::{RegisterBus, TransportError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// A single recorded bus transaction, in issuance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    Write { address: u8, value: u8 },
    Read { address: u8 },
    Strobe { command: u8 },
    FifoRead { address: u8 },
}

#[derive(Debug, Default)]
struct MockBusInner {
    registers: HashMap<u8, u8>,
    writes: Vec<(u8, u8)>,
    strobes: Vec<u8>,
    ops: Vec<BusOp>,
    fifo: VecDeque<u8>,
    fail_with: Option<TransportError>,
}

/// Recording mock implementation of [`RegisterBus`].
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    inner: Arc<Mutex<MockBusInner>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a register value, simulating a hardware-updated status register.
    pub fn set_register(&self, address: u8, value: u8) {
        self.inner.lock().unwrap().registers.insert(address, value);
    }

    /// Current value of a register (0 if never written).
    pub fn register(&self, address: u8) -> u8 {
        self.inner
            .lock()
            .unwrap()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of the register map for exact-dump assertions.
    pub fn register_map(&self) -> HashMap<u8, u8> {
        self.inner.lock().unwrap().registers.clone()
    }

    /// All register writes, in issuance order.
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.inner.lock().unwrap().writes.clone()
    }

    /// All strobes, in issuance order.
    pub fn strobes(&self) -> Vec<u8> {
        self.inner.lock().unwrap().strobes.clone()
    }

    /// Every transaction, in issuance order.
    pub fn ops(&self) -> Vec<BusOp> {
        self.inner.lock().unwrap().ops.clone()
    }

    /// Queue bytes to be returned by subsequent FIFO reads.
    pub fn push_fifo(&self, bytes: &[u8]) {
        self.inner
            .lock()
            .unwrap()
            .fifo
            .extend(bytes.iter().copied());
    }

    /// Number of bytes still queued in the FIFO.
    pub fn fifo_len(&self) -> usize {
        self.inner.lock().unwrap().fifo.len()
    }

    /// Make every subsequent operation fail with the given error.
    pub fn fail_with(&self, error: TransportError) {
        self.inner.lock().unwrap().fail_with = Some(error);
    }

    /// Clear a previously injected failure.
    pub fn recover(&self) {
        self.inner.lock().unwrap().fail_with = None;
    }

    /// Forget all recorded writes and strobes (register contents persist).
    pub fn clear_log(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.writes.clear();
        inner.strobes.clear();
        inner.ops.clear();
    }
}

impl RegisterBus for MockBus {
    fn write_register(&mut self, address: u8, value: u8) -> Result<(), TransportError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }
        inner.registers.insert(address, value);
        inner.writes.push((address, value));
        inner.ops.push(BusOp::Write { address, value });
        Ok(())
    }

    fn read_register(&mut self, address: u8) -> Result<u8, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }
        inner.ops.push(BusOp::Read { address });
        Ok(inner.registers.get(&address).copied().unwrap_or(0))
    }

    fn strobe(&mut self, command: u8) -> Result<(), TransportError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }
        inner.strobes.push(command);
        inner.ops.push(BusOp::Strobe { command });
        Ok(())
    }

    fn read_fifo(&mut self, address: u8) -> Result<u8, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }
        inner.ops.push(BusOp::FifoRead { address });
        Ok(inner.fifo.pop_front().unwrap_or(0))
    }

    fn delay_us(&mut self, _micros: u32) {
        // Mock time does not pass.
    }
}
