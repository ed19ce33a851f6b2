// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! A software model of the aux block and its mini UART, for unit tests.
//!
//! Models the register-visible behavior the drivers rely on: the shared enable/IRQ registers,
//! the DLAB multiplexing of IO and IER, the self-clearing LSR overrun flag next to its sticky
//! STAT mirror, FIFO fill levels, and the interrupt priority order. Transmitted symbols are
//! appended to a log so tests can assert on the exact wire bytes.

use super::super::common::mock_bus::{self, BusDevice};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Hardware FIFO depth, both directions.
pub const FIFO_DEPTH: usize = 8;

// Register offsets relative to the aux block start.
const AUX_IRQ: usize = 0x00;
const AUX_ENABLES: usize = 0x04;

const UART: usize = 0x40;
const MU_IO: usize = UART;
const MU_IER: usize = UART + 0x04;
const MU_IIR: usize = UART + 0x08;
const MU_LCR: usize = UART + 0x0C;
const MU_MCR: usize = UART + 0x10;
const MU_LSR: usize = UART + 0x14;
const MU_MSR: usize = UART + 0x18;
const MU_SCR: usize = UART + 0x1C;
const MU_CNTL: usize = UART + 0x20;
const MU_STAT: usize = UART + 0x24;
const MU_BAUD: usize = UART + 0x28;

pub struct MockAuxUart {
    base: usize,

    enables: u32,
    pending_irqs: u32,

    ier: u32,
    lcr: u32,
    mcr: u32,
    scr: u32,
    cntl: u32,
    baud: u32,

    tx_fifo: VecDeque<u8>,
    rx_fifo: VecDeque<u8>,

    /// Set when a symbol is lost to a full receive FIFO; cleared only by an LSR read.
    overrun: bool,

    cts_line: bool,
    rts_line: bool,

    /// When set, IIR reads return this raw value instead of the computed one.
    forced_iir: Option<u32>,

    /// Every symbol written to the transmit side, in order.
    tx_log: Vec<u8>,
}

impl MockAuxUart {
    /// Create a model at `base` and route this thread's MMIO accesses to it.
    pub fn install(base: usize) -> Rc<RefCell<Self>> {
        let model = Rc::new(RefCell::new(Self {
            base,
            enables: 0,
            pending_irqs: 0,
            ier: 0,
            lcr: 0,
            mcr: 0,
            scr: 0,
            cntl: 0,
            baud: 0,
            tx_fifo: VecDeque::new(),
            rx_fifo: VecDeque::new(),
            overrun: false,
            cts_line: false,
            rts_line: false,
            forced_iir: None,
            tx_log: Vec::new(),
        }));

        mock_bus::install(model.clone());

        model
    }

    // Test-side manipulation.

    pub fn set_enables(&mut self, bits: u32) {
        self.enables = bits & 0b111;
    }

    pub fn set_pending_irqs(&mut self, bits: u32) {
        self.pending_irqs = bits & 0b111;
    }

    pub fn set_cntl(&mut self, raw: u32) {
        self.cntl = raw;
    }

    pub fn set_cts_line(&mut self, asserted: bool) {
        self.cts_line = asserted;
    }

    /// Deliver one symbol from the far end.
    pub fn push_received(&mut self, c: u8) {
        if self.rx_fifo.len() < FIFO_DEPTH {
            self.rx_fifo.push_back(c);
        } else {
            self.overrun = true;
        }
    }

    pub fn raise_overrun(&mut self) {
        self.overrun = true;
    }

    /// Pretend the far end stopped draining and the transmit FIFO backed up.
    pub fn fill_transmit_fifo(&mut self) {
        while self.tx_fifo.len() < FIFO_DEPTH {
            self.tx_fifo.push_back(0);
        }
    }

    pub fn force_iir(&mut self, raw: u32) {
        self.forced_iir = Some(raw);
    }

    // Test-side observation.

    pub fn enables(&self) -> u32 {
        self.enables
    }

    pub fn lcr(&self) -> u32 {
        self.lcr
    }

    pub fn mcr(&self) -> u32 {
        self.mcr
    }

    pub fn cntl(&self) -> u32 {
        self.cntl
    }

    pub fn baud(&self) -> u32 {
        self.baud
    }

    pub fn transmit_fill(&self) -> usize {
        self.tx_fifo.len()
    }

    pub fn tx_log(&self) -> &[u8] {
        &self.tx_log
    }

    // Model internals.

    fn dlab(&self) -> bool {
        self.lcr & 0x80 != 0
    }

    fn uart_enabled(&self) -> bool {
        self.enables & 0b001 != 0
    }

    fn tx_irq_active(&self) -> bool {
        self.ier & 0b01 != 0 && self.tx_fifo.is_empty()
    }

    fn rx_irq_active(&self) -> bool {
        self.ier & 0b10 != 0 && !self.rx_fifo.is_empty()
    }

    fn iir_value(&self) -> u32 {
        if let Some(raw) = self.forced_iir {
            return raw;
        }

        // Receive outranks transmit-empty; bit 0 is active-low pending.
        let fifo_enables = 0b11 << 6;
        if self.rx_irq_active() {
            (0b10 << 1) | fifo_enables
        } else if self.tx_irq_active() {
            (0b01 << 1) | fifo_enables
        } else {
            0b1 | fifo_enables
        }
    }

    fn stat_value(&self) -> u32 {
        let mut v = 0;

        v |= u32::from(!self.rx_fifo.is_empty());
        v |= u32::from(self.tx_fifo.len() < FIFO_DEPTH) << 1;
        v |= 1 << 2; // receiver idle
        v |= u32::from(self.tx_fifo.is_empty()) << 3;
        v |= u32::from(self.overrun) << 4;
        v |= u32::from(self.tx_fifo.len() == FIFO_DEPTH) << 5;
        v |= u32::from(self.rts_line) << 6;
        v |= u32::from(self.cts_line) << 7;
        v |= u32::from(self.tx_fifo.is_empty()) << 8;
        v |= u32::from(self.tx_fifo.is_empty()) << 9; // done: empty and shifted out
        v |= (self.rx_fifo.len() as u32) << 16;
        v |= (self.tx_fifo.len() as u32) << 24;

        v
    }

    fn lsr_value(&mut self) -> u32 {
        let mut v = 0;

        v |= u32::from(!self.rx_fifo.is_empty());
        v |= u32::from(self.overrun) << 1;
        v |= u32::from(self.tx_fifo.len() < FIFO_DEPTH) << 5;
        v |= u32::from(self.tx_fifo.is_empty()) << 6;

        // Reading LSR clears the overrun flag.
        self.overrun = false;

        v
    }

    fn aux_irq_value(&self) -> u32 {
        let uart_pending = self.tx_irq_active() || self.rx_irq_active();

        self.pending_irqs | u32::from(uart_pending)
    }
}

impl BusDevice for MockAuxUart {
    fn read(&mut self, addr: usize) -> u32 {
        let offset = addr - self.base;

        match offset {
            AUX_IRQ => return self.aux_irq_value(),
            AUX_ENABLES => return self.enables,
            _ => {}
        }

        // A disabled mini UART does not respond.
        assert!(
            self.uart_enabled(),
            "mini UART register read at offset {:#x} while disabled",
            offset
        );

        match offset {
            MU_IO => {
                if self.dlab() {
                    self.baud & 0xFF
                } else {
                    u32::from(self.rx_fifo.pop_front().unwrap_or(0))
                }
            }
            MU_IER => {
                if self.dlab() {
                    (self.baud >> 8) & 0xFF
                } else {
                    self.ier
                }
            }
            MU_IIR => self.iir_value(),
            MU_LCR => self.lcr,
            MU_MCR => self.mcr,
            MU_LSR => self.lsr_value(),
            MU_MSR => u32::from(self.cts_line) << 4,
            MU_SCR => self.scr,
            MU_CNTL => self.cntl,
            MU_STAT => self.stat_value(),
            MU_BAUD => self.baud,
            _ => panic!("read from unmapped aux offset {:#x}", offset),
        }
    }

    fn write(&mut self, addr: usize, value: u32) {
        let offset = addr - self.base;

        match offset {
            AUX_IRQ => return, // read-only
            AUX_ENABLES => {
                self.enables = value & 0b111;
                return;
            }
            _ => {}
        }

        assert!(
            self.uart_enabled(),
            "mini UART register write at offset {:#x} while disabled",
            offset
        );

        match offset {
            MU_IO => {
                if self.dlab() {
                    self.baud = (self.baud & 0xFF00) | (value & 0xFF);
                } else {
                    // A write against a full FIFO is discarded by the hardware; it must not
                    // show up on the wire log either.
                    let c = value as u8;
                    if self.tx_fifo.len() < FIFO_DEPTH {
                        self.tx_fifo.push_back(c);
                        self.tx_log.push(c);
                    }
                }
            }
            MU_IER => {
                if self.dlab() {
                    self.baud = (self.baud & 0x00FF) | ((value & 0xFF) << 8);
                } else {
                    self.ier = value & 0b11;
                }
            }
            MU_IIR => {
                if value & 0b010 != 0 {
                    self.rx_fifo.clear();
                }
                if value & 0b100 != 0 {
                    self.tx_fifo.clear();
                }
            }
            MU_LCR => self.lcr = value,
            MU_MCR => {
                self.mcr = value;
                // With autoflow off, MCR bit 1 drives the RTS line directly.
                self.rts_line = value & 0b10 != 0;
            }
            MU_LSR | MU_MSR | MU_STAT => {} // read-only
            MU_SCR => self.scr = value & 0xFF,
            MU_CNTL => self.cntl = value,
            MU_BAUD => self.baud = value & 0xFFFF,
            _ => panic!("write to unmapped aux offset {:#x}", offset),
        }
    }
}
