// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! BCM2837 mini UART driver.
//!
//! A 16550-flavored UART with 8-symbol FIFOs, hardware flow control and a baudrate divisor that
//! is programmable either through the dedicated `AUX_MU_BAUD` register or through the legacy
//! divisor latch reached by setting `DLAB`.
//!
//! The driver never busy-waits. A symbol offered while the transmit FIFO is full or the
//! transmitter is disabled is dropped and counted, not retried.

use crate::{bsp::device_driver::common::Reg32, synchronization, synchronization::NullLock};
use core::fmt;
use tock_registers::{
    interfaces::{ReadWriteable, Readable, Writeable},
    register_bitfields,
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

// Mini UART registers.
//
// Descriptions taken from the "BCM2837 ARM Peripherals" manual, with its IO/IER/IIR/LSR errata
// applied. All registers are accessed 32 bits wide; bits not named here are reserved.
register_bitfields! {
    u32,

    /// I/O Data.
    ///
    /// Three-way multiplexed: reads pop the receive FIFO, writes push the transmit FIFO, and
    /// with `DLAB` set both sides address the low byte of the baudrate divisor instead.
    AUX_MU_IO [
        /// Receive (read) / transmit (write) symbol.
        DATA OFFSET(0) NUMBITS(8) [],

        /// Divisor latch low byte, when DLAB is set.
        BAUDRATE_LSB OFFSET(0) NUMBITS(8) []
    ],

    /// Interrupt Enable.
    ///
    /// With `DLAB` set, addresses the high byte of the baudrate divisor instead.
    AUX_MU_IER [
        /// Interrupt when the transmit FIFO is empty.
        TRANSMIT_IRQ OFFSET(0) NUMBITS(1) [],

        /// Interrupt when the receive FIFO holds at least one symbol.
        RECEIVE_IRQ OFFSET(1) NUMBITS(1) [],

        /// Divisor latch high byte, when DLAB is set.
        BAUDRATE_MSB OFFSET(0) NUMBITS(8) []
    ],

    /// Interrupt Identify.
    AUX_MU_IIR [
        /// Cleared while an interrupt is pending.
        INTERRUPT_PENDING_N OFFSET(0) NUMBITS(1) [],

        /// On read: the highest-priority pending interrupt source.
        INTERRUPT_KIND OFFSET(1) NUMBITS(2) [
            None = 0b00,
            TransmitEmpty = 0b01,
            ReceiveReady = 0b10
        ],

        /// On write: clear the named FIFOs.
        FIFO_CLEAR OFFSET(1) NUMBITS(2) [
            Receive = 0b01,
            Transmit = 0b10,
            All = 0b11
        ],

        /// Reads as 0b11; the FIFOs are always enabled.
        FIFO_ENABLES OFFSET(6) NUMBITS(2) []
    ],

    /// Line Control.
    AUX_MU_LCR [
        /// Symbol width on the wire.
        DATA_SIZE OFFSET(0) NUMBITS(1) [
            SevenBit = 0b0,
            EightBit = 0b1
        ],

        /// Pull TX low continuously (break condition).
        BREAK OFFSET(6) NUMBITS(1) [],

        /// Divisor Latch Access Bit. While set, IO and IER address the baudrate divisor.
        DLAB OFFSET(7) NUMBITS(1) []
    ],

    /// Modem Control.
    AUX_MU_MCR [
        /// RTS line level when autoflow is off. Inverted: bit set drives RTS low.
        RTS OFFSET(1) NUMBITS(1) []
    ],

    /// Line Status.
    AUX_MU_LSR [
        /// The receive FIFO holds at least one symbol.
        DATA_READY OFFSET(0) NUMBITS(1) [],

        /// A symbol arrived while the receive FIFO was full and was discarded. Reading LSR
        /// clears this bit.
        RECEIVER_OVERRUN OFFSET(1) NUMBITS(1) [],

        /// The transmit FIFO can accept at least one symbol.
        TRANSMITTER_EMPTY OFFSET(5) NUMBITS(1) [],

        /// The transmit FIFO is empty and the shift register is done.
        TRANSMITTER_IDLE OFFSET(6) NUMBITS(1) []
    ],

    /// Modem Status.
    AUX_MU_MSR [
        /// CTS line level, inverted: bit set means CTS is low.
        CTS_STATUS OFFSET(4) NUMBITS(1) []
    ],

    /// Scratch.
    AUX_MU_SCR [
        /// One byte of storage with no hardware effect.
        SCRATCH OFFSET(0) NUMBITS(8) []
    ],

    /// Extra Control.
    AUX_MU_CNTL [
        RECEIVER_ENABLE OFFSET(0) NUMBITS(1) [],
        TRANSMITTER_ENABLE OFFSET(1) NUMBITS(1) [],

        /// Let the receiver deassert RTS when the receive FIFO fills up.
        RTS_AUTOFLOW OFFSET(2) NUMBITS(1) [],

        /// Let the transmitter hold off while CTS is deasserted.
        CTS_AUTOFLOW OFFSET(3) NUMBITS(1) [],

        /// Receive FIFO headroom at which autoflow deasserts RTS. The encoding is not
        /// monotonic in the headroom count.
        RTS_AUTOFLOW_LEVEL OFFSET(4) NUMBITS(2) [
            ThreeEmptySpaces = 0b00,
            TwoEmptySpaces = 0b01,
            OneEmptySpace = 0b10,
            FourEmptySpaces = 0b11
        ],

        /// Invert the RTS line polarity for autoflow.
        RTS_ASSERT_LEVEL OFFSET(6) NUMBITS(1) [],

        /// Invert the CTS line polarity for autoflow.
        CTS_ASSERT_LEVEL OFFSET(7) NUMBITS(1) []
    ],

    /// Extra Status.
    AUX_MU_STAT [
        /// The receive FIFO holds at least one symbol.
        SYMBOL_AVAILABLE OFFSET(0) NUMBITS(1) [],

        /// The transmit FIFO can accept at least one symbol.
        SPACE_AVAILABLE OFFSET(1) NUMBITS(1) [],

        /// The receiver is not mid-symbol.
        RECEIVER_IS_IDLE OFFSET(2) NUMBITS(1) [],

        /// The transmitter is not mid-symbol.
        TRANSMITTER_IS_IDLE OFFSET(3) NUMBITS(1) [],

        /// Sticky mirror of the LSR overrun bit; this copy is NOT cleared by reading STAT.
        RECEIVER_OVERRUN OFFSET(4) NUMBITS(1) [],

        /// The transmit FIFO is full.
        TRANSMIT_FIFO_FULL OFFSET(5) NUMBITS(1) [],

        /// RTS line level.
        RTS_STATUS OFFSET(6) NUMBITS(1) [],

        /// CTS line level.
        CTS_STATUS OFFSET(7) NUMBITS(1) [],

        /// The transmit FIFO is empty.
        TRANSMIT_FIFO_EMPTY OFFSET(8) NUMBITS(1) [],

        /// The transmit FIFO is empty and the last symbol has left the shift register.
        TRANSMITTER_DONE OFFSET(9) NUMBITS(1) [],

        /// Number of symbols in the receive FIFO, 0 to 8.
        RECEIVE_FIFO_FILL_LEVEL OFFSET(16) NUMBITS(4) [],

        /// Number of symbols in the transmit FIFO, 0 to 8.
        TRANSMIT_FIFO_FILL_LEVEL OFFSET(24) NUMBITS(4) []
    ],

    /// Baudrate.
    ///
    /// Direct 16-bit access to the divisor, no DLAB dance required.
    AUX_MU_BAUD [
        RATE OFFSET(0) NUMBITS(16) []
    ]
}

/// The mini UART's register block.
#[rustfmt::skip]
struct RegisterBlock {
    io:   Reg32<AUX_MU_IO::Register>,
    ier:  Reg32<AUX_MU_IER::Register>,
    iir:  Reg32<AUX_MU_IIR::Register>,
    lcr:  Reg32<AUX_MU_LCR::Register>,
    mcr:  Reg32<AUX_MU_MCR::Register>,
    lsr:  Reg32<AUX_MU_LSR::Register>,
    msr:  Reg32<AUX_MU_MSR::Register>,
    scr:  Reg32<AUX_MU_SCR::Register>,
    cntl: Reg32<AUX_MU_CNTL::Register>,
    stat: Reg32<AUX_MU_STAT::Register>,
    baud: Reg32<AUX_MU_BAUD::Register>,
}

impl RegisterBlock {
    /// # Safety
    ///
    /// - The user must ensure to provide the correct mini UART start address.
    #[rustfmt::skip]
    const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            io:   Reg32::new(mmio_start_addr),
            ier:  Reg32::new(mmio_start_addr + 0x04),
            iir:  Reg32::new(mmio_start_addr + 0x08),
            lcr:  Reg32::new(mmio_start_addr + 0x0C),
            mcr:  Reg32::new(mmio_start_addr + 0x10),
            lsr:  Reg32::new(mmio_start_addr + 0x14),
            msr:  Reg32::new(mmio_start_addr + 0x18),
            scr:  Reg32::new(mmio_start_addr + 0x1C),
            cntl: Reg32::new(mmio_start_addr + 0x20),
            stat: Reg32::new(mmio_start_addr + 0x24),
            baud: Reg32::new(mmio_start_addr + 0x28),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Symbol width on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataSize {
    SevenBit,
    EightBit,
}

/// Whether a status query may consume the hardware's self-clearing overrun flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverrunCheck {
    /// Read LSR; the hardware clears its overrun bit on this read.
    Clearing,
    /// Read STAT's sticky mirror; the LSR bit stays untouched.
    Preserving,
}

/// The interrupt source the mini UART reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InterruptKind {
    None,
    TransmitEmpty,
    ReceiveReady,
}

/// Receive FIFO headroom at which RTS autoflow deasserts RTS.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RtsAutoflowLevel {
    OneEmptySpace,
    TwoEmptySpaces,
    ThreeEmptySpaces,
    FourEmptySpaces,
}

/// What the multiplexed IO register transported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IoData {
    /// A symbol popped from the receive FIFO.
    Received(u8),
    /// A symbol to push into the transmit FIFO.
    Transmit(u8),
    /// The divisor latch low byte, valid only while DLAB is set.
    BaudrateLsb(u8),
}

struct MiniUartInner {
    registers: RegisterBlock,
    chars_written: usize,
    chars_lost: usize,
}

/// Representation of the mini UART.
pub struct MiniUart {
    inner: NullLock<MiniUartInner>,
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

impl RtsAutoflowLevel {
    /// The headroom count this level stands for.
    pub const fn empty_spaces(self) -> u32 {
        match self {
            Self::OneEmptySpace => 1,
            Self::TwoEmptySpaces => 2,
            Self::ThreeEmptySpaces => 3,
            Self::FourEmptySpaces => 4,
        }
    }

    fn to_field(self) -> tock_registers::fields::FieldValue<u32, AUX_MU_CNTL::Register> {
        match self {
            Self::OneEmptySpace => AUX_MU_CNTL::RTS_AUTOFLOW_LEVEL::OneEmptySpace,
            Self::TwoEmptySpaces => AUX_MU_CNTL::RTS_AUTOFLOW_LEVEL::TwoEmptySpaces,
            Self::ThreeEmptySpaces => AUX_MU_CNTL::RTS_AUTOFLOW_LEVEL::ThreeEmptySpaces,
            Self::FourEmptySpaces => AUX_MU_CNTL::RTS_AUTOFLOW_LEVEL::FourEmptySpaces,
        }
    }

    fn from_encoding(raw: u32) -> Self {
        match raw {
            0b00 => Self::ThreeEmptySpaces,
            0b01 => Self::TwoEmptySpaces,
            0b10 => Self::OneEmptySpace,
            _ => Self::FourEmptySpaces,
        }
    }
}

impl MiniUartInner {
    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide the correct mini UART start address.
    const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            registers: RegisterBlock::new(mmio_start_addr),
            chars_written: 0,
            chars_lost: 0,
        }
    }

    /// Set up a transmit-only 8N1 line.
    ///
    /// Full writes, not read-modify-writes: the aux block may just have been enabled, so no
    /// assumption about current register content holds. The receiver is deliberately left
    /// disabled; this driver only sends.
    fn init(&mut self) {
        self.registers
            .lcr
            .write(AUX_MU_LCR::DATA_SIZE::EightBit + AUX_MU_LCR::DLAB::CLEAR);
        self.registers
            .cntl
            .write(AUX_MU_CNTL::TRANSMITTER_ENABLE::SET + AUX_MU_CNTL::RECEIVER_ENABLE::CLEAR);
    }

    /// Push one symbol into the transmit FIFO, or drop it.
    ///
    /// A symbol is dropped, and counted as lost, when the FIFO is full or the transmitter is
    /// disabled. There is no retry and no spin.
    fn put_char(&mut self, c: u8) {
        let can_send = self.registers.stat.is_set(AUX_MU_STAT::SPACE_AVAILABLE)
            && self.registers.cntl.is_set(AUX_MU_CNTL::TRANSMITTER_ENABLE);

        if !can_send {
            self.chars_lost += 1;
            return;
        }

        self.write_io(IoData::Transmit(c));
        self.chars_written += 1;
    }

    /// Pop one symbol from the receive FIFO, if any.
    fn read_char(&mut self) -> Option<u8> {
        if !self.registers.stat.is_set(AUX_MU_STAT::SYMBOL_AVAILABLE) {
            return None;
        }

        match self.read_io() {
            IoData::Received(c) => Some(c),
            _ => None,
        }
    }

    /// Read the multiplexed IO register, interpreting the result per the current DLAB mode.
    fn read_io(&mut self) -> IoData {
        let raw = self.registers.io.read(AUX_MU_IO::DATA) as u8;

        if self.registers.lcr.is_set(AUX_MU_LCR::DLAB) {
            IoData::BaudrateLsb(raw)
        } else {
            IoData::Received(raw)
        }
    }

    /// Write the multiplexed IO register. The payload kind must match the current DLAB mode.
    fn write_io(&mut self, data: IoData) {
        let dlab = self.registers.lcr.is_set(AUX_MU_LCR::DLAB);

        match data {
            IoData::Transmit(c) => {
                assert!(!dlab, "IO write of a symbol while DLAB is set");
                self.registers.io.write(AUX_MU_IO::DATA.val(c as u32));
            }
            IoData::BaudrateLsb(b) => {
                assert!(dlab, "IO write of a divisor byte while DLAB is clear");
                self.registers
                    .io
                    .write(AUX_MU_IO::BAUDRATE_LSB.val(b as u32));
            }
            IoData::Received(_) => panic!("IO write of a received symbol"),
        }
    }

    /// Bring up the receive path.
    ///
    /// `init` deliberately leaves the receiver off; receiving is opt-in via this call.
    fn enable_receiver(&mut self) {
        self.registers
            .cntl
            .modify(AUX_MU_CNTL::RECEIVER_ENABLE::SET);
    }

    // Status queries. Each is a single register read.

    fn has_symbol_available(&self) -> bool {
        self.registers.stat.is_set(AUX_MU_STAT::SYMBOL_AVAILABLE)
    }

    fn has_space_available(&self) -> bool {
        self.registers.stat.is_set(AUX_MU_STAT::SPACE_AVAILABLE)
    }

    // LSR-backed line status. Reading LSR also consumes its self-clearing overrun bit, so
    // callers that still care about a pending overrun must query that first.

    fn data_is_ready(&self) -> bool {
        self.registers.lsr.is_set(AUX_MU_LSR::DATA_READY)
    }

    fn transmitter_is_empty(&self) -> bool {
        self.registers.lsr.is_set(AUX_MU_LSR::TRANSMITTER_EMPTY)
    }

    fn transmitter_is_idle(&self) -> bool {
        self.registers.lsr.is_set(AUX_MU_LSR::TRANSMITTER_IDLE)
    }

    fn is_transmitter_done(&self) -> bool {
        self.registers.stat.is_set(AUX_MU_STAT::TRANSMITTER_DONE)
    }

    fn transmit_fifo_fill_level(&self) -> u32 {
        self.registers
            .stat
            .read(AUX_MU_STAT::TRANSMIT_FIFO_FILL_LEVEL)
    }

    fn receive_fifo_fill_level(&self) -> u32 {
        self.registers
            .stat
            .read(AUX_MU_STAT::RECEIVE_FIFO_FILL_LEVEL)
    }

    /// Check for a receiver overrun.
    ///
    /// The LSR copy of the flag clears itself on read; callers that must not consume it use the
    /// sticky STAT mirror.
    fn has_overrun_occurred(&self, check: OverrunCheck) -> bool {
        match check {
            OverrunCheck::Clearing => self.registers.lsr.is_set(AUX_MU_LSR::RECEIVER_OVERRUN),
            OverrunCheck::Preserving => {
                self.registers.stat.is_set(AUX_MU_STAT::RECEIVER_OVERRUN)
            }
        }
    }

    fn is_cts_asserted(&self) -> bool {
        self.registers.msr.is_set(AUX_MU_MSR::CTS_STATUS)
    }

    fn is_rts_asserted(&self) -> bool {
        self.registers.stat.is_set(AUX_MU_STAT::RTS_STATUS)
    }

    // Flow control.

    fn set_cts_autoflow(&mut self, enabled: bool) {
        self.registers
            .cntl
            .modify(AUX_MU_CNTL::CTS_AUTOFLOW.val(u32::from(enabled)));
    }

    fn set_rts_autoflow(&mut self, enabled: bool, level: RtsAutoflowLevel) {
        self.registers
            .cntl
            .modify(AUX_MU_CNTL::RTS_AUTOFLOW.val(u32::from(enabled)) + level.to_field());
    }

    /// Change only the threshold; the autoflow enable bit stays as it is.
    fn set_rts_autoflow_level(&mut self, level: RtsAutoflowLevel) {
        self.registers.cntl.modify(level.to_field());
    }

    fn rts_autoflow_level(&self) -> RtsAutoflowLevel {
        RtsAutoflowLevel::from_encoding(
            self.registers.cntl.read(AUX_MU_CNTL::RTS_AUTOFLOW_LEVEL),
        )
    }

    /// Drive the RTS line by hand. Only meaningful while RTS autoflow is off.
    fn set_rts(&mut self, asserted: bool) {
        self.registers
            .mcr
            .modify(AUX_MU_MCR::RTS.val(u32::from(asserted)));
    }

    fn set_rts_assert_level_inverted(&mut self, inverted: bool) {
        self.registers
            .cntl
            .modify(AUX_MU_CNTL::RTS_ASSERT_LEVEL.val(u32::from(inverted)));
    }

    fn set_cts_assert_level_inverted(&mut self, inverted: bool) {
        self.registers
            .cntl
            .modify(AUX_MU_CNTL::CTS_ASSERT_LEVEL.val(u32::from(inverted)));
    }

    // Interrupts.

    fn set_transmit_interrupt(&mut self, enabled: bool) {
        self.registers
            .ier
            .modify(AUX_MU_IER::TRANSMIT_IRQ.val(u32::from(enabled)));
    }

    fn set_receive_interrupt(&mut self, enabled: bool) {
        self.registers
            .ier
            .modify(AUX_MU_IER::RECEIVE_IRQ.val(u32::from(enabled)));
    }

    /// The highest-priority pending interrupt source.
    fn pending_interrupt_kind(&self) -> InterruptKind {
        use AUX_MU_IIR::INTERRUPT_KIND::Value;

        match self.registers.iir.read_as_enum(AUX_MU_IIR::INTERRUPT_KIND) {
            Some(Value::None) => InterruptKind::None,
            Some(Value::TransmitEmpty) => InterruptKind::TransmitEmpty,
            Some(Value::ReceiveReady) => InterruptKind::ReceiveReady,
            None => panic!("mini UART reported impossible interrupt state"),
        }
    }

    // FIFO clears. Write-only side of IIR.

    fn clear_receive_fifo(&mut self) {
        self.registers.iir.write(AUX_MU_IIR::FIFO_CLEAR::Receive);
    }

    fn clear_transmit_fifo(&mut self) {
        self.registers.iir.write(AUX_MU_IIR::FIFO_CLEAR::Transmit);
    }

    fn clear_fifos(&mut self) {
        self.registers.iir.write(AUX_MU_IIR::FIFO_CLEAR::All);
    }

    // Baudrate.

    /// Program the divisor through the dedicated baudrate register.
    fn set_baudrate_divisor(&mut self, divisor: u16) {
        self.registers
            .baud
            .write(AUX_MU_BAUD::RATE.val(divisor as u32));
    }

    fn baudrate_divisor(&self) -> u16 {
        self.registers.baud.read(AUX_MU_BAUD::RATE) as u16
    }

    /// Program the divisor through the legacy latch: set DLAB, write both bytes through the
    /// remapped IO/IER registers, clear DLAB again.
    fn write_baudrate_via_divisor_latch(&mut self, divisor: u16) {
        self.registers.lcr.modify(AUX_MU_LCR::DLAB::SET);
        self.write_io(IoData::BaudrateLsb(divisor as u8));
        self.registers
            .ier
            .write(AUX_MU_IER::BAUDRATE_MSB.val((divisor >> 8) as u32));
        self.registers.lcr.modify(AUX_MU_LCR::DLAB::CLEAR);
    }

    // Scratch.

    fn set_scratch(&mut self, value: u8) {
        self.registers
            .scr
            .write(AUX_MU_SCR::SCRATCH.val(value as u32));
    }

    fn scratch(&self) -> u8 {
        self.registers.scr.read(AUX_MU_SCR::SCRATCH) as u8
    }

    fn set_data_size(&mut self, size: DataSize) {
        let field = match size {
            DataSize::SevenBit => AUX_MU_LCR::DATA_SIZE::SevenBit,
            DataSize::EightBit => AUX_MU_LCR::DATA_SIZE::EightBit,
        };

        self.registers.lcr.modify(field);
    }

    fn data_size(&self) -> DataSize {
        if self.registers.lcr.is_set(AUX_MU_LCR::DATA_SIZE) {
            DataSize::EightBit
        } else {
            DataSize::SevenBit
        }
    }

    fn set_break(&mut self, enabled: bool) {
        self.registers
            .lcr
            .modify(AUX_MU_LCR::BREAK.val(u32::from(enabled)));
    }
}

/// Byte-exact output; no newline translation, no blocking, excess symbols are dropped.
impl fmt::Write for MiniUartInner {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            self.put_char(b);
        }

        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl MiniUart {
    pub const COMPATIBLE: &'static str = "BCM2837 Mini UART";

    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide the correct mini UART start address.
    pub const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            inner: NullLock::new(MiniUartInner::new(mmio_start_addr)),
        }
    }

    /// Set up a transmit-only 8N1 line.
    ///
    /// The aux block must have the mini UART enabled before this is called.
    pub fn init(&self) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.init())
    }

    /// Send one symbol; drop it if the transmit path cannot take it right now.
    pub fn put_char(&self, c: u8) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.put_char(c))
    }

    /// Receive one symbol, if any is waiting.
    pub fn read_char(&self) -> Option<u8> {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.read_char())
    }

    pub fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| fmt::Write::write_fmt(inner, args))
    }

    /// Bring up the receive path. Not part of `init`; receiving is opt-in.
    pub fn enable_receiver(&self) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.enable_receiver())
    }

    pub fn has_symbol_available(&self) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.has_symbol_available())
    }

    pub fn has_space_available(&self) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.has_space_available())
    }

    /// All queued symbols have left the wire.
    pub fn is_transmitter_done(&self) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.is_transmitter_done())
    }

    /// The receive FIFO holds at least one symbol, per LSR.
    ///
    /// Reading LSR consumes its self-clearing overrun bit; check
    /// [`Self::has_overrun_occurred`] first if that still matters.
    pub fn data_is_ready(&self) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.data_is_ready())
    }

    /// The transmit FIFO can accept at least one symbol, per LSR. Consumes the LSR overrun bit.
    pub fn transmitter_is_empty(&self) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.transmitter_is_empty())
    }

    /// The transmit FIFO is empty and the shift register is done, per LSR. Consumes the LSR
    /// overrun bit.
    pub fn transmitter_is_idle(&self) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.transmitter_is_idle())
    }

    pub fn transmit_fifo_fill_level(&self) -> u32 {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.transmit_fifo_fill_level())
    }

    pub fn receive_fifo_fill_level(&self) -> u32 {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.receive_fifo_fill_level())
    }

    pub fn has_overrun_occurred(&self, check: OverrunCheck) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.has_overrun_occurred(check))
    }

    pub fn is_cts_asserted(&self) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.is_cts_asserted())
    }

    pub fn is_rts_asserted(&self) -> bool {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.is_rts_asserted())
    }

    pub fn set_cts_autoflow(&self, enabled: bool) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_cts_autoflow(enabled))
    }

    pub fn set_rts_autoflow(&self, enabled: bool, level: RtsAutoflowLevel) {
        use synchronization::interface::Mutex;
        self.inner
            .lock(|inner| inner.set_rts_autoflow(enabled, level))
    }

    pub fn set_rts_autoflow_level(&self, level: RtsAutoflowLevel) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_rts_autoflow_level(level))
    }

    pub fn rts_autoflow_level(&self) -> RtsAutoflowLevel {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.rts_autoflow_level())
    }

    pub fn set_rts(&self, asserted: bool) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_rts(asserted))
    }

    pub fn set_rts_assert_level_inverted(&self, inverted: bool) {
        use synchronization::interface::Mutex;
        self.inner
            .lock(|inner| inner.set_rts_assert_level_inverted(inverted))
    }

    pub fn set_cts_assert_level_inverted(&self, inverted: bool) {
        use synchronization::interface::Mutex;
        self.inner
            .lock(|inner| inner.set_cts_assert_level_inverted(inverted))
    }

    pub fn set_transmit_interrupt(&self, enabled: bool) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_transmit_interrupt(enabled))
    }

    pub fn set_receive_interrupt(&self, enabled: bool) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_receive_interrupt(enabled))
    }

    /// # Panics
    ///
    /// Panics if the hardware reports the reserved interrupt encoding.
    pub fn pending_interrupt_kind(&self) -> InterruptKind {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.pending_interrupt_kind())
    }

    pub fn clear_receive_fifo(&self) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.clear_receive_fifo())
    }

    pub fn clear_transmit_fifo(&self) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.clear_transmit_fifo())
    }

    pub fn clear_fifos(&self) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.clear_fifos())
    }

    pub fn set_baudrate_divisor(&self, divisor: u16) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_baudrate_divisor(divisor))
    }

    pub fn baudrate_divisor(&self) -> u16 {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.baudrate_divisor())
    }

    pub fn write_baudrate_via_divisor_latch(&self, divisor: u16) {
        use synchronization::interface::Mutex;
        self.inner
            .lock(|inner| inner.write_baudrate_via_divisor_latch(divisor))
    }

    pub fn set_scratch(&self, value: u8) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_scratch(value))
    }

    pub fn scratch(&self) -> u8 {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.scratch())
    }

    pub fn set_data_size(&self, size: DataSize) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_data_size(size))
    }

    pub fn data_size(&self) -> DataSize {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.data_size())
    }

    pub fn set_break(&self, enabled: bool) {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.set_break(enabled))
    }

    /// Symbols handed to the transmit FIFO since creation.
    pub fn chars_written(&self) -> usize {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.chars_written)
    }

    /// Symbols dropped because the transmit path could not take them.
    pub fn chars_lost(&self) -> usize {
        use synchronization::interface::Mutex;
        self.inner.lock(|inner| inner.chars_lost)
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------
