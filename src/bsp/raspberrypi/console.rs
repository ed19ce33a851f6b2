// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! BSP console facilities.
//!
//! A send-only kernel console on top of the mini UART. Bringing it up is a fixed sequence:
//! enable the mini UART in the aux block, program the 8N1 transmit-only line, then set the
//! baudrate divisor. Output never blocks; symbols the UART cannot take are dropped and counted.

use crate::{
    bsp::device_driver::{Aux, AuxSelection, MiniUart},
    console, driver,
};
use core::fmt;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The kernel console.
pub struct Console {
    aux: Aux,
    uart: MiniUart,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl Console {
    pub const COMPATIBLE: &'static str = "BCM2837 Mini UART Console";

    /// Divisor for 115200 baud at the 250 MHz core clock the firmware sets up.
    pub const BAUDRATE_DIVISOR_115200: u16 = 270;

    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide the correct MMIO start addresses.
    pub const unsafe fn new(aux_mmio_start_addr: usize, uart_mmio_start_addr: usize) -> Self {
        Self {
            aux: Aux::new(aux_mmio_start_addr),
            uart: MiniUart::new(uart_mmio_start_addr),
        }
    }

    /// Bring up the console line.
    ///
    /// Order matters: the mini UART ignores register writes until its aux enable bit is set.
    pub fn init(&self) {
        self.aux.enable(AuxSelection::mini_uart());
        self.uart.init();
        self.uart
            .set_baudrate_divisor(Self::BAUDRATE_DIVISOR_115200);
    }

    /// Send raw bytes, unmodified. No newline translation, no blocking.
    pub fn print(&self, bytes: &[u8]) {
        for &b in bytes {
            self.uart.put_char(b);
        }
    }
}

//------------------------------------------------------------------------------
// OS Interface Code
//------------------------------------------------------------------------------

impl driver::interface::DeviceDriver for Console {
    fn compatible(&self) -> &'static str {
        Self::COMPATIBLE
    }

    unsafe fn init(&self) -> Result<(), &'static str> {
        Console::init(self);

        Ok(())
    }
}

impl console::interface::Write for Console {
    fn write_char(&self, c: char) {
        let mut buf = [0; 4];
        self.print(c.encode_utf8(&mut buf).as_bytes());
    }

    fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result {
        self.uart.write_fmt(args)
    }
}

impl console::interface::Read for Console {
    fn clear_rx(&self) {
        self.uart.clear_receive_fifo();
    }
}

impl console::interface::Statistics for Console {
    fn chars_written(&self) -> usize {
        self.uart.chars_written()
    }

    fn chars_lost(&self) -> usize {
        self.uart.chars_lost()
    }
}

impl console::interface::All for Console {}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp::device_driver::mock::MockAuxUart;
    use crate::console::interface::{Statistics, Write};

    const AUX_BASE: usize = 0x3F21_5000;
    const UART_BASE: usize = AUX_BASE + 0x40;

    fn console_under_test() -> (std::rc::Rc<std::cell::RefCell<MockAuxUart>>, Console) {
        let model = MockAuxUart::install(AUX_BASE);
        let console = unsafe { Console::new(AUX_BASE, UART_BASE) };
        console.init();

        (model, console)
    }

    #[test]
    fn init_enables_and_configures_the_uart() {
        let (model, _console) = console_under_test();

        let model = model.borrow();
        assert_eq!(model.enables() & 0b001, 0b001);
        assert_eq!(model.lcr() & 0b1000_0001, 0b0000_0001);
        assert_eq!(model.cntl() & 0b11, 0b10);
        assert_eq!(model.baud(), 270);
    }

    #[test]
    fn print_emits_the_exact_bytes() {
        let (model, console) = console_under_test();

        console.print(b"OK");

        assert_eq!(model.borrow().tx_log(), &[0x4F, 0x4B]);
        assert_eq!(console.chars_written(), 2);
        assert_eq!(console.chars_lost(), 0);
    }

    #[test]
    fn write_char_handles_multi_byte_scalars() {
        let (model, console) = console_under_test();

        console.write_char('A');
        console.write_char('ä');

        assert_eq!(model.borrow().tx_log(), &[0x41, 0xC3, 0xA4]);
        assert_eq!(console.chars_written(), 3);
    }

    #[test]
    fn formatted_writes_go_through_the_uart() {
        let (model, console) = console_under_test();

        console.write_fmt(format_args!("{} v{}", "tern", 1)).unwrap();

        assert_eq!(model.borrow().tx_log(), b"tern v1");
    }

    #[test]
    fn overflow_is_counted_not_blocking() {
        let (model, console) = console_under_test();
        model.borrow_mut().fill_transmit_fifo();

        console.print(b"dropped");

        assert_eq!(console.chars_written(), 0);
        assert_eq!(console.chars_lost(), 7);
        assert!(model.borrow().tx_log().is_empty());
    }
}
