// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! BCM2837 auxiliary peripherals block.
//!
//! The aux block bundles the mini UART and the two auxiliary SPI masters behind two shared
//! registers: a read-only interrupt summary and a read-write enable mask. A peripheral whose
//! enable bit is clear does not respond to register accesses, so enabling it here must happen
//! before its own driver touches anything.

use crate::bsp::device_driver::common::Reg32;
use tock_registers::{
    fields::FieldValue,
    interfaces::{ReadWriteable, Readable},
    register_bitfields,
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

register_bitfields! {
    u32,

    /// Auxiliary Interrupt status.
    ///
    /// Read-only summary; one bit per peripheral, set while that peripheral has an interrupt
    /// pending.
    AUX_IRQ [
        MINI_UART_IRQ OFFSET(0) NUMBITS(1) [],
        SPI_1_IRQ OFFSET(1) NUMBITS(1) [],
        SPI_2_IRQ OFFSET(2) NUMBITS(1) []
    ],

    /// Auxiliary enables.
    ///
    /// One bit per peripheral. Clearing a bit kills the peripheral immediately and loses its
    /// register state.
    AUX_ENABLES [
        MINI_UART_ENABLE OFFSET(0) NUMBITS(1) [],
        SPI_1_ENABLE OFFSET(1) NUMBITS(1) [],
        SPI_2_ENABLE OFFSET(2) NUMBITS(1) []
    ]
}

/// The aux block's two shared registers.
struct RegisterBlock {
    aux_irq: Reg32<AUX_IRQ::Register>,
    aux_enables: Reg32<AUX_ENABLES::Register>,
}

impl RegisterBlock {
    /// # Safety
    ///
    /// - The user must ensure to provide the correct aux block start address.
    const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            aux_irq: Reg32::new(mmio_start_addr),
            aux_enables: Reg32::new(mmio_start_addr + 0x04),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The peripherals living behind the aux block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AuxPeripheral {
    MiniUart,
    Spi1,
    Spi2,
}

/// A set of aux peripherals, for batched enable/disable calls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuxSelection {
    pub mini_uart: bool,
    pub spi_1: bool,
    pub spi_2: bool,
}

/// Representation of the auxiliary peripherals block.
pub struct Aux {
    registers: RegisterBlock,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl AuxSelection {
    /// Select only the mini UART.
    pub const fn mini_uart() -> Self {
        Self {
            mini_uart: true,
            spi_1: false,
            spi_2: false,
        }
    }

    /// The field value covering exactly the selected peripherals' enable bits.
    ///
    /// The mask stays confined to the selection, so a read-modify-write with it leaves the
    /// unselected peripherals' bits as they are.
    fn field_value(self, enabled: bool) -> FieldValue<u32, AUX_ENABLES::Register> {
        let bit = u32::from(enabled);
        let mut fv = FieldValue::<u32, AUX_ENABLES::Register>::new(0, 0, 0);

        if self.mini_uart {
            fv = fv + AUX_ENABLES::MINI_UART_ENABLE.val(bit);
        }
        if self.spi_1 {
            fv = fv + AUX_ENABLES::SPI_1_ENABLE.val(bit);
        }
        if self.spi_2 {
            fv = fv + AUX_ENABLES::SPI_2_ENABLE.val(bit);
        }

        fv
    }
}

impl Aux {
    pub const COMPATIBLE: &'static str = "BCM2837 Aux";

    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide the correct aux block start address.
    pub const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            registers: RegisterBlock::new(mmio_start_addr),
        }
    }

    /// Enable the selected peripherals. Already-enabled ones stay enabled.
    pub fn enable(&self, selection: AuxSelection) {
        self.registers
            .aux_enables
            .modify(selection.field_value(true));
    }

    /// Disable the selected peripherals, dropping their register state.
    pub fn disable(&self, selection: AuxSelection) {
        self.registers
            .aux_enables
            .modify(selection.field_value(false));
    }

    /// Is the peripheral's enable bit set?
    pub fn is_enabled(&self, peripheral: AuxPeripheral) -> bool {
        let field = match peripheral {
            AuxPeripheral::MiniUart => AUX_ENABLES::MINI_UART_ENABLE,
            AuxPeripheral::Spi1 => AUX_ENABLES::SPI_1_ENABLE,
            AuxPeripheral::Spi2 => AUX_ENABLES::SPI_2_ENABLE,
        };

        self.registers.aux_enables.is_set(field)
    }

    /// Does the peripheral currently report a pending interrupt?
    pub fn has_pending_interrupt(&self, peripheral: AuxPeripheral) -> bool {
        let field = match peripheral {
            AuxPeripheral::MiniUart => AUX_IRQ::MINI_UART_IRQ,
            AuxPeripheral::Spi1 => AUX_IRQ::SPI_1_IRQ,
            AuxPeripheral::Spi2 => AUX_IRQ::SPI_2_IRQ,
        };

        self.registers.aux_irq.is_set(field)
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp::device_driver::mock::MockAuxUart;

    const AUX_BASE: usize = 0x3F21_5000;

    #[test]
    fn enable_is_additive() {
        let model = MockAuxUart::install(AUX_BASE);
        let aux = unsafe { Aux::new(AUX_BASE) };

        aux.enable(AuxSelection::mini_uart());
        assert_eq!(model.borrow().enables(), 0b001);

        aux.enable(AuxSelection {
            spi_2: true,
            ..Default::default()
        });
        assert_eq!(model.borrow().enables(), 0b101);

        assert!(aux.is_enabled(AuxPeripheral::MiniUart));
        assert!(!aux.is_enabled(AuxPeripheral::Spi1));
        assert!(aux.is_enabled(AuxPeripheral::Spi2));
    }

    #[test]
    fn disable_leaves_others_untouched() {
        let model = MockAuxUart::install(AUX_BASE);
        let aux = unsafe { Aux::new(AUX_BASE) };

        aux.enable(AuxSelection {
            mini_uart: true,
            spi_1: true,
            spi_2: true,
        });
        assert_eq!(model.borrow().enables(), 0b111);

        aux.disable(AuxSelection {
            spi_1: true,
            ..Default::default()
        });
        assert_eq!(model.borrow().enables(), 0b101);
    }

    #[test]
    fn interrupt_summary_is_per_peripheral() {
        let model = MockAuxUart::install(AUX_BASE);
        let aux = unsafe { Aux::new(AUX_BASE) };

        assert!(!aux.has_pending_interrupt(AuxPeripheral::MiniUart));

        model.borrow_mut().set_pending_irqs(0b010);
        assert!(!aux.has_pending_interrupt(AuxPeripheral::MiniUart));
        assert!(aux.has_pending_interrupt(AuxPeripheral::Spi1));
        assert!(!aux.has_pending_interrupt(AuxPeripheral::Spi2));
    }

    #[test]
    fn selection_mask_covers_only_selected_bits() {
        let all = AuxSelection {
            mini_uart: true,
            spi_1: true,
            spi_2: true,
        };
        assert_eq!(all.field_value(true).mask(), 0b111);
        assert_eq!(AuxSelection::mini_uart().field_value(true).mask(), 0b001);
        assert_eq!(AuxSelection::default().field_value(true).mask(), 0);
    }
}
