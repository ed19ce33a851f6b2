// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! BSP Memory Management.
//!
//! The physical memory layout.
//!
//! The Raspberry's firmware copies the kernel binary to 0x8_0000. The linker script reserves one
//! statically allocated stack slot per core behind `.bss`; the boot trampoline selects the slot
//! by core id before any Rust code runs.
//!
//! ```text
//! +---------------------------------------+
//! |                                       | code_start @ 0x8_0000
//! | .text                                 |
//! | .rodata                               |
//! +---------------------------------------+
//! | .data                                 |
//! | .bss                                  |
//! +---------------------------------------+
//! |                                       | __boot_core_stacks_start
//! | Per-core boot stacks                  |      slot i ends at
//! | (NUM_CORES slots, CORE_STACK_SIZE     |      start + (i + 1) * CORE_STACK_SIZE,
//! |  bytes each, growth downwards)        |      stack growth downwards
//! |                                       | __boot_core_stacks_end_exclusive
//! +---------------------------------------+
//! ```

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The board's physical memory map.
#[rustfmt::skip]
pub(super) mod map {
    /// Offset of the auxiliary peripherals block (shared enable/IRQ registers).
    pub const AUX_OFFSET:       usize = 0x0021_5000;

    /// Offset of the mini UART register block within the auxiliary block.
    pub const MINI_UART_OFFSET: usize = 0x0021_5040;

    /// Physical devices.
    pub mod mmio {
        use super::*;

        pub const START:           usize =         0x3F00_0000;
        pub const AUX_START:       usize = START + AUX_OFFSET;
        pub const MINI_UART_START: usize = START + MINI_UART_OFFSET;
    }
}

/// Number of cores the boot trampoline reserves a stack slot for.
pub const NUM_CORES: usize = 4;

/// Size of one boot stack slot in bytes.
///
/// Keep in sync with the constants in `boot.s` and the linker script.
pub const CORE_STACK_SIZE: usize = 0x1_0000;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Accessors for the stack region the linker script reserves.
///
/// Only meaningful in a binary linked with `kernel.ld`; hence not compiled for the host.
#[cfg(target_arch = "aarch64")]
mod linker_symbols {
    use core::cell::UnsafeCell;

    // Symbols from the linker script.
    extern "Rust" {
        static __boot_core_stacks_start: UnsafeCell<()>;
        static __boot_core_stacks_end_exclusive: UnsafeCell<()>;
    }

    /// Start address of the per-core boot stack region.
    #[inline(always)]
    pub fn boot_core_stacks_start() -> usize {
        unsafe { __boot_core_stacks_start.get() as usize }
    }

    /// Exclusive end address of the per-core boot stack region.
    #[inline(always)]
    pub fn boot_core_stacks_end_exclusive() -> usize {
        unsafe { __boot_core_stacks_end_exclusive.get() as usize }
    }
}

#[cfg(target_arch = "aarch64")]
pub use linker_symbols::{boot_core_stacks_end_exclusive, boot_core_stacks_start};

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------
