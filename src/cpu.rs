// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! Processor code.

#[cfg(target_arch = "aarch64")]
#[path = "_arch/aarch64/cpu.rs"]
mod arch_cpu;

mod boot;

//--------------------------------------------------------------------------------------------------
// Architectural Public Reexports
//--------------------------------------------------------------------------------------------------
#[cfg(target_arch = "aarch64")]
pub use arch_cpu::{nop, wait_forever};

//--------------------------------------------------------------------------------------------------
// Host fallbacks
//--------------------------------------------------------------------------------------------------

/// Emit one no-op instruction.
#[cfg(not(target_arch = "aarch64"))]
#[inline(always)]
pub fn nop() {}

/// Pause execution on the core.
#[cfg(not(target_arch = "aarch64"))]
pub fn wait_forever() -> ! {
    loop {
        core::hint::spin_loop()
    }
}
