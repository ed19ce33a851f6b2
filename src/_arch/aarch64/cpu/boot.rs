// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! Architectural boot code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::boot::arch_boot

use core::arch::global_asm;

// Assembly counterpart to this file.
global_asm!(include_str!("boot.s"));

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The Rust entry of the `kernel` binary.
///
/// The function is called from the assembly `_start` function.
///
/// # Safety
///
/// - The `bss` section is not initialized yet. The assembly code takes care of zeroing it before
///   branching here.
#[no_mangle]
pub unsafe extern "C" fn _start_rust() -> ! {
    crate::kernel_init()
}
