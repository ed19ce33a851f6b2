// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! The `tern` library.
//!
//! `tern` is the hardware-facing bottom layer of a bare-metal kernel for the Raspberry Pi 3: a
//! bit-exact model of the BCM2837 auxiliary peripheral registers and a send-only mini UART
//! console built on top of it. Process scheduling, memory management and interrupt handling do
//! not exist yet; what is here is the part of the kernel with a concrete, testable contract.
//!
//! # Code organization and architecture
//!
//! The code is divided into different *modules*, each representing a typical **subsystem** of the
//! kernel. Top-level module files of subsystems reside directly in the `src` folder. For example,
//! `src/console.rs` contains code that is concerned with all things console.
//!
//! ## Visibility of processor architecture code
//!
//! Code that is specific to the target processor architecture lives in a subfolder of
//! `src/_arch`, for example, `src/_arch/aarch64`. The architecture folders mirror the subsystem
//! modules laid out in `src`, and are loaded as modules using the `path attribute`:
//!
//! ```text
//! #[cfg(target_arch = "aarch64")]
//! #[path = "_arch/aarch64/cpu.rs"]
//! mod arch_cpu;
//! ```
//!
//! Items from the `arch_` module are publicly reexported by the parent module, so callers must
//! not be concerned which architecture has been conditionally compiled. On the host (unit test
//! builds), small fallbacks take the place of the architectural code.
//!
//! ## BSP code
//!
//! `BSP` stands for Board Support Package. `BSP` code is organized under `src/bsp.rs` and
//! contains target board specific definitions and functions: the board's memory map and the
//! instances of the drivers for the devices featured on the board.
//!
//! # Boot flow
//!
//! 1. The kernel's entry point is the function `cpu::boot::arch_boot::_start()`.
//!     - It is implemented in `src/_arch/aarch64/cpu/boot.s`: every core installs its private
//!       stack slot, the boot core zeroes `.bss` and continues into Rust, all other cores are
//!       parked.
//! 2. The Rust side transfers to [`kernel_init()`], which brings up the driver subsystem and
//!    with it the console.

#![allow(clippy::upper_case_acronyms)]
#![cfg_attr(not(test), no_std)]

#[cfg(not(test))]
mod panic_wait;
mod synchronization;

pub mod bsp;
pub mod console;
pub mod cpu;
pub mod driver;
pub mod print;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Version string.
pub fn version() -> &'static str {
    concat!(
        env!("CARGO_PKG_NAME"),
        " version ",
        env!("CARGO_PKG_VERSION")
    )
}

/// Early init code.
///
/// Called from the boot trampoline with a valid stack and zeroed `.bss`.
///
/// # Safety
///
/// - Only a single core must be active and running this function.
#[no_mangle]
pub unsafe fn kernel_init() -> ! {
    if let Err(x) = bsp::driver::init() {
        panic!("Error initializing BSP driver subsystem: {}", x);
    }

    driver::driver_manager().init_drivers();
    // println! is usable from here on.

    // Transition from unsafe to safe.
    kernel_main()
}

/// The main function running after the early init.
fn kernel_main() -> ! {
    use console::interface::Statistics;

    println!("[0] {} booting on: {}", version(), bsp::board_name());

    println!("[1] Drivers loaded:");
    driver::driver_manager().enumerate();

    println!("[2] Chars written: {}", console::console().chars_written());
    println!("[3] Echoing input is not supported; parking core");

    cpu::wait_forever()
}
