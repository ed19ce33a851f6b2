// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! BSP driver support.

use super::{console::Console, memory::map::mmio};
use crate::{console, driver as generic_driver};
use core::sync::atomic::{AtomicBool, Ordering};

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

static CONSOLE: Console = unsafe { Console::new(mmio::AUX_START, mmio::MINI_UART_START) };

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// This must be called only after successful init of the console driver.
fn post_init_console() -> Result<(), &'static str> {
    console::register_console(&CONSOLE);

    Ok(())
}

fn driver_console() -> Result<(), &'static str> {
    let descriptor = generic_driver::DeviceDriverDescriptor::new(
        &CONSOLE,
        Some(post_init_console),
    );
    generic_driver::driver_manager().register_driver(descriptor);

    Ok(())
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Initialize the driver subsystem.
///
/// # Safety
///
/// See child function calls.
pub unsafe fn init() -> Result<(), &'static str> {
    static INIT_DONE: AtomicBool = AtomicBool::new(false);
    if INIT_DONE.load(Ordering::Relaxed) {
        return Err("Init already done");
    }

    driver_console()?;

    INIT_DONE.store(true, Ordering::Relaxed);
    Ok(())
}
