// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! Conditional reexporting of Board Support Packages.

pub mod device_driver;

mod raspberrypi;
pub use raspberrypi::*;
