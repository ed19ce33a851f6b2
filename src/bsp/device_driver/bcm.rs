// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! BCM driver top level.

mod bcm2xxx_aux;
mod bcm2xxx_mini_uart;

#[cfg(test)]
pub(crate) mod mock;

pub use bcm2xxx_aux::*;
pub use bcm2xxx_mini_uart::*;
