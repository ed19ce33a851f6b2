// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2026 The tern developers

//! Device driver.

mod bcm;
pub mod common;

pub use bcm::*;

#[cfg(test)]
pub(crate) use bcm::mock;
