// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Core board-support crate.
//!
//! The kernel crate holds the code that chip and board crates share: the
//! Hardware Interface Layer (HIL) definitions a board fulfils for the rest of
//! the firmware, the register interface used by chip drivers, the `debug!`
//! output path, and the standard `ErrorCode` type.
//!
//! Chip crates depend on this crate and implement the HIL traits for their
//! peripherals. Board crates depend on both and provide the static data
//! (pin maps, serial bindings) plus the startup hook.

#![no_std]
#![warn(unreachable_pub)]

pub mod debug;
pub mod errorcode;
pub mod hil;
pub mod platform;
pub mod utilities;

pub use crate::errorcode::ErrorCode;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
