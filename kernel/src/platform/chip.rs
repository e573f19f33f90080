// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interfaces for individual MCUs.

/// Generic operations that clock-like things are expected to support.
///
/// Chip crates implement this for the clock gate of each peripheral so that
/// the peripheral can be powered up before a board touches its registers.
pub trait ClockInterface {
    fn is_enabled(&self) -> bool;
    fn enable(&self);
    fn disable(&self);
}
