// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for the debug-access pin multiplexer.
//!
//! Many MCUs share a handful of pins between general-purpose I/O and the
//! debug-access port (JTAG and/or serial-wire debug). Out of reset the debug
//! function owns those pins. A board that wants them as GPIO asks the chip to
//! detach some or all of the debug signals during startup.

use crate::ErrorCode;

/// Which debug-access signals are routed to their pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugPortConfig {
    /// Full JTAG and serial-wire debug. This is the reset state.
    Full,
    /// Full JTAG and serial-wire debug, without the JTAG reset pin.
    FullNoNjtrst,
    /// Serial-wire debug only. The JTAG-only pins are free.
    SerialWireOnly,
    /// No debug access. Every debug pin is free.
    Disabled,
}

impl DebugPortConfig {
    pub fn jtag_enabled(self) -> bool {
        matches!(self, DebugPortConfig::Full | DebugPortConfig::FullNoNjtrst)
    }

    pub fn serial_wire_enabled(self) -> bool {
        self != DebugPortConfig::Disabled
    }
}

/// Control over debug-port pin multiplexing.
pub trait DebugPort {
    /// The configuration currently applied.
    fn debug_config(&self) -> DebugPortConfig;

    /// Apply `config`.
    ///
    /// Returns `ErrorCode::OFF` if the multiplexer cannot be written (for
    /// example its clock is gated). Applying the configuration already in
    /// place succeeds and changes nothing.
    fn set_debug_config(&self, config: DebugPortConfig) -> Result<(), ErrorCode>;
}

#[cfg(test)]
mod tests {
    use super::DebugPortConfig;

    #[test]
    fn signals_per_config() {
        assert!(DebugPortConfig::Full.jtag_enabled());
        assert!(DebugPortConfig::FullNoNjtrst.jtag_enabled());
        assert!(!DebugPortConfig::SerialWireOnly.jtag_enabled());
        assert!(DebugPortConfig::SerialWireOnly.serial_wire_enabled());
        assert!(!DebugPortConfig::Disabled.jtag_enabled());
        assert!(!DebugPortConfig::Disabled.serial_wire_enabled());
    }
}
