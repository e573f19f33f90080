// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Build-time board configuration.
//!
//! The cargo features of this crate are read here and nowhere else. The rest
//! of the board consumes the resolved [`CONFIG`] value.

/// Which logical serial names the hardware USARTs are bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerialArrangement {
    /// A USB-serial port owns `Serial`; USART1..3 are `Serial1`..`Serial3`.
    UsbSerial,
    /// USART1..3 are `Serial`, `Serial1` and `Serial2`.
    HardwareSerial,
}

/// Data type to store board configuration values.
#[derive(Clone, Copy)]
pub struct Config {
    /// Whether `board_init()` detaches serial-wire and JTAG debug from their
    /// pins so they can be used as GPIO.
    ///
    /// Cleared by the `no_disable_debug` feature.
    pub disable_debug_ports: bool,

    /// Serial-port naming. `UsbSerial` with the `serial_usb` feature,
    /// otherwise `HardwareSerial`.
    pub serial_arrangement: SerialArrangement,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined.
pub const CONFIG: Config = Config {
    disable_debug_ports: !cfg!(feature = "no_disable_debug"),
    serial_arrangement: if cfg!(feature = "serial_usb") {
        SerialArrangement::UsbSerial
    } else {
        SerialArrangement::HardwareSerial
    },
};
