// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Board file for the SushiBits One.
//!
//! A Maple Mini style board built around an STM32F103C8 (or CB) with 33
//! usable pins, USB on PA11/PA12 and serial-wire/JTAG debug on PA13, PA14,
//! PA15, PB3 and PB4.
//!
//! Startup order:
//!
//! 1. Create the [`Stm32f1xxDefaultPeripherals`] for the chip.
//! 2. Wrap them in a [`SushiBitsOne`] and call [`SushiBitsOne::init`], which
//!    powers the AFIO and GPIO ports, releases the debug pins (unless the
//!    `no_disable_debug` feature is set).
//!
//! After that the pin map is read through the [`PinMap`] implementation and
//! serial ports are looked up by name with [`SushiBitsOne::serial`].

#![no_std]

use kernel::debug;
use kernel::hil::debug_port::{DebugPort, DebugPortConfig};
use kernel::hil::pinmap::{PinIndex, PinMap};
use stm32f1xx::chip::{ResolvedPin, Stm32f1xxDefaultPeripherals};
use stm32f1xx::pinmap::PinInfo;
use stm32f1xx::usart::Usart;

use crate::config::Config;

pub mod config;
pub mod pinmap;
pub mod serial;

pub use crate::config::CONFIG;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;

/// Release the serial-wire and JTAG pins for use as GPIO.
///
/// Runs once during startup, before anything else configures the pins.
/// Does nothing when the board is built with `no_disable_debug` or when
/// debug is already disabled.
pub fn board_init(debug_port: &dyn DebugPort) {
    init_debug_ports(debug_port, &CONFIG);
}

fn init_debug_ports(debug_port: &dyn DebugPort, config: &Config) {
    if !config.disable_debug_ports {
        debug!("Debug ports left enabled");
        return;
    }
    if debug_port.debug_config() == DebugPortConfig::Disabled {
        return;
    }
    match debug_port.set_debug_config(DebugPortConfig::Disabled) {
        Ok(()) => debug!("SWJ debug disabled, PA13-PA15 PB3 PB4 available as GPIO"),
        Err(e) => debug!("Could not disable SWJ debug: {:?}", e),
    }
}

/// The SushiBits One board.
pub struct SushiBitsOne<'a> {
    peripherals: &'a Stm32f1xxDefaultPeripherals<'a>,
}

impl<'a> SushiBitsOne<'a> {
    pub fn new(peripherals: &'a Stm32f1xxDefaultPeripherals<'a>) -> Self {
        Self { peripherals }
    }

    /// Board startup. See the crate documentation.
    pub fn init(&self) {
        self.peripherals.init();
        board_init(&self.peripherals.afio);
    }

    pub fn peripherals(&self) -> &'a Stm32f1xxDefaultPeripherals<'a> {
        self.peripherals
    }

    /// Logical pin `pin` with its peripheral handles.
    pub fn pin(&self, pin: PinIndex) -> Option<ResolvedPin<'a, 'a>> {
        let peripherals = self.peripherals;
        pinmap::pin_info(pin).map(|info| peripherals.resolve(info))
    }

    /// The USART behind serial port `name`, e.g. `"Serial1"`.
    pub fn serial(&self, name: &str) -> Option<&'a Usart<'a>> {
        let peripherals = self.peripherals;
        serial::serial_port(name).map(|usart| peripherals.get_usart(usart))
    }
}

impl PinMap for SushiBitsOne<'_> {
    type Info = PinInfo;

    fn pin_count(&self) -> usize {
        pinmap::pin_count()
    }

    fn pin_info(&self, pin: PinIndex) -> Option<&PinInfo> {
        pinmap::pin_info(pin)
    }

    fn pwm_pins(&self) -> &[PinIndex] {
        &pinmap::PWM_PINS
    }

    fn adc_pins(&self) -> &[PinIndex] {
        &pinmap::ADC_PINS
    }

    fn used_pins(&self) -> &[PinIndex] {
        &pinmap::USED_PINS
    }
}
