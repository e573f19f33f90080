// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Analog-to-digital converter handles.
//!
//! ADC1 and ADC2 share the same sixteen external inputs. Channels 16
//! (temperature sensor) and 17 (VREFINT) are internal to ADC1.

use kernel::platform::chip::ClockInterface;

use crate::rcc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdcId {
    Adc1 = 0,
    Adc2 = 1,
}

impl AdcId {
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn base_address(self) -> usize {
        match self {
            AdcId::Adc1 => 0x4001_2400,
            AdcId::Adc2 => 0x4001_2800,
        }
    }

    const fn clock(self) -> rcc::PCLK2 {
        match self {
            AdcId::Adc1 => rcc::PCLK2::ADC1,
            AdcId::Adc2 => rcc::PCLK2::ADC2,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    Channel0 = 0,
    Channel1 = 1,
    Channel2 = 2,
    Channel3 = 3,
    Channel4 = 4,
    Channel5 = 5,
    Channel6 = 6,
    Channel7 = 7,
    Channel8 = 8,
    Channel9 = 9,
    Channel10 = 10,
    Channel11 = 11,
    Channel12 = 12,
    Channel13 = 13,
    Channel14 = 14,
    Channel15 = 15,
    Channel16 = 16,
    Channel17 = 17,
}

impl Channel {
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Whether the channel is wired to a package pin.
    pub const fn is_external(self) -> bool {
        (self as u8) < 16
    }
}

/// An ADC together with one of its input channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AdcInput {
    pub adc: AdcId,
    pub channel: Channel,
}

impl AdcInput {
    pub const fn new(adc: AdcId, channel: Channel) -> Self {
        Self { adc, channel }
    }
}

pub struct Adc<'a> {
    id: AdcId,
    clock: AdcClock<'a>,
}

impl<'a> Adc<'a> {
    pub const fn new(id: AdcId, rcc: &'a rcc::Rcc) -> Self {
        Self {
            id,
            clock: AdcClock(rcc::PeripheralClock::new(
                rcc::PeripheralClockType::APB2(id.clock()),
                rcc,
            )),
        }
    }

    pub fn id(&self) -> AdcId {
        self.id
    }

    pub fn is_enabled_clock(&self) -> bool {
        self.clock.is_enabled()
    }

    pub fn enable_clock(&self) {
        self.clock.enable();
    }

    pub fn disable_clock(&self) {
        self.clock.disable();
    }
}

struct AdcClock<'a>(rcc::PeripheralClock<'a>);

impl ClockInterface for AdcClock<'_> {
    fn is_enabled(&self) -> bool {
        self.0.is_enabled()
    }

    fn enable(&self) {
        self.0.enable();
    }

    fn disable(&self) {
        self.0.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_channels() {
        assert!(Channel::Channel0.is_external());
        assert!(Channel::Channel15.is_external());
        assert!(!Channel::Channel16.is_external());
        assert_eq!(Channel::Channel17.number(), 17);
        assert_eq!(AdcId::Adc2.number(), 2);
    }
}
