// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Pin descriptors for STM32F1 board pin tables.
//!
//! A [`PinInfo`] names the GPIO port and bit behind a board pin and, when the
//! pin has them, the timer channel and ADC input wired to it. Descriptors are
//! built in `const` context so a board's table lives in flash:
//!
//! ```rust,ignore
//! const PB0: PinInfo = PinInfo::gpio(PortId::B, 0)
//!     .with_timer(TimerId::Tim3, tim::Channel::Channel3)
//!     .with_adc(AdcId::Adc1, adc::Channel::Channel8);
//! ```

use kernel::hil::pinmap::PinCapabilities;

use crate::adc::{self, AdcId, AdcInput};
use crate::gpio::PortId;
use crate::tim::{self, TimerChannel, TimerId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinInfo {
    pub port: PortId,
    pub timer: Option<TimerChannel>,
    pub adc: Option<AdcInput>,
    pub gpio_bit: u8,
}

impl PinInfo {
    /// A plain GPIO pin.
    pub const fn gpio(port: PortId, bit: u8) -> Self {
        assert!(bit < 16, "GPIO bit out of range");
        Self {
            port,
            timer: None,
            adc: None,
            gpio_bit: bit,
        }
    }

    pub const fn with_timer(self, timer: TimerId, channel: tim::Channel) -> Self {
        Self {
            timer: Some(TimerChannel::new(timer, channel)),
            ..self
        }
    }

    pub const fn with_adc(self, adc: AdcId, channel: adc::Channel) -> Self {
        assert!(channel.is_external(), "internal ADC channel on a pin");
        Self {
            adc: Some(AdcInput::new(adc, channel)),
            ..self
        }
    }

    /// Whether this descriptor is port `port`, bit `bit`.
    pub fn is(&self, port: PortId, bit: u8) -> bool {
        self.port == port && self.gpio_bit == bit
    }
}

impl PinCapabilities for PinInfo {
    fn gpio_bit(&self) -> u8 {
        self.gpio_bit
    }

    fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    fn has_adc(&self) -> bool {
        self.adc.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PA1: PinInfo = PinInfo::gpio(PortId::A, 1)
        .with_timer(TimerId::Tim2, tim::Channel::Channel2)
        .with_adc(AdcId::Adc1, adc::Channel::Channel1);

    #[test]
    fn builder_fills_capabilities() {
        assert_eq!(PA1.gpio_bit(), 1);
        assert!(PA1.has_timer());
        assert!(PA1.has_adc());
        assert_eq!(
            PA1.timer,
            Some(TimerChannel::new(TimerId::Tim2, tim::Channel::Channel2))
        );
        assert!(PA1.is(PortId::A, 1));
        assert!(!PA1.is(PortId::B, 1));

        let plain = PinInfo::gpio(PortId::C, 13);
        assert!(!plain.has_timer());
        assert!(!plain.has_adc());
    }

    #[test]
    #[should_panic]
    fn bit_past_port_width() {
        let _ = PinInfo::gpio(PortId::A, std::hint::black_box(16));
    }
}
