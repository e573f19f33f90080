// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! General-purpose and advanced-control timer handles.
//!
//! TIM1 is the advanced-control timer on APB2. TIM2, TIM3 and TIM4 are the
//! general-purpose timers on APB1. Each has four capture/compare channels.

use kernel::platform::chip::ClockInterface;

use crate::rcc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerId {
    Tim1 = 0,
    Tim2 = 1,
    Tim3 = 2,
    Tim4 = 3,
}

impl TimerId {
    pub const ALL: [TimerId; 4] = [TimerId::Tim1, TimerId::Tim2, TimerId::Tim3, TimerId::Tim4];

    /// Timer number as used in the reference manual (TIM*n*).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn base_address(self) -> usize {
        match self {
            TimerId::Tim1 => 0x4001_2C00,
            TimerId::Tim2 => 0x4000_0000,
            TimerId::Tim3 => 0x4000_0400,
            TimerId::Tim4 => 0x4000_0800,
        }
    }

    const fn clock(self) -> rcc::PeripheralClockType {
        match self {
            TimerId::Tim1 => rcc::PeripheralClockType::APB2(rcc::PCLK2::TIM1),
            TimerId::Tim2 => rcc::PeripheralClockType::APB1(rcc::PCLK1::TIM2),
            TimerId::Tim3 => rcc::PeripheralClockType::APB1(rcc::PCLK1::TIM3),
            TimerId::Tim4 => rcc::PeripheralClockType::APB1(rcc::PCLK1::TIM4),
        }
    }
}

/// Capture/compare channel of a timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    Channel1 = 1,
    Channel2 = 2,
    Channel3 = 3,
    Channel4 = 4,
}

impl Channel {
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// A timer together with one of its channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimerChannel {
    pub timer: TimerId,
    pub channel: Channel,
}

impl TimerChannel {
    pub const fn new(timer: TimerId, channel: Channel) -> Self {
        Self { timer, channel }
    }
}

pub struct Timer<'a> {
    id: TimerId,
    clock: TimerClock<'a>,
}

impl<'a> Timer<'a> {
    pub const fn new(id: TimerId, rcc: &'a rcc::Rcc) -> Self {
        Self {
            id,
            clock: TimerClock(rcc::PeripheralClock::new(id.clock(), rcc)),
        }
    }

    pub fn id(&self) -> TimerId {
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

struct TimerClock<'a>(rcc::PeripheralClock<'a>);

impl ClockInterface for TimerClock<'_> {
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
    use crate::test_registers;

    #[test]
    fn numbering() {
        assert_eq!(TimerId::Tim1.number(), 1);
        assert_eq!(TimerId::Tim4.number(), 4);
        assert_eq!(Channel::Channel3.number(), 3);
    }

    #[test]
    fn tim1_is_on_apb2() {
        let registers = test_registers::zeroed::<rcc::RccRegisters>();
        let rcc = rcc::Rcc::with_registers(registers);
        let tim1 = Timer::new(TimerId::Tim1, &rcc);
        let tim3 = Timer::new(TimerId::Tim3, &rcc);

        tim1.enable_clock();
        assert!(tim1.is_enabled_clock());
        assert!(!tim3.is_enabled_clock());
        tim3.enable_clock();
        assert!(tim3.is_enabled_clock());
    }
}
