// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! USART handles.

use kernel::platform::chip::ClockInterface;

use crate::gpio::PortId;
use crate::rcc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UsartId {
    Usart1 = 0,
    Usart2 = 1,
    Usart3 = 2,
}

impl UsartId {
    pub const ALL: [UsartId; 3] = [UsartId::Usart1, UsartId::Usart2, UsartId::Usart3];

    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn base_address(self) -> usize {
        match self {
            UsartId::Usart1 => 0x4001_3800,
            UsartId::Usart2 => 0x4000_4400,
            UsartId::Usart3 => 0x4000_4800,
        }
    }

    /// TX pin with the default (unremapped) pin assignment.
    pub const fn tx_pin(self) -> (PortId, u8) {
        match self {
            UsartId::Usart1 => (PortId::A, 9),
            UsartId::Usart2 => (PortId::A, 2),
            UsartId::Usart3 => (PortId::B, 10),
        }
    }

    /// RX pin with the default (unremapped) pin assignment.
    pub const fn rx_pin(self) -> (PortId, u8) {
        match self {
            UsartId::Usart1 => (PortId::A, 10),
            UsartId::Usart2 => (PortId::A, 3),
            UsartId::Usart3 => (PortId::B, 11),
        }
    }

    const fn clock(self) -> rcc::PeripheralClockType {
        match self {
            UsartId::Usart1 => rcc::PeripheralClockType::APB2(rcc::PCLK2::USART1),
            UsartId::Usart2 => rcc::PeripheralClockType::APB1(rcc::PCLK1::USART2),
            UsartId::Usart3 => rcc::PeripheralClockType::APB1(rcc::PCLK1::USART3),
        }
    }
}

pub struct Usart<'a> {
    id: UsartId,
    clock: UsartClock<'a>,
}

impl<'a> Usart<'a> {
    pub const fn new(id: UsartId, rcc: &'a rcc::Rcc) -> Self {
        Self {
            id,
            clock: UsartClock(rcc::PeripheralClock::new(id.clock(), rcc)),
        }
    }

    pub fn id(&self) -> UsartId {
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

struct UsartClock<'a>(rcc::PeripheralClock<'a>);

impl ClockInterface for UsartClock<'_> {
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
