// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! GPIO port handles.
//!
//! The STM32F103 in the 48-pin package bonds out ports A, B and C (and the
//! oscillator pins of D). Ports D and E are still present in the register map
//! and have clock gates of their own.

use kernel::platform::chip::ClockInterface;

use crate::rcc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PortId {
    A = 0b000,
    B = 0b001,
    C = 0b010,
    D = 0b011,
    E = 0b100,
}

impl PortId {
    pub const ALL: [PortId; 5] = [PortId::A, PortId::B, PortId::C, PortId::D, PortId::E];

    pub const fn base_address(self) -> usize {
        match self {
            PortId::A => 0x4001_0800,
            PortId::B => 0x4001_0C00,
            PortId::C => 0x4001_1000,
            PortId::D => 0x4001_1400,
            PortId::E => 0x4001_1800,
        }
    }

    const fn clock(self) -> rcc::PCLK2 {
        match self {
            PortId::A => rcc::PCLK2::GPIOA,
            PortId::B => rcc::PCLK2::GPIOB,
            PortId::C => rcc::PCLK2::GPIOC,
            PortId::D => rcc::PCLK2::GPIOD,
            PortId::E => rcc::PCLK2::GPIOE,
        }
    }
}

pub struct GpioPort<'a> {
    port: PortId,
    clock: PortClock<'a>,
}

impl<'a> GpioPort<'a> {
    pub const fn new(port: PortId, rcc: &'a rcc::Rcc) -> Self {
        Self {
            port,
            clock: PortClock(rcc::PeripheralClock::new(
                rcc::PeripheralClockType::APB2(port.clock()),
                rcc,
            )),
        }
    }

    pub fn id(&self) -> PortId {
        self.port
    }

    pub fn base_address(&self) -> usize {
        self.port.base_address()
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

struct PortClock<'a>(rcc::PeripheralClock<'a>);

impl ClockInterface for PortClock<'_> {
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

/// The five GPIO ports, indexed by [`PortId`].
pub struct GpioPorts<'a> {
    ports: [GpioPort<'a>; 5],
}

impl<'a> GpioPorts<'a> {
    pub const fn new(rcc: &'a rcc::Rcc) -> Self {
        Self {
            ports: [
                GpioPort::new(PortId::A, rcc),
                GpioPort::new(PortId::B, rcc),
                GpioPort::new(PortId::C, rcc),
                GpioPort::new(PortId::D, rcc),
                GpioPort::new(PortId::E, rcc),
            ],
        }
    }

    pub fn get_port(&self, port: PortId) -> &GpioPort<'a> {
        &self.ports[port as usize]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, GpioPort<'a>> {
        self.ports.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_registers;

    #[test]
    fn ports_are_indexed_by_id() {
        let rcc = rcc::Rcc::with_registers(test_registers::zeroed::<rcc::RccRegisters>());
        let ports = GpioPorts::new(&rcc);
        for id in PortId::ALL {
            assert_eq!(ports.get_port(id).id(), id);
        }
        assert_eq!(ports.get_port(PortId::B).base_address(), 0x4001_0C00);
        assert_eq!(ports.iter().count(), 5);
    }

    #[test]
    fn port_clock_gates() {
        let rcc = rcc::Rcc::with_registers(test_registers::zeroed::<rcc::RccRegisters>());
        let ports = GpioPorts::new(&rcc);
        let port_b = ports.get_port(PortId::B);
        assert!(!port_b.is_enabled_clock());
        port_b.enable_clock();
        assert!(port_b.is_enabled_clock());
        assert!(!ports.get_port(PortId::A).is_enabled_clock());
        port_b.disable_clock();
        assert!(!port_b.is_enabled_clock());
    }
}
