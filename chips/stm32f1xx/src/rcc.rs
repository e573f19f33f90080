// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset and clock control: peripheral clock gates.
//!
//! Only the APB enable registers are modelled. System clock selection is left
//! at its reset state (HSI) by this crate.

use kernel::platform::chip::ClockInterface;
use kernel::utilities::registers::interfaces::{ReadWriteable, Readable};
use kernel::utilities::registers::{register_bitfields, register_structs, Field, ReadWrite};
use kernel::utilities::StaticRef;

register_structs! {
    /// Reset and clock control
    pub RccRegisters {
        (0x000 => _reserved0),
        /// APB2 peripheral clock enable register
        (0x018 => apb2enr: ReadWrite<u32, APB2ENR::Register>),
        /// APB1 peripheral clock enable register
        (0x01C => apb1enr: ReadWrite<u32, APB1ENR::Register>),
        (0x020 => @END),
    }
}

register_bitfields![u32,
    APB2ENR [
        /// USART1 clock enable
        USART1EN OFFSET(14) NUMBITS(1) [],
        /// TIM1 timer clock enable
        TIM1EN OFFSET(11) NUMBITS(1) [],
        /// ADC2 interface clock enable
        ADC2EN OFFSET(10) NUMBITS(1) [],
        /// ADC1 interface clock enable
        ADC1EN OFFSET(9) NUMBITS(1) [],
        /// I/O port E clock enable
        IOPEEN OFFSET(6) NUMBITS(1) [],
        /// I/O port D clock enable
        IOPDEN OFFSET(5) NUMBITS(1) [],
        /// I/O port C clock enable
        IOPCEN OFFSET(4) NUMBITS(1) [],
        /// I/O port B clock enable
        IOPBEN OFFSET(3) NUMBITS(1) [],
        /// I/O port A clock enable
        IOPAEN OFFSET(2) NUMBITS(1) [],
        /// Alternate function I/O clock enable
        AFIOEN OFFSET(0) NUMBITS(1) []
    ],
    APB1ENR [
        /// USART3 clock enable
        USART3EN OFFSET(18) NUMBITS(1) [],
        /// USART2 clock enable
        USART2EN OFFSET(17) NUMBITS(1) [],
        /// TIM4 clock enable
        TIM4EN OFFSET(2) NUMBITS(1) [],
        /// TIM3 clock enable
        TIM3EN OFFSET(1) NUMBITS(1) [],
        /// TIM2 clock enable
        TIM2EN OFFSET(0) NUMBITS(1) []
    ]
];

const RCC_BASE: StaticRef<RccRegisters> =
    unsafe { StaticRef::new(0x4002_1000 as *const RccRegisters) };

pub struct Rcc {
    registers: StaticRef<RccRegisters>,
}

impl Rcc {
    pub const fn new() -> Rcc {
        Rcc::with_registers(RCC_BASE)
    }

    /// An `Rcc` driving the register block at `registers`.
    pub const fn with_registers(registers: StaticRef<RccRegisters>) -> Rcc {
        Rcc { registers }
    }

    fn apb2_field(clock: &PCLK2) -> Field<u32, APB2ENR::Register> {
        match clock {
            PCLK2::AFIO => APB2ENR::AFIOEN,
            PCLK2::GPIOA => APB2ENR::IOPAEN,
            PCLK2::GPIOB => APB2ENR::IOPBEN,
            PCLK2::GPIOC => APB2ENR::IOPCEN,
            PCLK2::GPIOD => APB2ENR::IOPDEN,
            PCLK2::GPIOE => APB2ENR::IOPEEN,
            PCLK2::ADC1 => APB2ENR::ADC1EN,
            PCLK2::ADC2 => APB2ENR::ADC2EN,
            PCLK2::TIM1 => APB2ENR::TIM1EN,
            PCLK2::USART1 => APB2ENR::USART1EN,
        }
    }

    fn apb1_field(clock: &PCLK1) -> Field<u32, APB1ENR::Register> {
        match clock {
            PCLK1::TIM2 => APB1ENR::TIM2EN,
            PCLK1::TIM3 => APB1ENR::TIM3EN,
            PCLK1::TIM4 => APB1ENR::TIM4EN,
            PCLK1::USART2 => APB1ENR::USART2EN,
            PCLK1::USART3 => APB1ENR::USART3EN,
        }
    }

    fn is_enabled_apb2_clock(&self, clock: &PCLK2) -> bool {
        self.registers.apb2enr.is_set(Self::apb2_field(clock))
    }

    fn enable_apb2_clock(&self, clock: &PCLK2) {
        self.registers.apb2enr.modify(Self::apb2_field(clock).val(1))
    }

    fn disable_apb2_clock(&self, clock: &PCLK2) {
        self.registers.apb2enr.modify(Self::apb2_field(clock).val(0))
    }

    fn is_enabled_apb1_clock(&self, clock: &PCLK1) -> bool {
        self.registers.apb1enr.is_set(Self::apb1_field(clock))
    }

    fn enable_apb1_clock(&self, clock: &PCLK1) {
        self.registers.apb1enr.modify(Self::apb1_field(clock).val(1))
    }

    fn disable_apb1_clock(&self, clock: &PCLK1) {
        self.registers.apb1enr.modify(Self::apb1_field(clock).val(0))
    }
}

pub struct PeripheralClock<'a> {
    pub clock: PeripheralClockType,
    rcc: &'a Rcc,
}

/// Bus + Clock name for the peripherals
pub enum PeripheralClockType {
    APB1(PCLK1),
    APB2(PCLK2),
}

/// Peripherals clocked by PCLK1
pub enum PCLK1 {
    TIM2,
    TIM3,
    TIM4,
    USART2,
    USART3,
}

/// Peripherals clocked by PCLK2
pub enum PCLK2 {
    AFIO,
    GPIOA,
    GPIOB,
    GPIOC,
    GPIOD,
    GPIOE,
    ADC1,
    ADC2,
    TIM1,
    USART1,
}

impl<'a> PeripheralClock<'a> {
    pub const fn new(clock: PeripheralClockType, rcc: &'a Rcc) -> Self {
        Self { clock, rcc }
    }
}

impl ClockInterface for PeripheralClock<'_> {
    fn is_enabled(&self) -> bool {
        match self.clock {
            PeripheralClockType::APB1(ref v) => self.rcc.is_enabled_apb1_clock(v),
            PeripheralClockType::APB2(ref v) => self.rcc.is_enabled_apb2_clock(v),
        }
    }

    fn enable(&self) {
        match self.clock {
            PeripheralClockType::APB1(ref v) => self.rcc.enable_apb1_clock(v),
            PeripheralClockType::APB2(ref v) => self.rcc.enable_apb2_clock(v),
        }
    }

    fn disable(&self) {
        match self.clock {
            PeripheralClockType::APB1(ref v) => self.rcc.disable_apb1_clock(v),
            PeripheralClockType::APB2(ref v) => self.rcc.disable_apb2_clock(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_registers;

    #[test]
    fn gates_land_on_their_bus_register() {
        let registers = test_registers::zeroed::<RccRegisters>();
        let rcc = Rcc::with_registers(registers);

        let afio = PeripheralClock::new(PeripheralClockType::APB2(PCLK2::AFIO), &rcc);
        let usart3 = PeripheralClock::new(PeripheralClockType::APB1(PCLK1::USART3), &rcc);
        assert!(!afio.is_enabled());
        assert!(!usart3.is_enabled());

        afio.enable();
        usart3.enable();
        assert!(afio.is_enabled());
        assert!(usart3.is_enabled());
        assert_eq!(registers.apb2enr.get(), 1 << 0);
        assert_eq!(registers.apb1enr.get(), 1 << 18);

        afio.disable();
        assert!(!afio.is_enabled());
        assert!(usart3.is_enabled());
    }

    #[test]
    fn port_gates_are_independent() {
        let registers = test_registers::zeroed::<RccRegisters>();
        let rcc = Rcc::with_registers(registers);

        PeripheralClock::new(PeripheralClockType::APB2(PCLK2::GPIOA), &rcc).enable();
        PeripheralClock::new(PeripheralClockType::APB2(PCLK2::GPIOC), &rcc).enable();
        assert_eq!(registers.apb2enr.get(), (1 << 2) | (1 << 4));
        assert!(!PeripheralClock::new(PeripheralClockType::APB2(PCLK2::GPIOB), &rcc).is_enabled());
    }
}
