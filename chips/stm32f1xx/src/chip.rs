// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Registry of the STM32F1xx peripheral handles a board refers to.

use kernel::utilities::StaticRef;

use crate::adc::{self, Adc, AdcId};
use crate::afio::{Afio, AfioRegisters};
use crate::gpio::{GpioPort, GpioPorts, PortId};
use crate::pinmap::PinInfo;
use crate::rcc::Rcc;
use crate::tim::{self, Timer, TimerId};
use crate::usart::{Usart, UsartId};

pub struct Stm32f1xxDefaultPeripherals<'a> {
    pub afio: Afio<'a>,
    pub gpio_ports: GpioPorts<'a>,
    pub timers: [Timer<'a>; 4],
    pub adc1: Adc<'a>,
    pub adc2: Adc<'a>,
    pub usart1: Usart<'a>,
    pub usart2: Usart<'a>,
    pub usart3: Usart<'a>,
}

impl<'a> Stm32f1xxDefaultPeripherals<'a> {
    pub fn new(rcc: &'a Rcc) -> Self {
        Self::with_afio(Afio::new(rcc), rcc)
    }

    /// Peripherals whose AFIO block lives at `afio`.
    pub fn with_afio_registers(afio: StaticRef<AfioRegisters>, rcc: &'a Rcc) -> Self {
        Self::with_afio(Afio::with_registers(afio, rcc), rcc)
    }

    fn with_afio(afio: Afio<'a>, rcc: &'a Rcc) -> Self {
        Self {
            afio,
            gpio_ports: GpioPorts::new(rcc),
            timers: [
                Timer::new(TimerId::Tim1, rcc),
                Timer::new(TimerId::Tim2, rcc),
                Timer::new(TimerId::Tim3, rcc),
                Timer::new(TimerId::Tim4, rcc),
            ],
            adc1: Adc::new(AdcId::Adc1, rcc),
            adc2: Adc::new(AdcId::Adc2, rcc),
            usart1: Usart::new(UsartId::Usart1, rcc),
            usart2: Usart::new(UsartId::Usart2, rcc),
            usart3: Usart::new(UsartId::Usart3, rcc),
        }
    }

    /// Enable the AFIO and GPIO port clocks.
    ///
    /// AFIO register writes are ignored while its clock is gated, so this
    /// must run before any debug-port or remap configuration.
    pub fn init(&self) {
        self.afio.enable_clock();
        for port in self.gpio_ports.iter() {
            port.enable_clock();
        }
    }

    pub fn get_port(&self, port: PortId) -> &GpioPort<'a> {
        self.gpio_ports.get_port(port)
    }

    pub fn get_timer(&self, timer: TimerId) -> &Timer<'a> {
        &self.timers[timer as usize]
    }

    pub fn get_adc(&self, adc: AdcId) -> &Adc<'a> {
        match adc {
            AdcId::Adc1 => &self.adc1,
            AdcId::Adc2 => &self.adc2,
        }
    }

    pub fn get_usart(&self, usart: UsartId) -> &Usart<'a> {
        match usart {
            UsartId::Usart1 => &self.usart1,
            UsartId::Usart2 => &self.usart2,
            UsartId::Usart3 => &self.usart3,
        }
    }

    /// Look up the handles named by `info`.
    pub fn resolve(&self, info: &PinInfo) -> ResolvedPin<'_, 'a> {
        ResolvedPin {
            info: *info,
            port: self.get_port(info.port),
            timer: info
                .timer
                .map(|tc| (self.get_timer(tc.timer), tc.channel)),
            adc: info.adc.map(|input| (self.get_adc(input.adc), input.channel)),
        }
    }
}

/// A pin descriptor with its port, timer and ADC resolved to the peripheral
/// handles they name.
pub struct ResolvedPin<'r, 'a> {
    pub info: PinInfo,
    pub port: &'r GpioPort<'a>,
    pub timer: Option<(&'r Timer<'a>, tim::Channel)>,
    pub adc: Option<(&'r Adc<'a>, adc::Channel)>,
}
