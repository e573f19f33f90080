// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Pin table of the SushiBits One.
//!
//! Logical pin numbers follow the silkscreen: `D0`..`D14` down one header,
//! `A0`..`A5` and the bus pins down the other, then the USB and debug pins
//! that are not broken out. The order is part of the board's interface and
//! must not change.

use kernel::hil::pinmap::PinIndex;
use stm32f1xx::adc::{AdcId, Channel as Adc};
use stm32f1xx::gpio::PortId;
use stm32f1xx::pinmap::PinInfo;
use stm32f1xx::tim::{Channel as Ch, TimerId};
use stm32f1xx::usart::UsartId;

pub const NUM_PINS: usize = 33;
pub const NUM_PWM_PINS: usize = 12;
pub const NUM_ADC_PINS: usize = 9;
pub const NUM_USED_PINS: usize = 2;

// Board labels
pub const D0: PinIndex = 0;
pub const D1: PinIndex = 1;
pub const D2: PinIndex = 2;
pub const D3: PinIndex = 3;
pub const D4: PinIndex = 4;
pub const D5: PinIndex = 5;
pub const D6: PinIndex = 6;
pub const D7: PinIndex = 7;
pub const D8: PinIndex = 8;
pub const D9: PinIndex = 9;
pub const D10: PinIndex = 10;
pub const D11: PinIndex = 11;
pub const D12: PinIndex = 12;
pub const D13: PinIndex = 13;
pub const D14: PinIndex = 14;
pub const A0: PinIndex = 15;
pub const A1: PinIndex = 16;
pub const A2: PinIndex = 17;
pub const A3: PinIndex = 18;
pub const A4: PinIndex = 19;
pub const A5: PinIndex = 20;
pub const SDA: PinIndex = 21;
pub const SCL: PinIndex = 22;
pub const SCK: PinIndex = 23;
pub const MISO: PinIndex = 24;
pub const MOSI: PinIndex = 25;
pub const WKUP: PinIndex = 26;
pub const USB_DM: PinIndex = 27;
pub const USB_DP: PinIndex = 28;
pub const JTMS: PinIndex = 29;
pub const JTDO: PinIndex = 30;
pub const JTDI: PinIndex = 31;
pub const JTCK: PinIndex = 32;

// Port names
pub const PA0: PinIndex = WKUP;
pub const PA1: PinIndex = A1;
pub const PA2: PinIndex = A0;
pub const PA3: PinIndex = A2;
pub const PA4: PinIndex = A3;
pub const PA5: PinIndex = SCK;
pub const PA6: PinIndex = MISO;
pub const PA7: PinIndex = MOSI;
pub const PA8: PinIndex = D6;
pub const PA9: PinIndex = D1;
pub const PA10: PinIndex = D0;
pub const PA11: PinIndex = USB_DM;
pub const PA12: PinIndex = USB_DP;
pub const PA13: PinIndex = JTMS;
pub const PA14: PinIndex = JTCK;
pub const PA15: PinIndex = JTDI;
pub const PB0: PinIndex = A4;
pub const PB1: PinIndex = A5;
pub const PB2: PinIndex = D13;
pub const PB3: PinIndex = JTDO;
pub const PB4: PinIndex = D7;
pub const PB5: PinIndex = D8;
pub const PB6: PinIndex = D9;
pub const PB7: PinIndex = D10;
pub const PB8: PinIndex = SCL;
pub const PB9: PinIndex = SDA;
pub const PB10: PinIndex = D12;
pub const PB11: PinIndex = D11;
pub const PB12: PinIndex = D2;
pub const PB13: PinIndex = D3;
pub const PB14: PinIndex = D4;
pub const PB15: PinIndex = D5;
pub const PC13: PinIndex = D14;

/// SPI1 chip select. SCK, MISO and MOSI are the labelled pins.
pub const SPI1_NSS: PinIndex = A3;

const fn pa(bit: u8) -> PinInfo {
    PinInfo::gpio(PortId::A, bit)
}

const fn pb(bit: u8) -> PinInfo {
    PinInfo::gpio(PortId::B, bit)
}

const fn pc(bit: u8) -> PinInfo {
    PinInfo::gpio(PortId::C, bit)
}

const PINS: [PinInfo; NUM_PINS] = [
    pa(10).with_timer(TimerId::Tim1, Ch::Channel3), // D0
    pa(9).with_timer(TimerId::Tim1, Ch::Channel2),  // D1
    pb(12),                                         // D2
    pb(13),                                         // D3
    pb(14),                                         // D4
    pb(15),                                         // D5
    pa(8).with_timer(TimerId::Tim1, Ch::Channel1),  // D6
    pb(4),                                          // D7
    pb(5),                                          // D8
    pb(6).with_timer(TimerId::Tim4, Ch::Channel1),  // D9
    pb(7).with_timer(TimerId::Tim4, Ch::Channel2),  // D10
    pb(11),                                         // D11
    pb(10),                                         // D12
    pb(2),                                          // D13
    pc(13),                                         // D14
    pa(2)
        .with_timer(TimerId::Tim2, Ch::Channel3)
        .with_adc(AdcId::Adc1, Adc::Channel2), // A0
    pa(1)
        .with_timer(TimerId::Tim2, Ch::Channel2)
        .with_adc(AdcId::Adc1, Adc::Channel1), // A1
    pa(3)
        .with_timer(TimerId::Tim2, Ch::Channel4)
        .with_adc(AdcId::Adc1, Adc::Channel3), // A2
    pa(4).with_adc(AdcId::Adc1, Adc::Channel4), // A3
    pb(0)
        .with_timer(TimerId::Tim3, Ch::Channel3)
        .with_adc(AdcId::Adc1, Adc::Channel8), // A4
    pb(1)
        .with_timer(TimerId::Tim3, Ch::Channel4)
        .with_adc(AdcId::Adc1, Adc::Channel9), // A5
    pb(9).with_timer(TimerId::Tim4, Ch::Channel4), // SDA
    pb(8).with_timer(TimerId::Tim4, Ch::Channel3), // SCL
    pa(5).with_adc(AdcId::Adc1, Adc::Channel5),    // SCK
    pa(6)
        .with_timer(TimerId::Tim3, Ch::Channel1)
        .with_adc(AdcId::Adc1, Adc::Channel6), // MISO
    pa(7)
        .with_timer(TimerId::Tim3, Ch::Channel2)
        .with_adc(AdcId::Adc1, Adc::Channel7), // MOSI
    pa(0)
        .with_timer(TimerId::Tim2, Ch::Channel1)
        .with_adc(AdcId::Adc1, Adc::Channel0), // WKUP
    pa(11).with_timer(TimerId::Tim1, Ch::Channel4), // USB D-
    pa(12),                                         // USB D+
    pa(13),                                         // JTMS
    pb(3),                                          // JTDO
    pa(15),                                         // JTDI
    pa(14),                                         // JTCK
];

/// Descriptor of every pin, indexed by logical pin number.
pub static PIN_MAP: [PinInfo; NUM_PINS] = PINS;

/// Pins that can generate PWM output.
///
/// PA11 has TIM1 channel 4 but is the USB D- line, so it is not listed.
pub const PWM_PINS: [PinIndex; NUM_PWM_PINS] =
    [PB0, PA7, PA6, PA3, PA2, PA1, PA0, PB7, PB6, PA10, PA9, PA8];

/// Pins wired to an ADC input.
pub const ADC_PINS: [PinIndex; NUM_ADC_PINS] = [PB0, PA7, PA6, PA5, PA4, PA3, PA2, PA1, PA0];

/// USB D+ and D-. Boards without the USB pull-up circuitry may use these as
/// GPIO; generic code skips them.
pub const USED_PINS: [PinIndex; NUM_USED_PINS] = [USB_DP, USB_DM];

/// Pins that carry debug signals out of reset and are released by
/// `board_init()`.
pub const DEBUG_PINS: [PinIndex; 5] = [JTMS, JTCK, JTDI, JTDO, PB4];

const _: () = {
    let mut i = 0;
    while i < NUM_PWM_PINS {
        assert!(PINS[PWM_PINS[i] as usize].timer.is_some(), "PWM pin without timer");
        i += 1;
    }
    let mut i = 0;
    while i < NUM_ADC_PINS {
        assert!(PINS[ADC_PINS[i] as usize].adc.is_some(), "ADC pin without ADC input");
        i += 1;
    }
    let mut i = 0;
    while i < NUM_USED_PINS {
        assert!((USED_PINS[i] as usize) < NUM_PINS);
        i += 1;
    }
};

pub const fn pin_count() -> usize {
    NUM_PINS
}

/// Descriptor of `pin`, or `None` past the end of the table.
pub fn pin_info(pin: PinIndex) -> Option<&'static PinInfo> {
    PIN_MAP.get(usize::from(pin))
}

/// Logical pin number of port `port`, bit `bit`, if the board exposes it.
pub fn pin_for(port: PortId, bit: u8) -> Option<PinIndex> {
    PIN_MAP
        .iter()
        .position(|info| info.is(port, bit))
        .map(|index| index as PinIndex)
}

/// Logical TX and RX pins of `usart` in its default pin assignment.
pub const fn usart_pins(usart: UsartId) -> (PinIndex, PinIndex) {
    match usart {
        UsartId::Usart1 => (PA9, PA10),
        UsartId::Usart2 => (PA2, PA3),
        UsartId::Usart3 => (PB10, PB11),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::hil::pinmap::PinCapabilities;

    #[test]
    fn table_sizes() {
        assert_eq!(PIN_MAP.len(), NUM_PINS);
        assert_eq!(pin_count(), 33);
        assert_eq!(PWM_PINS.len(), 12);
        assert_eq!(ADC_PINS.len(), 9);
        assert_eq!(USED_PINS.len(), 2);
    }

    #[test]
    fn lists_agree_with_capabilities() {
        for pin in PWM_PINS {
            assert!(pin_info(pin).unwrap().has_timer(), "pin {}", pin);
        }
        for pin in ADC_PINS {
            assert!(pin_info(pin).unwrap().has_adc(), "pin {}", pin);
        }
    }

    #[test]
    fn bits_stay_within_a_port() {
        for info in PIN_MAP.iter() {
            assert!(info.gpio_bit() < 16);
        }
    }

    #[test]
    fn out_of_range_pin_is_none() {
        assert!(pin_info(NUM_PINS as PinIndex).is_none());
        assert!(pin_info(PinIndex::MAX).is_none());
        assert!(pin_info(JTCK).is_some());
    }

    #[test]
    fn labels_match_descriptors() {
        assert!(PIN_MAP[usize::from(D0)].is(PortId::A, 10));
        assert!(PIN_MAP[usize::from(D14)].is(PortId::C, 13));
        assert!(PIN_MAP[usize::from(A4)].is(PortId::B, 0));
        assert!(PIN_MAP[usize::from(USB_DP)].is(PortId::A, 12));
        assert!(PIN_MAP[usize::from(USB_DM)].is(PortId::A, 11));
        assert!(PIN_MAP[usize::from(JTDO)].is(PortId::B, 3));
    }

    #[test]
    fn reverse_lookup() {
        for (index, info) in PIN_MAP.iter().enumerate() {
            assert_eq!(pin_for(info.port, info.gpio_bit), Some(index as PinIndex));
        }
        assert_eq!(pin_for(PortId::B, 8), Some(SCL));
        assert_eq!(pin_for(PortId::C, 14), None);
        assert_eq!(pin_for(PortId::D, 0), None);
    }

    #[test]
    fn usart_pins_follow_chip_defaults() {
        for usart in UsartId::ALL {
            let (tx, rx) = usart_pins(usart);
            let (port, bit) = usart.tx_pin();
            assert_eq!(pin_for(port, bit), Some(tx));
            let (port, bit) = usart.rx_pin();
            assert_eq!(pin_for(port, bit), Some(rx));
        }
    }

    #[test]
    fn usb_pin_keeps_timer_but_is_not_pwm() {
        assert!(pin_info(USB_DM).unwrap().has_timer());
        assert!(!PWM_PINS.contains(&USB_DM));
    }
}
