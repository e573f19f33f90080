// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Logical serial-port names bound to the hardware USARTs.

use stm32f1xx::usart::UsartId;

use crate::config::{SerialArrangement, CONFIG};

/// A logical serial-port name and the USART behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerialBinding {
    pub name: &'static str,
    pub usart: UsartId,
}

const fn bind(name: &'static str, usart: UsartId) -> SerialBinding {
    SerialBinding { name, usart }
}

/// `Serial` is the USB-serial port, so the USARTs start at `Serial1`.
pub const USB_SERIAL_PORTS: [SerialBinding; 3] = [
    bind("Serial1", UsartId::Usart1),
    bind("Serial2", UsartId::Usart2),
    bind("Serial3", UsartId::Usart3),
];

pub const HARDWARE_SERIAL_PORTS: [SerialBinding; 3] = [
    bind("Serial", UsartId::Usart1),
    bind("Serial1", UsartId::Usart2),
    bind("Serial2", UsartId::Usart3),
];

pub const fn serial_ports(arrangement: SerialArrangement) -> &'static [SerialBinding; 3] {
    match arrangement {
        SerialArrangement::UsbSerial => &USB_SERIAL_PORTS,
        SerialArrangement::HardwareSerial => &HARDWARE_SERIAL_PORTS,
    }
}

/// The bindings of this build.
pub const SERIAL_PORTS: &[SerialBinding; 3] = serial_ports(CONFIG.serial_arrangement);

/// USART bound to `name` in this build.
pub fn serial_port(name: &str) -> Option<UsartId> {
    SERIAL_PORTS
        .iter()
        .find(|binding| binding.name == name)
        .map(|binding| binding.usart)
}
