// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Alternate-function I/O: debug-port and peripheral pin remapping.
//!
//! Reference: RM0008 section 9.4.2, "AF remap and debug I/O configuration
//! register (AFIO_MAPR)".
//!
//! The SWJ_CFG field of MAPR is write-only; it always reads back as zero. The
//! driver therefore keeps its own copy of the debug configuration, and writes
//! to MAPR keep SWJ_CFG consistent with that copy.

use core::cell::Cell;

use kernel::hil::debug_port::{DebugPort, DebugPortConfig};
use kernel::platform::chip::ClockInterface;
use kernel::utilities::registers::interfaces::{ReadWriteable, Readable};
use kernel::utilities::registers::{register_bitfields, register_structs, FieldValue, ReadWrite};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::gpio::PortId;
use crate::rcc;

register_structs! {
    /// Alternate-function I/O
    pub AfioRegisters {
        (0x000 => _reserved0),
        /// AF remap and debug I/O configuration register
        (0x004 => mapr: ReadWrite<u32, MAPR::Register>),
        (0x008 => @END),
    }
}

register_bitfields![u32,
    MAPR [
        /// Serial wire JTAG configuration
        SWJ_CFG OFFSET(24) NUMBITS(3) [
            /// Full SWJ (JTAG-DP + SW-DP), reset state
            Full = 0b000,
            /// Full SWJ without NJTRST
            FullNoNjtrst = 0b001,
            /// JTAG-DP disabled, SW-DP enabled
            SwOnly = 0b010,
            /// JTAG-DP and SW-DP disabled
            Disabled = 0b100
        ],
        /// USART3 remapping
        USART3_REMAP OFFSET(4) NUMBITS(2) [],
        /// USART2 remapping
        USART2_REMAP OFFSET(3) NUMBITS(1) [],
        /// USART1 remapping
        USART1_REMAP OFFSET(2) NUMBITS(1) [],
        /// I2C1 remapping
        I2C1_REMAP OFFSET(1) NUMBITS(1) [],
        /// SPI1 remapping
        SPI1_REMAP OFFSET(0) NUMBITS(1) []
    ]
];

const AFIO_BASE: StaticRef<AfioRegisters> =
    unsafe { StaticRef::new(0x4001_0000 as *const AfioRegisters) };

/// SWJ_CFG encoding of `config`.
pub fn swj_cfg_value(config: DebugPortConfig) -> u32 {
    match config {
        DebugPortConfig::Full => 0b000,
        DebugPortConfig::FullNoNjtrst => 0b001,
        DebugPortConfig::SerialWireOnly => 0b010,
        DebugPortConfig::Disabled => 0b100,
    }
}

/// Decode an SWJ_CFG value. The reserved encodings yield `None`.
pub fn from_swj_cfg(value: u32) -> Option<DebugPortConfig> {
    match value {
        0b000 => Some(DebugPortConfig::Full),
        0b001 => Some(DebugPortConfig::FullNoNjtrst),
        0b010 => Some(DebugPortConfig::SerialWireOnly),
        0b100 => Some(DebugPortConfig::Disabled),
        _ => None,
    }
}

/// Whether pin `bit` of `port` is free for general-purpose use under
/// `config`, as opposed to carrying a debug signal.
///
/// | pin  | signal        | free from      |
/// |------|---------------|----------------|
/// | PA13 | JTMS/SWDIO    | Disabled       |
/// | PA14 | JTCK/SWCLK    | Disabled       |
/// | PA15 | JTDI          | SerialWireOnly |
/// | PB3  | JTDO/TRACESWO | SerialWireOnly |
/// | PB4  | NJTRST        | FullNoNjtrst   |
///
/// Pins that never carry a debug signal are always free.
pub fn releases_pin(config: DebugPortConfig, port: PortId, bit: u8) -> bool {
    match (port, bit) {
        (PortId::A, 13) | (PortId::A, 14) => config == DebugPortConfig::Disabled,
        (PortId::A, 15) | (PortId::B, 3) => !config.jtag_enabled(),
        (PortId::B, 4) => config != DebugPortConfig::Full,
        _ => true,
    }
}

pub struct Afio<'a> {
    registers: StaticRef<AfioRegisters>,
    clock: AfioClock<'a>,
    config: Cell<DebugPortConfig>,
}

impl<'a> Afio<'a> {
    pub const fn new(rcc: &'a rcc::Rcc) -> Self {
        Self::with_registers(AFIO_BASE, rcc)
    }

    /// An `Afio` driving the register block at `registers`.
    // Assumes SWJ_CFG is still at its reset value (full debug).
    pub const fn with_registers(registers: StaticRef<AfioRegisters>, rcc: &'a rcc::Rcc) -> Self {
        Self {
            registers,
            clock: AfioClock(rcc::PeripheralClock::new(
                rcc::PeripheralClockType::APB2(rcc::PCLK2::AFIO),
                rcc,
            )),
            config: Cell::new(DebugPortConfig::Full),
        }
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

    /// Route I2C1 to its remapped pins (SCL PB8, SDA PB9) or back to the
    /// default ones (SCL PB6, SDA PB7).
    pub fn set_i2c1_remap(&self, remapped: bool) -> Result<(), ErrorCode> {
        self.write_mapr(MAPR::I2C1_REMAP.val(u32::from(remapped)))
    }

    pub fn is_i2c1_remapped(&self) -> bool {
        self.registers.mapr.is_set(MAPR::I2C1_REMAP)
    }

    /// Route SPI1 to its remapped pins (SCK PB3, MISO PB4, MOSI PB5) or back
    /// to the default ones (SCK PA5, MISO PA6, MOSI PA7).
    pub fn set_spi1_remap(&self, remapped: bool) -> Result<(), ErrorCode> {
        self.write_mapr(MAPR::SPI1_REMAP.val(u32::from(remapped)))
    }

    pub fn is_spi1_remapped(&self) -> bool {
        self.registers.mapr.is_set(MAPR::SPI1_REMAP)
    }

    // Any read-modify-write of MAPR would otherwise write back SWJ_CFG as
    // zero and silently re-enable full debug.
    fn write_mapr(&self, field: FieldValue<u32, MAPR::Register>) -> Result<(), ErrorCode> {
        if !self.is_enabled_clock() {
            return Err(ErrorCode::OFF);
        }
        let swj = MAPR::SWJ_CFG.val(swj_cfg_value(self.config.get()));
        self.registers.mapr.modify(field + swj);
        Ok(())
    }
}

impl DebugPort for Afio<'_> {
    fn debug_config(&self) -> DebugPortConfig {
        self.config.get()
    }

    fn set_debug_config(&self, config: DebugPortConfig) -> Result<(), ErrorCode> {
        if !self.is_enabled_clock() {
            return Err(ErrorCode::OFF);
        }
        if self.config.get() == config {
            return Ok(());
        }
        self.registers
            .mapr
            .modify(MAPR::SWJ_CFG.val(swj_cfg_value(config)));
        self.config.set(config);
        Ok(())
    }
}

struct AfioClock<'a>(rcc::PeripheralClock<'a>);

impl ClockInterface for AfioClock<'_> {
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
    use kernel::utilities::registers::interfaces::Writeable;

    fn afio_on(rcc: &rcc::Rcc) -> (Afio<'_>, StaticRef<AfioRegisters>) {
        let registers = test_registers::zeroed::<AfioRegisters>();
        let afio = Afio::with_registers(registers, rcc);
        afio.enable_clock();
        (afio, registers)
    }

    fn test_rcc() -> rcc::Rcc {
        rcc::Rcc::with_registers(test_registers::zeroed::<rcc::RccRegisters>())
    }

    #[test]
    fn starts_with_full_debug() {
        let rcc = test_rcc();
        let (afio, registers) = afio_on(&rcc);
        assert_eq!(afio.debug_config(), DebugPortConfig::Full);
        assert_eq!(registers.mapr.read(MAPR::SWJ_CFG), 0);
    }

    #[test]
    fn disable_writes_swj_cfg_and_keeps_remaps() {
        let rcc = test_rcc();
        let (afio, registers) = afio_on(&rcc);
        registers.mapr.set(0b11);

        assert_eq!(afio.set_debug_config(DebugPortConfig::Disabled), Ok(()));
        assert_eq!(registers.mapr.read(MAPR::SWJ_CFG), 0b100);
        assert_eq!(registers.mapr.get(), (0b100 << 24) | 0b11);
        assert_eq!(afio.debug_config(), DebugPortConfig::Disabled);
    }

    #[test]
    fn gated_clock_is_reported() {
        let rcc = test_rcc();
        let registers = test_registers::zeroed::<AfioRegisters>();
        let afio = Afio::with_registers(registers, &rcc);

        assert_eq!(
            afio.set_debug_config(DebugPortConfig::Disabled),
            Err(ErrorCode::OFF)
        );
        assert_eq!(registers.mapr.get(), 0);
        assert_eq!(afio.debug_config(), DebugPortConfig::Full);
    }

    #[test]
    fn reapplying_is_a_no_op() {
        let rcc = test_rcc();
        let (afio, registers) = afio_on(&rcc);
        afio.set_debug_config(DebugPortConfig::SerialWireOnly).unwrap();

        // Model the write-only field reading back as zero.
        registers.mapr.set(0);
        assert_eq!(afio.set_debug_config(DebugPortConfig::SerialWireOnly), Ok(()));
        assert_eq!(registers.mapr.get(), 0);
    }

    #[test]
    fn remap_keeps_debug_disabled() {
        let rcc = test_rcc();
        let (afio, registers) = afio_on(&rcc);
        afio.set_debug_config(DebugPortConfig::Disabled).unwrap();

        // SWJ_CFG reads back as zero on hardware.
        registers.mapr.set(0);
        afio.set_i2c1_remap(true).unwrap();
        assert!(afio.is_i2c1_remapped());
        assert!(!afio.is_spi1_remapped());
        assert_eq!(registers.mapr.read(MAPR::SWJ_CFG), 0b100);
    }

    #[test]
    fn swj_cfg_encoding() {
        for config in [
            DebugPortConfig::Full,
            DebugPortConfig::FullNoNjtrst,
            DebugPortConfig::SerialWireOnly,
            DebugPortConfig::Disabled,
        ] {
            assert_eq!(from_swj_cfg(swj_cfg_value(config)), Some(config));
        }
        assert_eq!(from_swj_cfg(0b011), None);
        assert_eq!(from_swj_cfg(0b111), None);
    }

    #[test]
    fn released_debug_pins() {
        assert!(!releases_pin(DebugPortConfig::Full, PortId::B, 4));
        assert!(releases_pin(DebugPortConfig::FullNoNjtrst, PortId::B, 4));
        assert!(!releases_pin(DebugPortConfig::FullNoNjtrst, PortId::B, 3));
        assert!(releases_pin(DebugPortConfig::SerialWireOnly, PortId::A, 15));
        assert!(!releases_pin(DebugPortConfig::SerialWireOnly, PortId::A, 13));
        for bit in [13, 14, 15] {
            assert!(releases_pin(DebugPortConfig::Disabled, PortId::A, bit));
        }
        assert!(releases_pin(DebugPortConfig::Full, PortId::C, 13));
    }
}
