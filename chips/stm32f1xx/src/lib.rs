// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral implementations for the STM32F1xx MCU.
//!
//! STM32F103: <https://www.st.com/en/microcontrollers-microprocessors/stm32f103.html>
//!
//! This crate owns the process-wide peripheral handles a board refers to
//! (GPIO ports, timers, ADCs and USARTs), the RCC clock gates behind them and
//! the AFIO debug-port multiplexer. Board pin maps name these handles through
//! the small `Copy` identifiers in each module and resolve them against
//! [`chip::Stm32f1xxDefaultPeripherals`].

#![no_std]

pub mod chip;
pub mod pinmap;

// Peripherals
pub mod adc;
pub mod afio;
pub mod gpio;
pub mod rcc;
pub mod tim;
pub mod usart;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
