// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for board pin maps.
//!
//! A board describes every pin it exposes in a fixed table. The index into
//! that table is the *logical pin number*; it is the only way the rest of the
//! firmware and user code refers to a pin, so the order of the table must
//! never change once published.
//!
//! Alongside the table a board publishes three ordered lists of logical pin
//! numbers:
//!
//! - the pins able to generate PWM output (each has a timer channel),
//! - the pins wired to an ADC input,
//! - the pins committed to a fixed on-board function. This list is advisory:
//!   nothing stops a caller from configuring a used pin, but generic code
//!   should skip these pins when handing out general-purpose I/O.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! fn first_free_pwm<M: PinMap>(map: &M) -> Option<PinIndex> {
//!     map.pwm_pins().iter().copied().find(|pin| !map.is_used_pin(*pin))
//! }
//! ```

/// Logical pin number: the index of a pin in a board's pin table.
pub type PinIndex = u8;

/// Capability queries on a single pin descriptor.
///
/// The descriptor type itself is chip specific (it names the chip's ports,
/// timers and ADCs), this trait is the part generic code can rely on.
pub trait PinCapabilities {
    /// Bit position of the pin within its GPIO port.
    fn gpio_bit(&self) -> u8;

    /// Whether a timer channel is attached to the pin.
    fn has_timer(&self) -> bool;

    /// Whether the pin is an ADC input.
    fn has_adc(&self) -> bool;
}

/// Read-only view of a board's pin table and auxiliary pin lists.
pub trait PinMap {
    /// Chip-specific pin descriptor.
    type Info: PinCapabilities;

    /// Number of pins in the table.
    fn pin_count(&self) -> usize;

    /// Descriptor of `pin`, or `None` if `pin` is not below `pin_count()`.
    fn pin_info(&self, pin: PinIndex) -> Option<&Self::Info>;

    /// Pins that can generate PWM output, in board order.
    fn pwm_pins(&self) -> &[PinIndex];

    /// Pins that are ADC inputs, in board order.
    fn adc_pins(&self) -> &[PinIndex];

    /// Pins committed to a fixed on-board function.
    fn used_pins(&self) -> &[PinIndex];

    fn is_pwm_pin(&self, pin: PinIndex) -> bool {
        self.pwm_pins().contains(&pin)
    }

    fn is_adc_pin(&self, pin: PinIndex) -> bool {
        self.adc_pins().contains(&pin)
    }

    fn is_used_pin(&self, pin: PinIndex) -> bool {
        self.used_pins().contains(&pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Info {
        bit: u8,
        timer: bool,
        adc: bool,
    }

    impl PinCapabilities for Info {
        fn gpio_bit(&self) -> u8 {
            self.bit
        }
        fn has_timer(&self) -> bool {
            self.timer
        }
        fn has_adc(&self) -> bool {
            self.adc
        }
    }

    struct ThreePins {
        table: [Info; 3],
    }

    impl PinMap for ThreePins {
        type Info = Info;

        fn pin_count(&self) -> usize {
            self.table.len()
        }
        fn pin_info(&self, pin: PinIndex) -> Option<&Info> {
            self.table.get(usize::from(pin))
        }
        fn pwm_pins(&self) -> &[PinIndex] {
            &[0, 2]
        }
        fn adc_pins(&self) -> &[PinIndex] {
            &[2]
        }
        fn used_pins(&self) -> &[PinIndex] {
            &[1]
        }
    }

    fn board() -> ThreePins {
        ThreePins {
            table: [
                Info {
                    bit: 4,
                    timer: true,
                    adc: false,
                },
                Info {
                    bit: 11,
                    timer: false,
                    adc: false,
                },
                Info {
                    bit: 0,
                    timer: true,
                    adc: true,
                },
            ],
        }
    }

    #[test]
    fn membership_follows_lists() {
        let map = board();
        assert!(map.is_pwm_pin(0));
        assert!(!map.is_pwm_pin(1));
        assert!(map.is_adc_pin(2));
        assert!(!map.is_adc_pin(0));
        assert!(map.is_used_pin(1));
        assert!(!map.is_used_pin(2));
    }

    #[test]
    fn lookup_past_the_end_is_none() {
        let map = board();
        assert_eq!(map.pin_count(), 3);
        assert_eq!(map.pin_info(2).map(|i| i.gpio_bit()), Some(0));
        assert!(map.pin_info(3).is_none());
        assert!(map.pin_info(PinIndex::MAX).is_none());
    }

    #[test]
    fn generic_capability_check() {
        fn lists_agree<M: PinMap>(map: &M) -> bool {
            map.pwm_pins()
                .iter()
                .all(|p| map.pin_info(*p).is_some_and(|i| i.has_timer()))
                && map
                    .adc_pins()
                    .iter()
                    .all(|p| map.pin_info(*p).is_some_and(|i| i.has_adc()))
        }
        assert!(lists_agree(&board()));
    }
}
