// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Support for in-firmware debugging output.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! use kernel::debug;
//!
//! debug!("Yes the code gets here with value {}", i);
//! debug!("got here");
//! ```
//!
//! A board routes the output by registering an [`IoWrite`] sink (typically a
//! blocking UART writer) with [`set_debug_writer`] early during startup.
//! Until a sink is registered, `debug!` output is discarded.

use core::cell::Cell;
use core::fmt::{write, Arguments, Result, Write};
use core::ptr::NonNull;

/// Byte sink used for debug output.
pub trait IoWrite {
    /// Write `buf`, returning the number of bytes written.
    fn write(&mut self, buf: &[u8]) -> usize;
}

struct DebugWriter {
    sink: Cell<Option<NonNull<dyn IoWrite>>>,
}

// Debug output is only produced from the single thread of execution that
// runs the firmware; the cell is never touched from interrupt context.
unsafe impl Sync for DebugWriter {}

static DEBUG_WRITER: DebugWriter = DebugWriter {
    sink: Cell::new(None),
};

/// Register the sink `debug!` writes to, replacing any previous one.
///
/// ## Safety
///
/// Must be called from the single thread that runs the firmware, before any
/// other code may be emitting debug output.
pub unsafe fn set_debug_writer(writer: &'static mut dyn IoWrite) {
    DEBUG_WRITER.sink.set(Some(NonNull::from(writer)));
}

struct SinkAdapter(NonNull<dyn IoWrite>);

impl Write for SinkAdapter {
    fn write_str(&mut self, s: &str) -> Result {
        // The sink was registered as `&'static mut` and is only reached
        // through `DEBUG_WRITER`.
        unsafe { self.0.as_mut() }.write(s.as_bytes());
        Ok(())
    }
}

/// Write a line of formatted debug output to the registered sink.
pub fn debug_println(args: Arguments) {
    let Some(sink) = DEBUG_WRITER.sink.get() else {
        return;
    };
    let mut writer = SinkAdapter(sink);
    let _ = write(&mut writer, args);
    let _ = writer.write_str("\r\n");
}

/// Write formatted debug output followed by a newline.
#[macro_export]
macro_rules! debug {
    () => ({
        $crate::debug!("")
    });
    ($msg:expr $(,)?) => ({
        $crate::debug::debug_println(format_args!($msg))
    });
    ($fmt:expr, $($arg:tt)+) => ({
        $crate::debug::debug_println(format_args!($fmt, $($arg)+))
    });
}

#[cfg(test)]
mod tests {
    use std::boxed::Box;
    use std::vec::Vec;

    struct Capture(Vec<u8>);

    impl super::IoWrite for Capture {
        fn write(&mut self, buf: &[u8]) -> usize {
            self.0.extend_from_slice(buf);
            buf.len()
        }
    }

    // The only test in this crate that registers a sink.
    #[test]
    fn messages_reach_registered_sink() {
        let capture: &'static mut Capture = Box::leak(Box::new(Capture(vec![])));
        let raw: *const Capture = capture;
        unsafe { super::set_debug_writer(capture) };

        debug!("swj {}", 4);
        debug!("done");

        let written = unsafe { &(*raw).0 };
        assert_eq!(written.as_slice(), b"swj 4\r\ndone\r\n");
    }
}
