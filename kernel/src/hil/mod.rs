// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Public traits for interfaces between board data, chip collaborators and
//! the rest of the firmware.

pub mod debug_port;
pub mod pinmap;
