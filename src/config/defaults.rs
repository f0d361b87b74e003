// SPDX-License-Identifier: MPL-2.0
//! Default values for toast presentation settings.

/// How long a toast stays visible before auto-hiding, in milliseconds.
pub const DEFAULT_VISIBILITY_TIME_MS: u64 = 3500;

/// Extra space kept between a bottom-anchored toast and the window edge,
/// reserved for an on-screen keyboard.
pub const DEFAULT_KEYBOARD_OFFSET: f32 = 12.0;
