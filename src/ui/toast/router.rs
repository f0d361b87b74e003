// SPDX-License-Identifier: MPL-2.0
//! Surface registration table.
//!
//! Overlay ownership changes dynamically as modals open and close, so
//! "which host is on top" is kept as an explicit registration stack with
//! push/pop-on-unmount semantics rather than ambient global state.

use std::fmt;

/// Identifies a presentation surface that can own a toast host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(&'static str);

impl SurfaceId {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Registration stack resolving the current delivery target.
///
/// The current surface is the most recently registered one still in the
/// table; a modal registered after the main surface therefore takes
/// precedence until it unregisters.
#[derive(Debug, Default)]
pub struct Router {
    stack: Vec<SurfaceId>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `surface` as the topmost host owner. Re-registering an
    /// already-known surface moves it to the top.
    pub fn register(&mut self, surface: SurfaceId) {
        self.stack.retain(|s| *s != surface);
        self.stack.push(surface);
    }

    pub fn unregister(&mut self, surface: SurfaceId) {
        self.stack.retain(|s| *s != surface);
    }

    #[must_use]
    pub fn current(&self) -> Option<SurfaceId> {
        self.stack.last().copied()
    }

    #[must_use]
    pub fn is_registered(&self, surface: SurfaceId) -> bool {
        self.stack.contains(&surface)
    }

    #[must_use]
    pub fn registered_count(&self) -> usize {
        self.stack.len()
    }
}
