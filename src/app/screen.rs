// SPDX-License-Identifier: MPL-2.0
//! The application's top-level screens.

/// Which screen fills the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The main demo playground.
    Demo,
    /// The modally-presented second screen.
    Modal,
}
