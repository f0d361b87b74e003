// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`demo`] - Demo screens driving the toast command API
//!
//! # Shared Infrastructure
//!
//! - [`toast`] - Toast hosts, router, and command API
//! - [`sheet`] - Modal presentation surface (bottom sheet / card)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod demo;
pub mod design_tokens;
pub mod sheet;
pub mod styles;
pub mod toast;
