// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a demonstration of layered toast notifications built
//! with the Iced GUI framework.
//!
//! Transient banners are shown over whichever presentation surface is
//! currently on top - the main screen, a modally-presented screen, or a
//! bottom sheet - by routing show/hide commands to the surface that is
//! current at delivery time. The demo also shows delayed delivery,
//! press actions, auto-hide, and gesture-tracked sheet dismissal.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
