// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! Translation bundles are embedded `.ftl` files under `assets/i18n/`,
//! one per locale. Locale resolution order: CLI flag, config file, OS
//! locale, `en-US` fallback.

pub mod fluent;
