// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Labels are looked up in Fluent bundles embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Optional directory of `.ftl` files overriding the embedded ones
//! - Fallback to `en-US`, then to a visible `MISSING:` marker

pub mod fluent;
