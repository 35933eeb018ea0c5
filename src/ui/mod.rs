// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: screens receive
//! borrowed state, emit messages, and turn them into events for the parent.
//!
//! # Screens
//!
//! - [`assets_tab`] - One page of catalog assets
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Asset card, empty state, pagination
//! - [`widgets`] - Custom Iced widgets (loading indicator)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod assets_tab;
pub mod components;
pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod widgets;
