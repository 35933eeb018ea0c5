// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`fixture_catalog`]: TOML-backed in-memory catalog (implements [`AssetSource`])
//! - [`static_permissions`]: Config-driven capabilities (implements [`PermissionProvider`])
//!
//! [`AssetSource`]: crate::application::port::AssetSource
//! [`PermissionProvider`]: crate::application::port::PermissionProvider

pub mod fixture_catalog;
pub mod static_permissions;

pub use fixture_catalog::FixtureCatalog;
pub use static_permissions::StaticPermissions;
