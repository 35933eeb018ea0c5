// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core catalog types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It depends on
//! `std` only so it can be tested without any UI or I/O machinery.
//!
//! # Modules
//!
//! - [`asset`]: Asset projections ([`AssetSummary`](asset::AssetSummary),
//!   [`Tier`](asset::Tier), [`UsagePercentile`](asset::UsagePercentile))
//! - [`page`]: Paging values ([`AssetPage`](page::AssetPage),
//!   [`PageRequest`](page::PageRequest), [`PageSize`](page::PageSize))
//! - [`permission`]: Capability flags ([`PermissionSet`](permission::PermissionSet))

pub mod asset;
pub mod page;
pub mod permission;

pub use asset::{AssetId, AssetSummary, Tier, UsagePercentile};
pub use page::{AssetPage, PageNumber, PageRequest, PageSize};
pub use permission::{has_capability, Capability, PermissionSet};
