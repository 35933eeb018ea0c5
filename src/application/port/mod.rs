// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`catalog`]: Asset fetching, permissions and tier annotation
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Traits are `Send + Sync` so adapters can be shared behind `Arc`
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod catalog;

pub use catalog::{
    AssetBatch, AssetQuery, AssetSource, CatalogError, PermissionProvider, TagTierAnnotator,
    TierAnnotator,
};
