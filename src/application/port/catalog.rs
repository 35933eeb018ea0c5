// SPDX-License-Identifier: MPL-2.0
//! Catalog collaborator ports.
//!
//! The asset viewer never fetches anything itself. These traits describe the
//! collaborators the host application wires around it:
//!
//! - [`AssetSource`] returns pages of assets for a [`PageRequest`]
//! - [`PermissionProvider`] supplies the current [`PermissionSet`]
//! - [`TierAnnotator`] computes the tier shown on each card

use crate::domain::{AssetSummary, PageRequest, PageSize, PermissionSet, Tier};
use std::fmt;

// =============================================================================
// CatalogError
// =============================================================================

/// Errors that can occur while fetching assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog (or the requested collection) does not exist.
    NotFound(String),

    /// The catalog data could not be parsed.
    Malformed(String),

    /// The catalog could not be read.
    Io(String),

    /// The source is temporarily unable to answer.
    Unavailable(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(what) => write!(f, "Catalog not found: {what}"),
            CatalogError::Malformed(msg) => write!(f, "Malformed catalog data: {msg}"),
            CatalogError::Io(msg) => write!(f, "I/O error: {msg}"),
            CatalogError::Unavailable(msg) => write!(f, "Catalog unavailable: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// =============================================================================
// Query / Batch
// =============================================================================

/// What the host asks a source for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetQuery {
    pub request: PageRequest,
    pub page_size: PageSize,
}

/// One page worth of assets plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetBatch {
    pub items: Vec<AssetSummary>,
    pub total_count: i64,
}

// =============================================================================
// Traits
// =============================================================================

/// Port for fetching pages of assets.
///
/// Implementations must be `Send + Sync`: the host runs fetches inside
/// `iced::Task`s on the async runtime.
pub trait AssetSource: Send + Sync {
    /// Fetches the page described by `query`.
    ///
    /// A page past the end of the collection is not an error: it yields an
    /// empty batch carrying the real `total_count`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the underlying catalog cannot answer.
    fn fetch_page(&self, query: &AssetQuery) -> Result<AssetBatch, CatalogError>;
}

/// Port supplying the capabilities of the current user.
pub trait PermissionProvider: Send + Sync {
    fn permissions(&self) -> PermissionSet;
}

/// Port computing display annotations before assets reach the viewer.
pub trait TierAnnotator: Send + Sync {
    fn annotate(&self, asset: &mut AssetSummary);
}

/// Derives the tier from `Tier.TierN` tags, keeping the best rank.
///
/// A tier already set on the asset is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagTierAnnotator;

impl TierAnnotator for TagTierAnnotator {
    fn annotate(&self, asset: &mut AssetSummary) {
        if asset.tier.is_some() {
            return;
        }
        asset.tier = asset.tags.iter().filter_map(|tag| Tier::from_tag(tag)).min();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::NotFound("glossary".to_string());
        assert!(format!("{err}").contains("glossary"));

        let err = CatalogError::Malformed("bad table".to_string());
        assert!(format!("{err}").contains("bad table"));

        let err = CatalogError::Unavailable("timeout".to_string());
        assert!(format!("{err}").contains("timeout"));
    }

    #[test]
    fn tag_annotator_picks_best_tier() {
        let mut asset = AssetSummary::new("1", "orders", "svc.orders");
        asset.tags.insert("Tier.Tier3".into());
        asset.tags.insert("Tier.Tier1".into());
        asset.tags.insert("PII.None".into());

        TagTierAnnotator.annotate(&mut asset);
        assert_eq!(asset.tier, Tier::new(1));
    }

    #[test]
    fn tag_annotator_keeps_existing_tier() {
        let mut asset = AssetSummary::new("1", "orders", "svc.orders");
        asset.tier = Tier::new(4);
        asset.tags.insert("Tier.Tier1".into());

        TagTierAnnotator.annotate(&mut asset);
        assert_eq!(asset.tier, Tier::new(4));
    }

    #[test]
    fn tag_annotator_without_tier_tags_leaves_none() {
        let mut asset = AssetSummary::new("1", "orders", "svc.orders");
        asset.tags.insert("PII.None".into());

        TagTierAnnotator.annotate(&mut asset);
        assert_eq!(asset.tier, None);
    }
}
