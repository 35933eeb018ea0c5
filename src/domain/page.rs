// SPDX-License-Identifier: MPL-2.0
//! Paging value objects.
//!
//! These types carry the contract between the asset viewer and whatever
//! fetches pages for it: the viewer receives [`AssetPage`] snapshots and
//! emits [`PageRequest`]s.

use super::asset::AssetSummary;

// =============================================================================
// Page Size Bounds
// =============================================================================

/// Page size bounds (1 to 100 items).
pub mod page_size_bounds {
    /// Minimum page size.
    pub const MIN: u32 = 1;
    /// Maximum page size.
    pub const MAX: u32 = 100;
    /// Default page size.
    pub const DEFAULT: u32 = 10;
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of items shown per page, guaranteed to be within 1–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a page size, clamping the value to the valid range.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self(size.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Number of pages needed for `total_count` items.
    ///
    /// Zero or negative counts need no pages.
    #[must_use]
    pub fn page_count(self, total_count: i64) -> u32 {
        if total_count <= 0 {
            return 0;
        }
        let pages = (total_count - 1) / i64::from(self.0) + 1;
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}

// =============================================================================
// PageNumber
// =============================================================================

/// One-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    /// Creates a page number; values below 1 become page 1.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Index of the first item of this page within the whole collection.
    #[must_use]
    pub fn offset(self, size: PageSize) -> usize {
        (self.0 as usize - 1).saturating_mul(size.value() as usize)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

// =============================================================================
// PageRequest
// =============================================================================

/// Request for a specific page, emitted by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page_number: PageNumber,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self {
            page_number: PageNumber::new(page),
        }
    }
}

// =============================================================================
// AssetPage
// =============================================================================

/// Immutable snapshot of one fetched page.
///
/// `items.len() <= total_count` holds for well-formed pages. `total_count`
/// is signed so a misbehaving source can be represented and degraded rather
/// than rejected. While `is_loading` is set, `items` is not rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetPage {
    pub items: Vec<AssetSummary>,
    pub total_count: i64,
    pub is_loading: bool,
}

impl AssetPage {
    /// A page whose content is still in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// A page of fetched items out of `total_count`.
    #[must_use]
    pub fn loaded(items: Vec<AssetSummary>, total_count: i64) -> Self {
        Self {
            items,
            total_count,
            is_loading: false,
        }
    }

    /// A fetched page with nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(PageSize::new(0).value(), page_size_bounds::MIN);
        assert_eq!(PageSize::new(1000).value(), page_size_bounds::MAX);
        assert_eq!(PageSize::default().value(), 10);
    }

    #[test]
    fn page_count_rounds_up() {
        let size = PageSize::new(10);
        assert_eq!(size.page_count(50), 5);
        assert_eq!(size.page_count(51), 6);
        assert_eq!(size.page_count(1), 1);
    }

    #[test]
    fn page_count_of_malformed_total_is_zero() {
        let size = PageSize::new(10);
        assert_eq!(size.page_count(0), 0);
        assert_eq!(size.page_count(-7), 0);
    }

    #[test]
    fn page_number_never_below_one() {
        assert_eq!(PageNumber::new(0), PageNumber::FIRST);
        assert_eq!(PageRequest::new(0).page_number.value(), 1);
    }

    #[test]
    fn offset_follows_page_size() {
        let size = PageSize::new(10);
        assert_eq!(PageNumber::new(1).offset(size), 0);
        assert_eq!(PageNumber::new(3).offset(size), 20);
    }

    #[test]
    fn loading_page_has_flag_set() {
        let page = AssetPage::loading();
        assert!(page.is_loading);
        assert!(page.is_empty());
        assert!(!AssetPage::empty().is_loading);
    }
}
