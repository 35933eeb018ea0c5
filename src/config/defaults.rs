// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Listing**: Asset page size bounds
//! - **Permissions**: Capabilities granted when nothing is configured

use crate::domain::page::page_size_bounds;

// ==========================================================================
// Listing Defaults
// ==========================================================================

/// Default number of assets per page.
pub const DEFAULT_PAGE_SIZE: u32 = page_size_bounds::DEFAULT;

/// Minimum allowed page size.
pub const MIN_PAGE_SIZE: u32 = page_size_bounds::MIN;

/// Maximum allowed page size.
pub const MAX_PAGE_SIZE: u32 = page_size_bounds::MAX;

// ==========================================================================
// Permission Defaults
// ==========================================================================

/// Whether the "add asset" action is offered when unconfigured.
pub const DEFAULT_CAN_CREATE: bool = false;

const _: () = {
    assert!(MIN_PAGE_SIZE <= DEFAULT_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
};
