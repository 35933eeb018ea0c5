// SPDX-License-Identifier: MPL-2.0
//! Reusable pieces of the assets tab.
//!
//! # Components
//!
//! - [`asset_card`] - Card for a single catalog asset
//! - [`empty_state`] - Placeholder with an optional call to action
//! - [`pagination`] - Windowed page-number control

pub mod asset_card;
pub mod empty_state;
pub mod pagination;

pub use empty_state::EmptyState;
pub use pagination::{PageLink, Pagination};
