// SPDX-License-Identifier: MPL-2.0
//! `catalog_lens` browses the assets of a metadata catalog page by page,
//! built with the Iced GUI framework.
//!
//! The heart of the crate is the assets tab ([`ui::assets_tab`]): a pure view
//! over one fetched page that shows a loading indicator, a list of asset
//! cards with pagination, or an empty-state placeholder. Around it,
//! [`app`] owns the collaborators defined in [`application::port`] and
//! adapted in [`infrastructure`].

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
