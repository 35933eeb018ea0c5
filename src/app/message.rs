// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::AssetBatch;
use crate::error::Error;
use crate::ui::assets_tab;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    AssetsTab(assets_tab::Message),
    /// Result of a page fetch, tagged with the generation that requested it.
    PageFetched {
        generation: u64,
        result: Result<AssetBatch, Error>,
    },
    /// Animation tick for the loading indicator.
    SpinnerTick(Instant),
    /// Switch to the next available language and remember it.
    LanguageCycled,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CATALOG_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional catalog fixture to browse instead of the configured one.
    pub catalog_path: Option<String>,
}
