// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Page requests are the only side effect: each one bumps the fetch
//! generation and runs the source query as a [`Task`]. Results carrying an
//! older generation are discarded on arrival.

use super::{App, Message};
use crate::config;
use crate::application::port::{AssetBatch, AssetQuery};
use crate::domain::{AssetPage, PageRequest};
use crate::error::Error;
use crate::ui::assets_tab::{self, Event as AssetsTabEvent};
use crate::ui::widgets::loading_indicator;
use iced::Task;
use std::sync::Arc;

pub(super) fn handle_assets_tab_message(
    app: &mut App,
    message: &assets_tab::Message,
) -> Task<Message> {
    match assets_tab::update(message) {
        AssetsTabEvent::PageChange(request) => request_page(app, request),
        AssetsTabEvent::CreateAsset => {
            log::info!("asset creation requested");
            Task::none()
        }
    }
}

/// Switches to `request`'s page and starts fetching it.
pub(super) fn request_page(app: &mut App, request: PageRequest) -> Task<Message> {
    app.current_page = request.page_number;
    app.page = AssetPage::loading();
    app.generation = app.generation.wrapping_add(1);

    let generation = app.generation;
    let query = AssetQuery {
        request,
        page_size: app.page_size,
    };
    let source = Arc::clone(&app.source);
    log::debug!(
        "fetching page {} (size {}, generation {generation})",
        request.page_number.value(),
        query.page_size.value()
    );

    Task::perform(
        async move { source.fetch_page(&query).map_err(Error::from) },
        move |result| Message::PageFetched { generation, result },
    )
}

pub(super) fn handle_page_fetched(
    app: &mut App,
    generation: u64,
    result: Result<AssetBatch, Error>,
) -> Task<Message> {
    if generation != app.generation {
        log::debug!(
            "dropping stale page (generation {generation}, latest {})",
            app.generation
        );
        return Task::none();
    }

    app.page = match result {
        Ok(batch) => AssetPage::loaded(batch.items, batch.total_count),
        Err(err) => {
            log::warn!(
                "failed to fetch page {}: {err}",
                app.current_page.value()
            );
            AssetPage::empty()
        }
    };
    Task::none()
}

pub(super) fn handle_spinner_tick(app: &mut App) -> Task<Message> {
    if app.page.is_loading {
        app.spinner_rotation = loading_indicator::advance(app.spinner_rotation);
    }
    Task::none()
}

/// Moves to the next locale and persists it as the configured language.
pub(super) fn handle_language_cycled(app: &mut App) -> Task<Message> {
    let Some(locale) = app.i18n.next_locale() else {
        return Task::none();
    };
    log::info!("switching language to {locale}");
    app.config.general.language = Some(locale.to_string());
    app.i18n.set_locale(locale);

    if let Err(err) = config::save_with_override(&app.config, app.settings_dir.clone()) {
        log::warn!("{} ({err})", app.i18n.tr(err.i18n_key()));
    }
    Task::none()
}
