// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the assets tab.
//!
//! The `App` struct owns the collaborators (asset source, permissions,
//! localization) and turns the tab's events into page fetches. Every fetch is
//! tagged with a generation number so that only the most recent request ever
//! reaches the screen.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{AssetSource, PermissionProvider};
use crate::config::{self, Config};
use crate::domain::{AssetPage, PageNumber, PageRequest, PageSize, PermissionSet};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{FixtureCatalog, StaticPermissions};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Directory settings are saved to; `None` uses the resolved default.
    settings_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    source: Arc<dyn AssetSource>,
    permissions: PermissionSet,
    page: AssetPage,
    current_page: PageNumber,
    page_size: PageSize,
    spinner_rotation: f32,
    /// Generation of the latest page request.
    generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_page", &self.current_page)
            .field("page_size", &self.page_size)
            .field("is_loading", &self.page.is_loading)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)] // window dimensions are small
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Opens the catalog at `path`, or the bundled sample when no path is given.
///
/// A catalog that cannot be opened is logged and replaced by an empty one so
/// the window still comes up.
fn open_catalog(path: Option<PathBuf>, i18n: &I18n) -> Arc<dyn AssetSource> {
    let catalog = match &path {
        Some(path) => FixtureCatalog::from_path(path),
        None => FixtureCatalog::sample(),
    };

    match catalog {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            let err = Error::from(err);
            log::error!("{} ({err})", i18n.tr(err.i18n_key()));
            Arc::new(FixtureCatalog::empty())
        }
    }
}

impl App {
    /// Builds the application around explicit collaborators. No fetch is
    /// issued; the page starts out loading.
    pub fn with_source(
        i18n: I18n,
        config: &Config,
        source: Arc<dyn AssetSource>,
        permissions: &dyn PermissionProvider,
    ) -> Self {
        Self {
            i18n,
            config: config.clone(),
            settings_dir: None,
            theme_mode: config.general.theme_mode,
            source,
            permissions: permissions.permissions(),
            page: AssetPage::loading(),
            current_page: PageNumber::FIRST,
            page_size: config.listing.page_size(),
            spinner_rotation: 0.0,
            generation: 0,
        }
    }

    /// Loads configuration and localization, opens the catalog and requests
    /// the first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let catalog_path = flags
            .catalog_path
            .map(PathBuf::from)
            .or_else(|| config.listing.catalog_path.clone());
        let source = open_catalog(catalog_path, &i18n);
        let permissions = StaticPermissions::from_config(&config.permissions);

        let mut app = Self::with_source(i18n, &config, source, &permissions);
        log::info!(
            "starting with locale {} and page size {}",
            app.i18n.current_locale(),
            app.page_size.value()
        );

        let task = update::request_page(&mut app, PageRequest::new(1));
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.page.is_loading)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AssetsTab(tab_message) => {
                update::handle_assets_tab_message(self, &tab_message)
            }
            Message::PageFetched { generation, result } => {
                update::handle_page_fetched(self, generation, result)
            }
            Message::SpinnerTick(_) => update::handle_spinner_tick(self),
            Message::LanguageCycled => update::handle_language_cycled(self),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: &self.page,
            current_page: self.current_page,
            page_size: self.page_size,
            permissions: &self.permissions,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{AssetBatch, CatalogError};
    use crate::domain::AssetSummary;
    use crate::ui::assets_tab;
    use std::time::Instant;

    fn catalog_of(count: usize) -> Arc<dyn AssetSource> {
        let assets = (0..count)
            .map(|i| AssetSummary::new(format!("id-{i}"), format!("t{i}"), format!("svc.t{i}")))
            .collect();
        Arc::new(FixtureCatalog::from_assets(assets).expect("unique ids"))
    }

    fn app_with(count: usize, can_create: bool) -> App {
        let mut config = Config::default();
        config.permissions.create = Some(can_create);
        let permissions = StaticPermissions::from_config(&config.permissions);
        App::with_source(I18n::default(), &config, catalog_of(count), &permissions)
    }

    fn batch(count: usize, total: i64) -> AssetBatch {
        AssetBatch {
            items: (0..count)
                .map(|i| AssetSummary::new(format!("id-{i}"), format!("t{i}"), "svc"))
                .collect(),
            total_count: total,
        }
    }

    #[test]
    fn starts_loading_on_first_page() {
        let app = app_with(3, false);
        assert!(app.page.is_loading);
        assert_eq!(app.current_page, PageNumber::FIRST);
        assert_eq!(app.generation, 0);
    }

    #[test]
    fn page_selection_starts_a_new_fetch() {
        let mut app = app_with(30, false);
        app.page = AssetPage::loaded(Vec::new(), 30);

        let _ = app.update(Message::AssetsTab(assets_tab::Message::PageSelected(
            PageRequest::new(2),
        )));

        assert!(app.page.is_loading);
        assert_eq!(app.current_page, PageNumber::new(2));
        assert_eq!(app.generation, 1);
    }

    #[test]
    fn latest_fetch_result_is_shown() {
        let mut app = app_with(30, false);
        let _ = update::request_page(&mut app, PageRequest::new(1));

        let _ = app.update(Message::PageFetched {
            generation: app.generation,
            result: Ok(batch(10, 30)),
        });

        assert!(!app.page.is_loading);
        assert_eq!(app.page.items.len(), 10);
        assert_eq!(app.page.total_count, 30);
    }

    #[test]
    fn stale_fetch_result_is_dropped() {
        let mut app = app_with(30, false);
        let _ = update::request_page(&mut app, PageRequest::new(1));
        let stale = app.generation;
        let _ = update::request_page(&mut app, PageRequest::new(2));

        let _ = app.update(Message::PageFetched {
            generation: stale,
            result: Ok(batch(10, 30)),
        });

        assert!(app.page.is_loading);
        assert_eq!(app.current_page, PageNumber::new(2));
    }

    #[test]
    fn failed_fetch_degrades_to_empty_page() {
        let mut app = app_with(30, false);
        let _ = update::request_page(&mut app, PageRequest::new(1));

        let _ = app.update(Message::PageFetched {
            generation: app.generation,
            result: Err(Error::from(CatalogError::Unavailable("offline".into()))),
        });

        assert_eq!(app.page, AssetPage::empty());
    }

    #[test]
    fn create_request_leaves_page_untouched() {
        let mut app = app_with(0, true);
        app.page = AssetPage::empty();

        let _ = app.update(Message::AssetsTab(assets_tab::Message::CreateRequested));

        assert_eq!(app.page, AssetPage::empty());
        assert_eq!(app.generation, 0);
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let mut app = app_with(3, false);
        let _ = app.update(Message::SpinnerTick(Instant::now()));
        assert!(app.spinner_rotation > 0.0);

        app.page = AssetPage::empty();
        let before = app.spinner_rotation;
        let _ = app.update(Message::SpinnerTick(Instant::now()));
        assert_eq!(app.spinner_rotation, before);
    }

    #[test]
    fn permissions_come_from_config() {
        let app = app_with(0, true);
        assert!(crate::domain::has_capability(&app.permissions, "Create"));
    }

    #[test]
    fn missing_catalog_file_falls_back_to_empty_source() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = open_catalog(Some(dir.path().join("absent.toml")), &I18n::default());
        let batch = source
            .fetch_page(&crate::application::port::AssetQuery {
                request: PageRequest::new(1),
                page_size: PageSize::default(),
            })
            .expect("empty catalog answers");
        assert_eq!(batch.total_count, 0);
    }

    #[test]
    fn language_switch_is_applied_and_saved() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = app_with(3, false);
        app.i18n.set_locale("en-US".parse().expect("valid locale"));
        app.settings_dir = Some(dir.path().to_path_buf());

        let _ = app.update(Message::LanguageCycled);

        assert_eq!(app.i18n.current_locale().to_string(), "fr");
        assert_eq!(app.i18n.tr("assets-heading"), "Ressources");
        let saved = config::load_from_path(&dir.path().join(config::CONFIG_FILE))
            .expect("settings written");
        assert_eq!(saved.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn view_renders() {
        let app = app_with(3, false);
        let _element = app.view();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }
}
