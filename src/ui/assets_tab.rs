// SPDX-License-Identifier: MPL-2.0
//! Assets tab: one page of catalog assets.
//!
//! The tab is a pure function of its [`Props`]. It shows exactly one of a
//! loading indicator, the list of asset cards, or an empty-state placeholder.
//! Page selection and the "add asset" call to action are reported to the
//! parent as [`Event`]s; fetching is the parent's job.

use crate::domain::{
    has_capability, AssetPage, AssetSummary, Capability, PageNumber, PageRequest, PageSize,
    PermissionSet,
};
use crate::i18n::fluent::I18n;
use crate::ui::components::{asset_card, EmptyState, Pagination};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::LoadingIndicator;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{scrollable, Column, Container, Text};
use iced::{Element, Length};

/// Documentation linked from the empty state.
pub const GLOSSARY_DOCS_URL: &str =
    "https://docs.open-metadata.org/how-to-guides/data-governance/glossary";

/// Inputs of the tab. Borrowed from the parent for the duration of a render.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    pub page: &'a AssetPage,
    pub current_page: PageNumber,
    pub page_size: PageSize,
    pub permissions: &'a PermissionSet,
}

/// Contextual data needed to render the tab.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Angle of the loading indicator, advanced by the parent.
    pub spinner_rotation: f32,
}

/// Which of the three mutually exclusive views is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a> {
    Loading,
    Empty {
        can_create: bool,
    },
    Populated {
        items: &'a [AssetSummary],
        pagination: Option<Pagination>,
    },
}

impl<'a> ViewState<'a> {
    /// Branches on the props. Items are ignored while loading.
    #[must_use]
    pub fn derive(props: &Props<'a>) -> Self {
        let page = props.page;
        if page.is_loading {
            return Self::Loading;
        }
        if page.items.is_empty() {
            return Self::Empty {
                can_create: has_capability(props.permissions, Capability::Create.name()),
            };
        }
        Self::Populated {
            items: &page.items,
            pagination: Pagination::new(page.total_count, props.page_size, props.current_page),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    PageSelected(PageRequest),
    CreateRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PageChange(PageRequest),
    CreateAsset,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::PageSelected(request) => Event::PageChange(*request),
        Message::CreateRequested => Event::CreateAsset,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(props: Props<'a>, ctx: ViewContext<'_>) -> Element<'a, Message> {
    match ViewState::derive(&props) {
        ViewState::Loading => loading_view(&ctx),
        ViewState::Empty { can_create } => empty_view(&ctx, can_create),
        ViewState::Populated { items, pagination } => populated_view(&ctx, items, pagination),
    }
}

fn loading_view<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(LoadingIndicator::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element())
        .push(Text::new(ctx.i18n.tr("assets-loading")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn empty_view<'a>(ctx: &ViewContext<'_>, can_create: bool) -> Element<'a, Message> {
    let entity = ctx.i18n.tr("label-asset");
    let mut placeholder = EmptyState::new()
        .heading(entity.clone())
        .message(ctx.i18n.tr("assets-empty-message"))
        .doc_hint(
            ctx.i18n
                .tr_with_args("assets-empty-doc", &[("url", GLOSSARY_DOCS_URL)]),
        );

    if can_create {
        placeholder = placeholder.action(
            ctx.i18n.tr_with_args("add-entity", &[("entity", entity.as_str())]),
            Message::CreateRequested,
        );
    }

    Container::new(placeholder.view())
        .width(Length::Fill)
        .padding([spacing::XL, 0.0])
        .into()
}

fn populated_view<'a>(
    ctx: &ViewContext<'_>,
    items: &'a [AssetSummary],
    pagination: Option<Pagination>,
) -> Element<'a, Message> {
    let cards = items.iter().fold(
        Column::new().spacing(spacing::SM).width(Length::Fill),
        |column, asset| column.push(asset_card::view(asset, ctx.i18n)),
    );

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(cards);

    if let Some(pagination) = pagination {
        content = content.push(
            Container::new(pagination.view(ctx.i18n, Message::PageSelected))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );
    }

    scrollable(Container::new(content).padding(spacing::MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
