// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::{AssetPage, PageNumber, PageSize, PermissionSet};
use crate::i18n::fluent::I18n;
use crate::ui::assets_tab::{self, Props, ViewContext as AssetsTabViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::{
    alignment::Vertical,
    widget::{button, rule, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a AssetPage,
    pub current_page: PageNumber,
    pub page_size: PageSize,
    pub permissions: &'a PermissionSet,
    pub spinner_rotation: f32,
}

/// Renders the header and the assets tab.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("assets-heading")).size(typography::TITLE_LG));

    // The count is unknown until the first page arrives
    if !ctx.page.is_loading {
        let count = ctx.page.total_count.max(0).to_string();
        header = header.push(
            Text::new(
                ctx.i18n
                    .tr_with_args("assets-count", &[("count", count.as_str())]),
            )
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            }),
        );
    }

    let locale = ctx.i18n.current_locale().to_string();
    let language = button(
        Text::new(
            ctx.i18n
                .tr_with_args("language-toggle", &[("locale", locale.as_str())]),
        )
        .size(typography::BODY_SM),
    )
    .on_press_maybe(
        ctx.i18n
            .next_locale()
            .map(|_| Message::LanguageCycled),
    )
    .style(button_styles::ghost);
    header = header.push(Space::new().width(Length::Fill)).push(language);

    let tab = assets_tab::view(
        Props {
            page: ctx.page,
            current_page: ctx.current_page,
            page_size: ctx.page_size,
            permissions: ctx.permissions,
        },
        AssetsTabViewContext {
            i18n: ctx.i18n,
            spinner_rotation: ctx.spinner_rotation,
        },
    )
    .map(Message::AssetsTab);

    let column = Column::new()
        .spacing(spacing::SM)
        .push(Container::new(header).padding([spacing::MD, spacing::LG]))
        .push(rule::horizontal(1))
        .push(
            Container::new(tab)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
