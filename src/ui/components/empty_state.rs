// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown when a listing has nothing to display.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::empty_state::EmptyState;
//!
//! EmptyState::new()
//!     .heading("Assets")
//!     .message("No assets found.")
//!     .doc_hint("See the documentation")
//!     .action("Add Asset", Message::CreateRequested)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, rule, text, Column, Container, Text};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone)]
pub struct EmptyState<Message> {
    heading: Option<String>,
    message: Option<String>,
    doc_hint: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message> Default for EmptyState<Message> {
    fn default() -> Self {
        Self {
            heading: None,
            message: None,
            doc_hint: None,
            action: None,
        }
    }
}

impl<Message: Clone + 'static> EmptyState<Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Secondary line pointing at documentation.
    #[must_use]
    pub fn doc_hint(mut self, hint: impl Into<String>) -> Self {
        self.doc_hint = Some(hint.into());
        self
    }

    /// Call-to-action button. Without it the placeholder is informational.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .width(Length::Fill);

        if let Some(heading) = self.heading {
            content = content.push(
                Text::new(heading)
                    .size(typography::TITLE_SM)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::PRIMARY_500),
                    }),
            );
        }

        if let Some(message) = self.message {
            content = content.push(
                Text::new(message)
                    .size(typography::BODY)
                    .align_x(Horizontal::Center),
            );
        }

        if let Some(hint) = self.doc_hint {
            content = content.push(rule::horizontal(1)).push(
                Text::new(hint)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    }),
            );
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                Container::new(
                    button(Text::new(label).size(typography::BODY))
                        .on_press(message)
                        .style(button_styles::ghost),
                )
                .padding(spacing::XS),
            );
        }

        Container::new(
            Container::new(content)
                .width(Length::Fill)
                .max_width(sizing::EMPTY_STATE_MAX_WIDTH)
                .padding(spacing::LG)
                .style(container_styles::panel),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .into()
    }
}
