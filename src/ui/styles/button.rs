// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Outlined button with a transparent fill, used for calls to action placed
/// on top of panels.
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let accent = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: accent,
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for a page-number link. The current page is highlighted and the
/// others stay flat until hovered.
pub fn page_link(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.palette().text;

        let (background, text_color, edge) = match (selected, status) {
            (true, _) => (palette::PRIMARY_500, WHITE, palette::PRIMARY_600),
            (false, button::Status::Hovered) => {
                (palette::PRIMARY_100, palette::PRIMARY_600, palette::PRIMARY_400)
            }
            (false, button::Status::Disabled) => {
                (Color::TRANSPARENT, palette::GRAY_400, palette::GRAY_200)
            }
            (false, _) => (Color::TRANSPARENT, text, palette::GRAY_200),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: edge,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_page_link_is_filled() {
        let style = page_link(true)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn idle_page_link_is_transparent() {
        let style = page_link(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(Color::TRANSPARENT)));
    }

    #[test]
    fn ghost_button_has_no_fill() {
        let style = ghost(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(Color::TRANSPARENT)));
        assert_eq!(style.text_color, palette::PRIMARY_500);
    }
}
