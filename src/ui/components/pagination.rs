// SPDX-License-Identifier: MPL-2.0
//! Number-based previous/next pagination control.
//!
//! [`Pagination`] only exists when there is more than one page worth of
//! items, so callers show the control exactly when `new` returns `Some`.
//! Selecting a page never fetches anything: it produces a [`PageRequest`]
//! that the caller maps into its own message.

use crate::domain::{PageNumber, PageRequest, PageSize};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Row, Text};
use iced::{Element, Length};

/// Pages shown on each side of the current page.
const WINDOW_RADIUS: u32 = 1;

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: u32, current: bool },
    /// Elided run of pages.
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: u32,
    total_pages: u32,
}

impl Pagination {
    /// Returns `None` when everything fits on one page, including zero or
    /// negative totals.
    ///
    /// A current page past the end is clamped to the last page.
    #[must_use]
    pub fn new(total_count: i64, page_size: PageSize, current: PageNumber) -> Option<Self> {
        if total_count <= i64::from(page_size.value()) {
            return None;
        }
        let total_pages = page_size.page_count(total_count);
        Some(Self {
            current: current.value().min(total_pages),
            total_pages,
        })
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn current(&self) -> PageNumber {
        PageNumber::new(self.current)
    }

    /// Request for page `page`, or `None` when it is out of range or
    /// already the current page.
    #[must_use]
    pub fn request_for(&self, page: u32) -> Option<PageRequest> {
        (page != self.current && (1..=self.total_pages).contains(&page))
            .then(|| PageRequest::new(page))
    }

    /// Request produced by pressing `link`. Gaps and the current page are
    /// inert.
    #[must_use]
    pub fn selectable(&self, link: PageLink) -> Option<PageRequest> {
        match link {
            PageLink::Page { number, .. } => self.request_for(number),
            PageLink::Gap => None,
        }
    }

    #[must_use]
    pub fn previous(&self) -> Option<PageRequest> {
        self.request_for(self.current.saturating_sub(1))
    }

    #[must_use]
    pub fn next(&self) -> Option<PageRequest> {
        self.request_for(self.current.saturating_add(1))
    }

    /// Page links windowed around the current page.
    ///
    /// The first and last pages are always present. A run of exactly one
    /// hidden page is shown rather than replaced by a gap.
    #[must_use]
    pub fn links(&self) -> Vec<PageLink> {
        let low = self.current.saturating_sub(WINDOW_RADIUS).max(1);
        let high = self
            .current
            .saturating_add(WINDOW_RADIUS)
            .min(self.total_pages);

        let mut anchors: Vec<u32> = Vec::with_capacity(5);
        anchors.push(1);
        anchors.extend(low..=high);
        anchors.push(self.total_pages);
        anchors.sort_unstable();
        anchors.dedup();

        let mut links = Vec::with_capacity(anchors.len() + 2);
        let mut previous: Option<u32> = None;
        for number in anchors {
            if let Some(prev) = previous {
                match number - prev {
                    1 => {}
                    2 => links.push(self.page_link(prev + 1)),
                    _ => links.push(PageLink::Gap),
                }
            }
            links.push(self.page_link(number));
            previous = Some(number);
        }
        links
    }

    fn page_link(&self, number: u32) -> PageLink {
        PageLink::Page {
            number,
            current: number == self.current,
        }
    }

    /// Renders the control. `on_select` turns a chosen page into the
    /// caller's message.
    pub fn view<'a, Message, F>(&self, i18n: &I18n, on_select: F) -> Element<'a, Message>
    where
        Message: Clone + 'a,
        F: Fn(PageRequest) -> Message,
    {
        let previous = button(text(format!("‹ {}", i18n.tr("pagination-previous"))))
            .on_press_maybe(self.previous().map(&on_select))
            .style(button_styles::page_link(false));

        let next = button(text(format!("{} ›", i18n.tr("pagination-next"))))
            .on_press_maybe(self.next().map(&on_select))
            .style(button_styles::page_link(false));

        let mut strip = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(previous);

        for link in self.links() {
            strip = match link {
                PageLink::Page { number, current } => strip.push(
                    button(
                        Text::new(number.to_string())
                            .size(typography::BODY)
                            .align_x(Horizontal::Center)
                            .width(Length::Fill),
                    )
                    .width(Length::Fixed(sizing::PAGE_LINK_WIDTH))
                    .on_press_maybe(self.selectable(link).map(&on_select))
                    .style(button_styles::page_link(current)),
                ),
                PageLink::Gap => strip.push(Text::new("…").size(typography::BODY)),
            };
        }

        let current = self.current.to_string();
        let total = self.total_pages.to_string();
        let caption = Text::new(i18n.tr_with_args(
            "pagination-page-of",
            &[("current", current.as_str()), ("total", total.as_str())],
        ))
        .size(typography::CAPTION);

        strip
            .push(next)
            .push(caption)
            .spacing(spacing::XS)
            .into()
    }
}
