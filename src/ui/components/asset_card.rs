// SPDX-License-Identifier: MPL-2.0
//! Card rendering a single [`AssetSummary`].

use crate::domain::AssetSummary;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::alignment::Vertical;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// One `label: value` pair of the metadata row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub label: String,
    pub value: String,
}

/// Metadata shown under the description, in display order.
///
/// Absent values are skipped, except the service type which always shows.
#[must_use]
pub fn metadata_entries(asset: &AssetSummary, i18n: &I18n) -> Vec<MetadataEntry> {
    let entry = |key: &str, value: String| MetadataEntry {
        label: i18n.tr(key),
        value,
    };

    let mut entries = Vec::with_capacity(8);
    if let Some(owner) = &asset.owner {
        entries.push(entry("asset-owner", owner.clone()));
    }
    if let Some(tier) = asset.tier {
        entries.push(entry("asset-tier", tier.to_string()));
    }
    if let Some(usage) = asset.usage {
        entries.push(entry("asset-usage", usage.to_string()));
    }
    entries.push(entry(
        "asset-service-type",
        asset.service_type_label().to_string(),
    ));
    if let Some(service) = &asset.service {
        entries.push(entry("asset-service", service.clone()));
    }
    if let Some(database) = &asset.database {
        entries.push(entry("asset-database", database.clone()));
    }
    if let Some(schema) = &asset.database_schema {
        entries.push(entry("asset-schema", schema.clone()));
    }
    if let Some(index_type) = &asset.index_type {
        entries.push(entry("asset-index-type", index_type.clone()));
    }
    entries
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().secondary.base.text),
    }
}

fn pill<'a, Message: 'a>(label: String, accent: iced::Color) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(container_styles::pill(accent))
        .into()
}

pub fn view<'a, Message: 'a>(asset: &AssetSummary, i18n: &I18n) -> Element<'a, Message> {
    let mut title = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(asset.label().to_string()).size(typography::TITLE_SM));
    if asset.deleted {
        title = title.push(pill(i18n.tr("asset-deleted-badge"), palette::ERROR_500));
    }

    let fqn = Text::new(asset.fully_qualified_name.clone())
        .size(typography::BODY_SM)
        .style(secondary_text);

    let description: Element<'a, Message> = match asset.description.as_deref() {
        Some(description) if !description.trim().is_empty() => {
            Text::new(description.to_string())
                .size(typography::BODY)
                .into()
        }
        _ => Text::new(i18n.tr("asset-no-description"))
            .size(typography::BODY)
            .style(secondary_text)
            .into(),
    };

    let metadata = metadata_entries(asset, i18n).into_iter().fold(
        Row::new().spacing(spacing::MD),
        |row, MetadataEntry { label, value }| {
            row.push(
                Text::new(format!("{label}: {value}"))
                    .size(typography::BODY_SM)
                    .style(secondary_text),
            )
        },
    );

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(fqn)
        .push(description)
        .push(metadata.wrap());

    let tags: Vec<&str> = asset.display_tags().collect();
    if !tags.is_empty() {
        let tag_row = tags.into_iter().fold(
            Row::new().spacing(spacing::XXS),
            |row, tag| row.push(pill(tag.to_string(), palette::PRIMARY_500)),
        );
        content = content.push(tag_row.wrap());
    }

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CARD_MAX_WIDTH)
        .padding(spacing::MD)
        .style(container_styles::card)
        .into()
}
