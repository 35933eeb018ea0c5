// SPDX-License-Identifier: MPL-2.0
//! Catalog asset projections.
//!
//! An [`AssetSummary`] is the display-oriented view of a catalog entity
//! (table, topic, dashboard, ...). It is built by a data source and may be
//! enriched by an annotator before it reaches the UI; the UI never mutates it.

use std::collections::BTreeSet;
use std::fmt;

/// Placeholder shown when an asset carries no service type.
pub const MISSING_SERVICE_TYPE: &str = "--";

/// Prefix of the classification holding tier tags (`Tier.Tier1`, ...).
pub const TIER_TAG_PREFIX: &str = "Tier.";

// =============================================================================
// AssetId
// =============================================================================

/// Opaque catalog identifier, unique within a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Tier
// =============================================================================

/// Importance ranking attached to an asset. Lower ranks are more important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tier(u8);

impl Tier {
    /// Creates a tier from its rank, rejecting rank 0.
    #[must_use]
    pub fn new(rank: u8) -> Option<Self> {
        (rank > 0).then_some(Self(rank))
    }

    /// Parses a tier tag such as `Tier.Tier2`.
    ///
    /// Returns `None` for tags outside the tier classification or with a
    /// malformed rank.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let label = tag.strip_prefix(TIER_TAG_PREFIX)?;
        let rank = label.strip_prefix("Tier")?;
        rank.parse::<u8>().ok().and_then(Self::new)
    }

    #[must_use]
    pub fn rank(self) -> u8 {
        self.0
    }

    /// Returns `true` when the tag belongs to the tier classification.
    #[must_use]
    pub fn is_tier_tag(tag: &str) -> bool {
        tag.starts_with(TIER_TAG_PREFIX)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier{}", self.0)
    }
}

// =============================================================================
// UsagePercentile
// =============================================================================

/// Weekly usage percentile rank, guaranteed to be within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UsagePercentile(f64);

impl UsagePercentile {
    /// Creates a percentile, clamping to the valid range. NaN maps to 0.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 100.0))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for UsagePercentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

// =============================================================================
// AssetSummary
// =============================================================================

/// Display projection of a catalog entity.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSummary {
    pub id: AssetId,
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub fully_qualified_name: String,
    pub service: Option<String>,
    pub service_type: Option<String>,
    pub owner: Option<String>,
    pub database: Option<String>,
    pub database_schema: Option<String>,
    pub index_type: Option<String>,
    pub tags: BTreeSet<String>,
    pub deleted: bool,
    /// Computed by a tier annotator, never by the viewer.
    pub tier: Option<Tier>,
    pub usage: Option<UsagePercentile>,
}

impl AssetSummary {
    /// Creates a summary with only the identifying fields set.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        fully_qualified_name: impl Into<String>,
    ) -> Self {
        Self {
            id: AssetId::new(id),
            name: name.into(),
            display_name: None,
            description: None,
            fully_qualified_name: fully_qualified_name.into(),
            service: None,
            service_type: None,
            owner: None,
            database: None,
            database_schema: None,
            index_type: None,
            tags: BTreeSet::new(),
            deleted: false,
            tier: None,
            usage: None,
        }
    }

    /// Name shown on cards: the display name when set, else the raw name.
    #[must_use]
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display) if !display.trim().is_empty() => display,
            _ => &self.name,
        }
    }

    /// Service type, or [`MISSING_SERVICE_TYPE`] when absent.
    #[must_use]
    pub fn service_type_label(&self) -> &str {
        match self.service_type.as_deref() {
            Some(kind) if !kind.trim().is_empty() => kind,
            _ => MISSING_SERVICE_TYPE,
        }
    }

    /// Tags excluding the tier classification, which is shown separately.
    pub fn display_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !Tier::is_tier_tag(tag))
    }
}
