// SPDX-License-Identifier: MPL-2.0
//! In-memory asset source backed by a TOML catalog document.
//!
//! The document is a list of `[[assets]]` tables. Keys follow the
//! `AssetSummary` field names; the camelCase spelling used by catalog APIs
//! (`fullyQualifiedName`, `serviceType`, ...) is accepted as well.
//!
//! ```toml
//! [[assets]]
//! id = "asset-001"
//! name = "dim_customer"
//! fully_qualified_name = "sample_data.ecommerce_db.shopify.dim_customer"
//! tags = ["Tier.Tier1", "PII.Sensitive"]
//! usage = 91.5
//! ```

use crate::application::port::{
    AssetBatch, AssetQuery, AssetSource, CatalogError, TagTierAnnotator, TierAnnotator,
};
use crate::domain::{AssetSummary, Tier, UsagePercentile};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

const SAMPLE_CATALOG: &str = include_str!("../../assets/catalog/sample.toml");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    assets: Vec<AssetRecord>,
}

#[derive(Debug, Deserialize)]
struct AssetRecord {
    id: String,
    name: String,
    #[serde(default, alias = "displayName")]
    display_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(alias = "fullyQualifiedName")]
    fully_qualified_name: String,
    #[serde(default)]
    service: Option<String>,
    #[serde(default, alias = "serviceType")]
    service_type: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    database: Option<String>,
    #[serde(default, alias = "databaseSchema")]
    database_schema: Option<String>,
    #[serde(default, alias = "indexType")]
    index_type: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    deleted: bool,
    #[serde(default)]
    tier: Option<u8>,
    #[serde(default, alias = "weeklyPercentileRank")]
    usage: Option<f64>,
}

impl From<AssetRecord> for AssetSummary {
    fn from(record: AssetRecord) -> Self {
        let mut asset = AssetSummary::new(record.id, record.name, record.fully_qualified_name);
        asset.display_name = record.display_name;
        asset.description = record.description;
        asset.service = record.service;
        asset.service_type = record.service_type;
        asset.owner = record.owner;
        asset.database = record.database;
        asset.database_schema = record.database_schema;
        asset.index_type = record.index_type;
        asset.tags = record.tags.into_iter().collect();
        asset.deleted = record.deleted;
        asset.tier = record.tier.and_then(Tier::new);
        asset.usage = record.usage.map(UsagePercentile::new);
        asset
    }
}

/// Asset source serving pages out of a fully loaded catalog.
#[derive(Clone)]
pub struct FixtureCatalog {
    assets: Vec<AssetSummary>,
    annotator: Arc<dyn TierAnnotator>,
}

impl fmt::Debug for FixtureCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureCatalog")
            .field("assets", &self.assets.len())
            .finish()
    }
}

impl FixtureCatalog {
    /// Builds a catalog from already constructed assets.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when two assets share an id.
    pub fn from_assets(assets: Vec<AssetSummary>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in &assets {
            if !seen.insert(asset.id.as_str()) {
                return Err(CatalogError::Malformed(format!(
                    "duplicate asset id '{}'",
                    asset.id
                )));
            }
        }

        Ok(Self {
            assets,
            annotator: Arc::new(TagTierAnnotator),
        })
    }

    /// Parses a TOML catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] on invalid TOML, missing required
    /// keys or duplicate ids.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            toml::from_str(content).map_err(|err| CatalogError::Malformed(err.to_string()))?;
        Self::from_assets(document.assets.into_iter().map(AssetSummary::from).collect())
    }

    /// Reads and parses a TOML catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the file does not exist,
    /// [`CatalogError::Io`] when it cannot be read, and the errors of
    /// [`FixtureCatalog::from_toml_str`] otherwise.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(path.display().to_string())
            } else {
                CatalogError::Io(err.to_string())
            }
        })?;
        let catalog = Self::from_toml_str(&content)?;
        log::info!(
            "loaded {} assets from {}",
            catalog.assets.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The demo catalog bundled with the application.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled document is malformed.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_toml_str(SAMPLE_CATALOG)
    }

    /// A catalog with no assets.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            assets: Vec::new(),
            annotator: Arc::new(TagTierAnnotator),
        }
    }

    /// Replaces the tier annotator applied to served assets.
    #[must_use]
    pub fn with_annotator(mut self, annotator: impl TierAnnotator + 'static) -> Self {
        self.annotator = Arc::new(annotator);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSource for FixtureCatalog {
    fn fetch_page(&self, query: &AssetQuery) -> Result<AssetBatch, CatalogError> {
        let total_count = i64::try_from(self.assets.len()).unwrap_or(i64::MAX);
        let offset = query.request.page_number.offset(query.page_size);

        let items = self
            .assets
            .iter()
            .skip(offset)
            .take(query.page_size.value() as usize)
            .cloned()
            .map(|mut asset| {
                self.annotator.annotate(&mut asset);
                asset
            })
            .collect();

        Ok(AssetBatch { items, total_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageRequest, PageSize};

    fn query(page: u32, size: u32) -> AssetQuery {
        AssetQuery {
            request: PageRequest::new(page),
            page_size: PageSize::new(size),
        }
    }

    fn catalog_of(count: usize) -> FixtureCatalog {
        let assets = (0..count)
            .map(|i| AssetSummary::new(format!("id-{i}"), format!("t{i}"), format!("svc.t{i}")))
            .collect();
        FixtureCatalog::from_assets(assets).expect("unique ids")
    }

    #[test]
    fn pages_are_sliced_in_order() {
        let catalog = catalog_of(23);

        let first = catalog.fetch_page(&query(1, 10)).unwrap();
        assert_eq!(first.total_count, 23);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].name, "t0");

        let last = catalog.fetch_page(&query(3, 10)).unwrap();
        assert_eq!(last.items.len(), 3);
        assert_eq!(last.items[0].name, "t20");
    }

    #[test]
    fn page_past_the_end_is_empty_with_real_total() {
        let catalog = catalog_of(5);
        let batch = catalog.fetch_page(&query(4, 10)).unwrap();
        assert!(batch.items.is_empty());
        assert_eq!(batch.total_count, 5);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let assets = vec![
            AssetSummary::new("same", "a", "svc.a"),
            AssetSummary::new("same", "b", "svc.b"),
        ];
        assert!(matches!(
            FixtureCatalog::from_assets(assets),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn served_assets_are_annotated() {
        let catalog = FixtureCatalog::from_toml_str(
            r#"
            [[assets]]
            id = "1"
            name = "orders"
            fully_qualified_name = "svc.orders"
            tags = ["Tier.Tier2"]
            "#,
        )
        .unwrap();

        let batch = catalog.fetch_page(&query(1, 10)).unwrap();
        assert_eq!(batch.items[0].tier, Tier::new(2));
    }

    #[test]
    fn custom_annotator_replaces_default() {
        struct AlwaysTierOne;
        impl TierAnnotator for AlwaysTierOne {
            fn annotate(&self, asset: &mut AssetSummary) {
                asset.tier = Tier::new(1);
            }
        }

        let catalog = catalog_of(1).with_annotator(AlwaysTierOne);
        let batch = catalog.fetch_page(&query(1, 10)).unwrap();
        assert_eq!(batch.items[0].tier, Tier::new(1));
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let catalog = FixtureCatalog::from_toml_str(
            r#"
            [[assets]]
            id = "1"
            name = "orders"
            fullyQualifiedName = "svc.orders"
            serviceType = "Postgres"
            weeklyPercentileRank = 40.0
            "#,
        )
        .unwrap();

        let batch = catalog.fetch_page(&query(1, 10)).unwrap();
        let asset = &batch.items[0];
        assert_eq!(asset.fully_qualified_name, "svc.orders");
        assert_eq!(asset.service_type_label(), "Postgres");
        assert_eq!(asset.usage.map(UsagePercentile::value), Some(40.0));
    }

    #[test]
    fn missing_required_key_is_malformed() {
        let result = FixtureCatalog::from_toml_str("[[assets]]\nid = \"1\"\n");
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = FixtureCatalog::from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn sample_catalog_spans_several_pages() {
        let catalog = FixtureCatalog::sample().expect("bundled catalog parses");
        assert!(catalog.len() > PageSize::default().value() as usize);
    }
}
