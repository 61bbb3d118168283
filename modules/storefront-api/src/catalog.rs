use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use storefront_common::{CatalogItem, StorefrontError};

/// One imported catalog file: products grouped by category.
#[derive(Debug, Deserialize)]
struct ImportFile {
    #[serde(default)]
    categories: Vec<ImportCategory>,
}

#[derive(Debug, Deserialize)]
struct ImportCategory {
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

/// Load every `*.json` import under `dir` into one flat snapshot.
///
/// Never fails: a missing directory gives an empty catalog, unreadable files
/// are skipped with a warning and malformed items are dropped. Files are read
/// in path order so the encounter order (and therefore search tie-breaking)
/// is stable between runs.
pub fn load_catalog(dir: &Path) -> Vec<CatalogItem> {
    let mut paths: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(e) => {
            warn!(
                dir = %dir.display(),
                error = %e,
                "Catalog directory unreadable, serving empty catalog"
            );
            return Vec::new();
        }
    };
    paths.sort();

    let mut items = Vec::new();
    for path in &paths {
        match read_catalog_file(path) {
            Ok(mut file_items) => items.append(&mut file_items),
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping catalog file"),
        }
    }

    info!(files = paths.len(), items = items.len(), "Catalog loaded");
    items
}

fn read_catalog_file(path: &Path) -> Result<Vec<CatalogItem>, StorefrontError> {
    let raw = fs::read_to_string(path).map_err(|e| StorefrontError::Catalog(e.to_string()))?;
    parse_catalog(&raw)
}

/// Parse one import document. Items that do not deserialize are skipped.
pub fn parse_catalog(raw: &str) -> Result<Vec<CatalogItem>, StorefrontError> {
    let file: ImportFile =
        serde_json::from_str(raw).map_err(|e| StorefrontError::Catalog(e.to_string()))?;

    let mut items = Vec::new();
    for category in file.categories {
        let category_slug = category.slug.or(category.name);
        for value in category.items {
            match serde_json::from_value::<CatalogItem>(value) {
                Ok(mut item) => {
                    if item.category.is_none() {
                        item.category = category_slug.clone();
                    }
                    items.push(item);
                }
                Err(e) => debug!(error = %e, "Skipping malformed catalog item"),
            }
        }
    }
    Ok(items)
}
