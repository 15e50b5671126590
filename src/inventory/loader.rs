use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::inventory::catalog::{Catalog, ItemRepository};
use crate::inventory::seed;
use crate::models::item::{Item, ItemError, NewItemRequest};

#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid item at position {index}: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: ItemError,
    },
}

/// Builds a catalog from item requests, validating each one in order.
pub fn catalog_from_requests(requests: Vec<NewItemRequest>) -> Result<Catalog, CatalogLoadError> {
    let mut catalog = Catalog::new();
    let mut seen = HashSet::new();

    for (index, request) in requests.into_iter().enumerate() {
        let item = Item::new(request).map_err(|source| CatalogLoadError::InvalidItem { index, source })?;
        if !seen.insert(item.id) {
            warn!("Duplicate item id {} at position {}; keeping both entries", item.id, index);
        }
        catalog.add(item);
    }

    Ok(catalog)
}

pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogLoadError> {
    let requests: Vec<NewItemRequest> = serde_json::from_str(json)?;
    catalog_from_requests(requests)
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    info!("Loading catalog from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&contents)?;
    info!("Catalog loaded with {} items", catalog.len());
    Ok(catalog)
}

/// Loads the catalog at `path`, or the built-in sample catalog when no path is given.
pub fn load_or_seed(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            debug!("No catalog path configured, using sample catalog");
            Ok(seed::sample_catalog())
        }
    }
}

pub fn export_catalog_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    let requests: Vec<NewItemRequest> = catalog.list_all().iter().map(Item::to_request).collect();
    serde_json::to_string_pretty(&requests)
}
