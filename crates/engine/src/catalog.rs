//! Product catalog loading.
//!
//! The catalog is reference data, not state: it seeds `ShopState::products`
//! when a store opens and is never written back. A default catalog is
//! compiled into the binary; a JSON file can replace it via
//! [`StoreConfig::catalog_path`](crate::config::StoreConfig).

use std::collections::HashSet;
use std::path::Path;

use fashionista_core::{Product, ProductId};
use thiserror::Error;

/// The product set compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../content/products.json");

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Load products from a JSON catalog file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or is not a valid
/// product array.
pub fn load_products(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
    let products = parse_catalog(&raw)?;
    tracing::info!(
        count = products.len(),
        path = %path.display(),
        "Loaded product catalog"
    );
    Ok(products)
}

/// The built-in product set.
///
/// # Errors
///
/// Returns `CatalogError` only if the compiled-in catalog is malformed,
/// which the tests rule out.
pub fn builtin_products() -> Result<Vec<Product>, CatalogError> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Parse a catalog document: a JSON array of products, ordered by id.
///
/// Later entries with an already-seen id are dropped with a warning; the
/// rest of the catalog still loads.
fn parse_catalog(raw: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> =
        serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
    let mut unique: Vec<Product> = Vec::with_capacity(products.len());
    for product in products {
        if seen.insert(product.id) {
            unique.push(product);
        } else {
            tracing::warn!(id = product.id.get(), "Skipping duplicate product id in catalog");
        }
    }
    unique.sort_by_key(|product| product.id);
    Ok(unique)
}
