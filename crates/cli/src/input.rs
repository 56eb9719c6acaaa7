//! Reading orders and catalogs from disk.

use anyhow::Context;
use boxpack_core::Order;
use boxpack_packer::{Catalog, CatalogFile};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Accepted layouts of an orders file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OrdersFile {
    Orders(Vec<Order>),
    Wrapped { orders: Vec<Order> },
}

/// Parses orders from a JSON array or an `{ "orders": [...] }` object.
pub fn parse_orders(json: &str) -> anyhow::Result<Vec<Order>> {
    let file: OrdersFile = serde_json::from_str(json).context("Failed to parse orders JSON")?;
    Ok(match file {
        OrdersFile::Orders(orders) | OrdersFile::Wrapped { orders } => orders,
    })
}

/// Reads orders from a file, or from stdin when `path` is `-`.
pub fn read_orders(path: &Path) -> anyhow::Result<Vec<Order>> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read orders from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    parse_orders(&content)
}

/// Loads a catalog file, falling back to the standard catalog.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            let file = CatalogFile::from_path(path)?;
            let catalog = Catalog::try_from(file)
                .with_context(|| format!("Invalid catalog in {}", path.display()))?;
            log::info!("loaded {} boxes from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => Ok(Catalog::standard().clone()),
    }
}
