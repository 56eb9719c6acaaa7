//! Packer configuration and catalog files.

#[cfg(feature = "serde")]
use crate::catalog::{BoxSpec, Catalog};
#[cfg(feature = "serde")]
use boxpack_core::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packer configuration.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PackerConfig {
    /// List unpackable products in `OrderResult::unpacked`.
    ///
    /// When disabled they are only reported to the observer.
    pub report_unpacked: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            report_unpacked: true,
        }
    }
}

impl PackerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether unpackable products are listed in the result.
    pub fn with_report_unpacked(mut self, enabled: bool) -> Self {
        self.report_unpacked = enabled;
        self
    }
}

/// On-disk catalog definition.
///
/// ```json
/// { "boxes": [ { "name": "Small", "height": 10, "width": 20, "length": 30 } ] }
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Catalog entries in declaration order.
    pub boxes: Vec<BoxSpec>,
}

#[cfg(feature = "serde")]
impl CatalogFile {
    /// Parses a catalog definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Reads and parses a catalog definition from a file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidCatalog(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

#[cfg(feature = "serde")]
impl From<&Catalog> for CatalogFile {
    fn from(catalog: &Catalog) -> Self {
        Self {
            boxes: catalog.specs().to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<CatalogFile> for Catalog {
    type Error = Error;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Catalog::from_specs(file.boxes)
    }
}
