//! Standard box sizes available for opening.

use std::collections::HashSet;
use std::sync::OnceLock;

use boxpack_core::geometry::{fits, Dimensions};
use boxpack_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A catalog entry: a named standard box size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSpec {
    /// Unique name.
    name: String,

    /// Inner extents.
    #[cfg_attr(feature = "serde", serde(flatten))]
    dimensions: Dimensions,
}

impl BoxSpec {
    /// Creates a box spec from its name and height, width, length.
    pub fn new(name: impl Into<String>, height: f64, width: f64, length: f64) -> Self {
        Self {
            name: name.into(),
            dimensions: Dimensions::new(height, width, length),
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimensions.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns height × width × length.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Returns true if a product with the given extents fits this box.
    pub fn accepts(&self, product: &Dimensions) -> bool {
        fits(product, &self.dimensions)
    }

    /// Checks name and dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidCatalog("box name must not be empty".into()));
        }
        if !self.dimensions.is_positive() {
            return Err(Error::InvalidCatalog(format!(
                "all dimensions of '{}' must be positive, got {}",
                self.name, self.dimensions
            )));
        }
        Ok(())
    }
}

/// Read-only set of box sizes, kept in ascending volume order.
///
/// Entries of equal volume keep their declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    specs: Vec<BoxSpec>,
}

impl Catalog {
    /// Builds a catalog from the given entries.
    ///
    /// Rejects an empty list, blank or duplicate names and non-positive
    /// dimensions.
    pub fn from_specs(specs: impl IntoIterator<Item = BoxSpec>) -> Result<Self> {
        let mut specs: Vec<BoxSpec> = specs.into_iter().collect();
        if specs.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        {
            let mut names = HashSet::with_capacity(specs.len());
            for spec in &specs {
                spec.validate()?;
                if !names.insert(spec.name.as_str()) {
                    return Err(Error::DuplicateBoxName(spec.name.clone()));
                }
            }
        }

        specs.sort_by(|a, b| a.volume().total_cmp(&b.volume()));
        Ok(Self { specs })
    }

    /// Returns the process-wide standard catalog.
    ///
    /// | name  | height | width | length |
    /// |-------|--------|-------|--------|
    /// | Box 1 | 30     | 40    | 80     |
    /// | Box 2 | 50     | 50    | 40     |
    /// | Box 3 | 50     | 80    | 60     |
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| Catalog {
            specs: standard_specs(),
        })
    }

    /// Returns the entries in ascending volume order.
    pub fn specs(&self) -> &[BoxSpec] {
        &self.specs
    }

    /// Iterates over the entries in ascending volume order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoxSpec> {
        self.specs.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&BoxSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Returns the smallest entry, by volume, that the product fits.
    pub fn smallest_fitting(&self, product: &Dimensions) -> Option<&BoxSpec> {
        self.specs.iter().find(|s| s.accepts(product))
    }

    /// Returns the entry with the greatest volume.
    pub fn largest(&self) -> Option<&BoxSpec> {
        self.specs.last()
    }

    /// Returns true if at least one entry can hold the product.
    pub fn can_pack(&self, product: &Dimensions) -> bool {
        self.smallest_fitting(product).is_some()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BoxSpec;
    type IntoIter = std::slice::Iter<'a, BoxSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Standard entries, already in ascending volume order
/// (96 000, 100 000, 240 000).
fn standard_specs() -> Vec<BoxSpec> {
    vec![
        BoxSpec::new("Box 1", 30.0, 40.0, 80.0),
        BoxSpec::new("Box 2", 50.0, 50.0, 40.0),
        BoxSpec::new("Box 3", 50.0, 80.0, 60.0),
    ]
}
