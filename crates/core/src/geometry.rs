//! Box dimensions, axis-aligned orientations and the fit predicate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Axis-aligned extent of a product or a box (height, width, length).
///
/// Field position carries no meaning for fitting: every comparison goes
/// through all orientations. Units are up to the caller as long as products
/// and boxes agree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    height: f64,
    width: f64,
    length: f64,
}

impl Dimensions {
    /// Creates dimensions from height, width and length.
    pub const fn new(height: f64, width: f64, length: f64) -> Self {
        Self {
            height,
            width,
            length,
        }
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the dimensions as `[height, width, length]`.
    pub fn as_array(&self) -> [f64; 3] {
        [self.height, self.width, self.length]
    }

    /// Returns height × width × length.
    pub fn volume(&self) -> f64 {
        self.height * self.width * self.length
    }

    /// Returns the three extents sorted from largest to smallest.
    pub fn sorted_desc(&self) -> [f64; 3] {
        let mut extents = self.as_array();
        extents.sort_by(|a, b| b.total_cmp(a));
        extents
    }

    /// Returns true if every extent is finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.as_array().iter().all(|d| d.is_finite() && *d > 0.0)
    }

    /// Returns the dimensions seen under the given orientation.
    pub fn rotated(&self, orientation: Orientation) -> Self {
        let extents = self.as_array();
        let [h, w, l] = orientation.axes();
        Self::new(extents[h], extents[w], extents[l])
    }

    /// Returns the six axis-aligned orientations of these dimensions.
    pub fn orientations(&self) -> impl Iterator<Item = (Orientation, Dimensions)> + '_ {
        Orientation::ALL.iter().map(move |o| (*o, self.rotated(*o)))
    }

    /// Checks that every extent is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.is_positive() {
            return Err(Error::InvalidDimensions(format!(
                "all dimensions must be positive, got {}",
                self
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.length)
    }
}

impl From<[f64; 3]> for Dimensions {
    fn from(extents: [f64; 3]) -> Self {
        Self::new(extents[0], extents[1], extents[2])
    }
}

/// One of the six axis-aligned orientations of a rectangular item.
///
/// Stored as the source axis (0 = height, 1 = width, 2 = length) that ends up
/// on each of the box's height, width and length axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    axes: [usize; 3],
}

impl Orientation {
    /// Original orientation.
    pub const IDENTITY: Orientation = Orientation { axes: [0, 1, 2] };

    /// All six orientations, identity first.
    pub const ALL: [Orientation; 6] = [
        Orientation { axes: [0, 1, 2] },
        Orientation { axes: [0, 2, 1] },
        Orientation { axes: [1, 0, 2] },
        Orientation { axes: [1, 2, 0] },
        Orientation { axes: [2, 0, 1] },
        Orientation { axes: [2, 1, 0] },
    ];

    /// Returns the source axis placed on each target axis.
    pub fn axes(&self) -> [usize; 3] {
        self.axes
    }

    /// Returns true for the original orientation.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Returns true if `product` fits inside `container` under some axis-aligned
/// rotation.
///
/// Both triples are sorted in descending order and compared element-wise;
/// equality counts as fitting. Non-positive or non-finite extents on either
/// side never fit.
pub fn fits(product: &Dimensions, container: &Dimensions) -> bool {
    if !product.is_positive() || !container.is_positive() {
        return false;
    }

    let product = product.sorted_desc();
    let container = container.sorted_desc();
    product.iter().zip(container.iter()).all(|(p, c)| p <= c)
}

/// Returns the first orientation (in [`Orientation::ALL`] order) under which
/// `product` fits `container` axis by axis.
///
/// `fitting_orientation(p, c).is_some()` always equals `fits(p, c)`.
pub fn fitting_orientation(product: &Dimensions, container: &Dimensions) -> Option<Orientation> {
    if !product.is_positive() || !container.is_positive() {
        return None;
    }

    let bounds = container.as_array();
    product
        .orientations()
        .find(|(_, rotated)| {
            rotated
                .as_array()
                .iter()
                .zip(bounds.iter())
                .all(|(p, c)| p <= c)
        })
        .map(|(orientation, _)| orientation)
}
