//! Diagnostics raised while packing and the observer that receives them.

use crate::geometry::Dimensions;
use crate::order::{OrderId, ProductId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-fatal condition encountered while packing an order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum Diagnostic {
    /// No catalog box can hold the product under any rotation.
    Unpackable {
        /// Order the product belongs to.
        order_id: OrderId,
        /// The dropped product.
        product_id: ProductId,
        /// Extents of the dropped product.
        dimensions: Dimensions,
    },
}

impl Diagnostic {
    /// Returns the order the diagnostic refers to.
    pub fn order_id(&self) -> OrderId {
        match self {
            Self::Unpackable { order_id, .. } => *order_id,
        }
    }

    /// Returns the product the diagnostic refers to.
    pub fn product_id(&self) -> ProductId {
        match self {
            Self::Unpackable { product_id, .. } => *product_id,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unpackable {
                order_id,
                product_id,
                dimensions,
            } => write!(
                f,
                "product {} ({}) of order {} does not fit any box",
                product_id, dimensions, order_id
            ),
        }
    }
}

/// Receives packing events without influencing any decision.
pub trait PackingObserver {
    /// Called when a new box is opened for `product_id`.
    fn on_box_opened(&mut self, _order_id: OrderId, _box_name: &str, _product_id: ProductId) {}

    /// Called when a product lands in an already opened box.
    fn on_product_placed(&mut self, _order_id: OrderId, _box_index: usize, _product_id: ProductId) {
    }

    /// Called for every diagnostic, in processing order.
    fn on_diagnostic(&mut self, diagnostic: &Diagnostic);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PackingObserver for NoopObserver {
    fn on_diagnostic(&mut self, _diagnostic: &Diagnostic) {}
}

/// Observer that keeps every diagnostic it receives.
#[derive(Debug, Clone, Default)]
pub struct CollectingObserver {
    /// Diagnostics in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingObserver {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the diagnostics raised for one order.
    pub fn for_order(&self, order_id: OrderId) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics
            .iter()
            .filter(move |d| d.order_id() == order_id)
    }
}

impl PackingObserver for CollectingObserver {
    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

impl<O: PackingObserver + ?Sized> PackingObserver for &mut O {
    fn on_box_opened(&mut self, order_id: OrderId, box_name: &str, product_id: ProductId) {
        (**self).on_box_opened(order_id, box_name, product_id);
    }

    fn on_product_placed(&mut self, order_id: OrderId, box_index: usize, product_id: ProductId) {
        (**self).on_product_placed(order_id, box_index, product_id);
    }

    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        (**self).on_diagnostic(diagnostic);
    }
}
