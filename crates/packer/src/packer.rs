//! First-fit-decreasing order packer.

use crate::catalog::{BoxSpec, Catalog};
use crate::config::PackerConfig;
use boxpack_core::diagnostic::{Diagnostic, PackingObserver};
use boxpack_core::order::{Order, Product, ProductId};
use boxpack_core::result::{OrderResult, PackedBox};
use boxpack_core::solver::Solver;

/// Assigns each order's products to boxes from a catalog.
///
/// Per order, products are sorted by descending volume (ties keep input
/// order). Each product goes into the first already opened box it fits; when
/// none accepts it, the smallest catalog box that fits is opened. Decisions
/// are never revisited and fit checks ignore space already taken by other
/// products.
///
/// The packer holds no per-order state, so one instance can serve any number
/// of callers at once.
#[derive(Debug, Clone)]
pub struct Packer<'a> {
    catalog: &'a Catalog,
    config: PackerConfig,
}

/// A box opened while packing one order.
struct OpenBox<'a> {
    spec: &'a BoxSpec,
    product_ids: Vec<ProductId>,
}

impl<'a> OpenBox<'a> {
    fn open(spec: &'a BoxSpec, first: ProductId) -> Self {
        Self {
            spec,
            product_ids: vec![first],
        }
    }

    fn into_packed(self) -> PackedBox {
        PackedBox::new(self.spec.name(), self.product_ids)
    }
}

impl<'a> Packer<'a> {
    /// Creates a packer over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            config: PackerConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: PackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the catalog boxes are chosen from.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Packs a single order.
    pub fn pack_order(&self, order: &Order, observer: &mut dyn PackingObserver) -> OrderResult {
        let mut sorted: Vec<&Product> = order.products.iter().collect();
        // Stable: equal volumes keep input order
        sorted.sort_by(|a, b| b.volume().total_cmp(&a.volume()));

        let mut opened: Vec<OpenBox<'a>> = Vec::new();
        let mut result = OrderResult::new(order.order_id);

        for product in sorted {
            let dims = &product.dimensions;

            if let Some((index, open)) = opened
                .iter_mut()
                .enumerate()
                .find(|(_, open)| open.spec.accepts(dims))
            {
                open.product_ids.push(product.id);
                log::trace!(
                    "order {}: product {} placed in box #{} ({})",
                    order.order_id,
                    product.id,
                    index,
                    open.spec.name()
                );
                observer.on_product_placed(order.order_id, index, product.id);
                continue;
            }

            match self.catalog.smallest_fitting(dims) {
                Some(spec) => {
                    log::debug!(
                        "order {}: opened {} for product {} ({})",
                        order.order_id,
                        spec.name(),
                        product.id,
                        dims
                    );
                    observer.on_box_opened(order.order_id, spec.name(), product.id);
                    opened.push(OpenBox::open(spec, product.id));
                }
                None => {
                    observer.on_diagnostic(&Diagnostic::Unpackable {
                        order_id: order.order_id,
                        product_id: product.id,
                        dimensions: *dims,
                    });
                    if self.config.report_unpacked {
                        result.unpacked.push(product.id);
                    }
                }
            }
        }

        result.boxes = opened.into_iter().map(OpenBox::into_packed).collect();
        result
    }
}

impl Packer<'static> {
    /// Creates a packer over the standard catalog.
    pub fn standard() -> Self {
        Self::new(Catalog::standard())
    }
}

impl Default for Packer<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl Solver for Packer<'_> {
    fn process_orders_observed(
        &self,
        orders: &[Order],
        observer: &mut dyn PackingObserver,
    ) -> Vec<OrderResult> {
        orders
            .iter()
            .map(|order| self.pack_order(order, &mut *observer))
            .collect()
    }
}
