//! Products and orders as supplied by the caller.

use std::collections::HashSet;

use crate::geometry::Dimensions;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a product, unique within its order.
pub type ProductId = i64;

/// Identifier of an order.
pub type OrderId = i64;

/// A rectangular product to be packed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,

    /// Product extents.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub dimensions: Dimensions,
}

impl Product {
    /// Creates a product from its id and height, width, length.
    pub fn new(id: ProductId, height: f64, width: f64, length: f64) -> Self {
        Self {
            id,
            dimensions: Dimensions::new(height, width, length),
        }
    }

    /// Returns the product volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Checks that the product has positive, finite dimensions.
    pub fn validate(&self) -> Result<()> {
        self.dimensions.validate().map_err(|_| {
            Error::InvalidDimensions(format!(
                "product {} has non-positive dimensions {}",
                self.id, self.dimensions
            ))
        })
    }
}

/// A batch entry: one order and the products it contains.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Order {
    /// Order identifier.
    pub order_id: OrderId,

    /// Products in caller order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub products: Vec<Product>,
}

impl Order {
    /// Creates an order with the given products.
    pub fn new(order_id: OrderId, products: Vec<Product>) -> Self {
        Self { order_id, products }
    }

    /// Creates an order without products.
    pub fn empty(order_id: OrderId) -> Self {
        Self::new(order_id, Vec::new())
    }

    /// Appends a product.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Returns true if the order has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Checks product dimensions and product id uniqueness.
    ///
    /// Packing never requires this: invalid products are simply unpackable.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.products.len());
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(Error::InvalidOrder(format!(
                    "order {} contains product {} more than once",
                    self.order_id, product.id
                )));
            }
            product.validate().map_err(|e| {
                Error::InvalidOrder(format!("order {}: {}", self.order_id, e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_product_volume() {
        let product = Product::new(1, 10.0, 20.0, 30.0);
        assert_relative_eq!(product.volume(), 6000.0, epsilon = 0.001);
    }

    #[test]
    fn test_order_builder() {
        let order = Order::empty(7)
            .with_product(Product::new(1, 1.0, 1.0, 1.0))
            .with_product(Product::new(2, 2.0, 2.0, 2.0));

        assert_eq!(order.order_id, 7);
        assert_eq!(order.products.len(), 2);
        assert!(!order.is_empty());
    }

    #[test]
    fn test_validation() {
        let valid = Order::new(1, vec![Product::new(1, 10.0, 10.0, 10.0)]);
        assert!(valid.validate().is_ok());

        let duplicate = Order::new(
            2,
            vec![
                Product::new(1, 10.0, 10.0, 10.0),
                Product::new(1, 5.0, 5.0, 5.0),
            ],
        );
        assert!(matches!(duplicate.validate(), Err(Error::InvalidOrder(_))));

        let negative = Order::new(3, vec![Product::new(1, -1.0, 10.0, 10.0)]);
        assert!(negative.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wire_format() {
        let json = r#"{"orderId": 5, "products": [{"id": 1, "height": 10, "width": 20, "length": 30}]}"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.order_id, 5);
        assert_eq!(order.products[0], Product::new(1, 10.0, 20.0, 30.0));
    }
}
