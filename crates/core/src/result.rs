//! Packing result representation.

use std::collections::BTreeMap;

use crate::order::{OrderId, ProductId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box opened for one order, reduced to its name and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackedBox {
    /// Catalog name of the box.
    pub box_name: String,

    /// Products assigned to this box, in assignment order.
    pub product_ids: Vec<ProductId>,
}

impl PackedBox {
    /// Creates a packed box summary.
    pub fn new(box_name: impl Into<String>, product_ids: Vec<ProductId>) -> Self {
        Self {
            box_name: box_name.into(),
            product_ids,
        }
    }

    /// Returns true if the box holds the given product.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.product_ids.contains(&product_id)
    }
}

/// Result of packing one order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OrderResult {
    /// Identifier of the input order.
    pub order_id: OrderId,

    /// Boxes in the order they were opened.
    pub boxes: Vec<PackedBox>,

    /// Products no catalog box can hold, in processing order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unpacked: Vec<ProductId>,
}

impl OrderResult {
    /// Creates an empty result for the given order.
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            boxes: Vec::new(),
            unpacked: Vec::new(),
        }
    }

    /// Returns the number of boxes used.
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Returns the number of packed products.
    pub fn packed_count(&self) -> usize {
        self.boxes.iter().map(|b| b.product_ids.len()).sum()
    }

    /// Returns the number of products reported as unpackable.
    pub fn unpacked_count(&self) -> usize {
        self.unpacked.len()
    }

    /// Returns true if no product was reported as unpackable.
    pub fn all_packed(&self) -> bool {
        self.unpacked.is_empty()
    }

    /// Iterates over every packed product id, box by box.
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.boxes.iter().flat_map(|b| b.product_ids.iter().copied())
    }

    /// Returns the box holding the given product.
    pub fn box_for(&self, product_id: ProductId) -> Option<&PackedBox> {
        self.boxes.iter().find(|b| b.contains(product_id))
    }
}

/// Aggregate statistics over a batch of order results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BatchSummary {
    /// Number of orders processed.
    pub orders: usize,
    /// Total boxes opened.
    pub boxes_used: usize,
    /// Total products packed.
    pub products_packed: usize,
    /// Total products reported as unpackable.
    pub products_unpacked: usize,
    /// Boxes opened per catalog name.
    pub box_usage: BTreeMap<String, usize>,
}

impl BatchSummary {
    /// Computes the summary of a batch.
    pub fn from_results(results: &[OrderResult]) -> Self {
        let mut summary = Self {
            orders: results.len(),
            ..Default::default()
        };

        for result in results {
            summary.boxes_used += result.box_count();
            summary.products_packed += result.packed_count();
            summary.products_unpacked += result.unpacked_count();

            for packed in &result.boxes {
                *summary
                    .box_usage
                    .entry(packed.box_name.clone())
                    .or_insert(0) += 1;
            }
        }

        summary
    }
}

impl From<&[OrderResult]> for BatchSummary {
    fn from(results: &[OrderResult]) -> Self {
        Self::from_results(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderResult {
        OrderResult {
            order_id: 1,
            boxes: vec![
                PackedBox::new("Box 3", vec![10, 12]),
                PackedBox::new("Box 1", vec![11]),
            ],
            unpacked: vec![13],
        }
    }

    #[test]
    fn test_result_new() {
        let result = OrderResult::new(4);
        assert_eq!(result.order_id, 4);
        assert_eq!(result.box_count(), 0);
        assert!(result.all_packed());
    }

    #[test]
    fn test_counts() {
        let result = sample();
        assert_eq!(result.box_count(), 2);
        assert_eq!(result.packed_count(), 3);
        assert_eq!(result.unpacked_count(), 1);
        assert!(!result.all_packed());
        assert_eq!(result.product_ids().collect::<Vec<_>>(), vec![10, 12, 11]);
    }

    #[test]
    fn test_box_for() {
        let result = sample();
        assert_eq!(result.box_for(12).map(|b| b.box_name.as_str()), Some("Box 3"));
        assert!(result.box_for(13).is_none());
    }

    #[test]
    fn test_batch_summary() {
        let results = vec![sample(), OrderResult::new(2), sample()];
        let summary = BatchSummary::from_results(&results);

        assert_eq!(summary.orders, 3);
        assert_eq!(summary.boxes_used, 4);
        assert_eq!(summary.products_packed, 6);
        assert_eq!(summary.products_unpacked, 2);
        assert_eq!(summary.box_usage.get("Box 3"), Some(&2));
        assert_eq!(summary.box_usage.get("Box 2"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["orderId"], 1);
        assert_eq!(json["boxes"][0]["boxName"], "Box 3");
        assert_eq!(json["boxes"][0]["productIds"][1], 12);
        assert_eq!(json["unpacked"][0], 13);
    }
}
