//! Integration tests for boxpack-core.

use boxpack_core::diagnostic::{CollectingObserver, Diagnostic, PackingObserver};
use boxpack_core::geometry::{fits, fitting_orientation, Dimensions, Orientation};
use boxpack_core::order::{Order, Product};
use boxpack_core::result::{OrderResult, PackedBox};
use boxpack_core::solver::Solver;

mod fit_tests {
    use super::*;

    const BOX_1: Dimensions = Dimensions::new(30.0, 40.0, 80.0);
    const BOX_2: Dimensions = Dimensions::new(50.0, 50.0, 40.0);
    const BOX_3: Dimensions = Dimensions::new(50.0, 80.0, 60.0);

    #[test]
    fn test_cube_fits_every_box() {
        let cube = Dimensions::new(20.0, 20.0, 20.0);
        for container in [BOX_1, BOX_2, BOX_3] {
            assert!(fits(&cube, &container));
        }
    }

    #[test]
    fn test_box_fits_itself_in_any_rotation() {
        for container in [BOX_1, BOX_2, BOX_3] {
            for orientation in Orientation::ALL {
                assert!(fits(&container.rotated(orientation), &container));
            }
        }
    }

    #[test]
    fn test_nesting_of_boxes() {
        assert!(fits(&BOX_1, &BOX_3));
        assert!(fits(&BOX_2, &BOX_3));
        assert!(!fits(&BOX_1, &BOX_2));
        assert!(!fits(&BOX_2, &BOX_1));
    }

    #[test]
    fn test_slightly_too_long() {
        let rod = Dimensions::new(1.0, 1.0, 80.5);
        assert!(!fits(&rod, &BOX_1));
        assert!(fits(&Dimensions::new(1.0, 1.0, 80.0), &BOX_1));
    }

    #[test]
    fn test_orientation_applies_to_container_axes() {
        let product = Dimensions::new(80.0, 40.0, 30.0);
        let orientation = fitting_orientation(&product, &BOX_1).unwrap();
        let placed = product.rotated(orientation);

        assert!(!orientation.is_identity());
        assert!(placed.height() <= BOX_1.height());
        assert!(placed.width() <= BOX_1.width());
        assert!(placed.length() <= BOX_1.length());
    }
}

mod solver_tests {
    use super::*;

    /// Puts every product of an order in its own box.
    struct OneBoxEach;

    impl Solver for OneBoxEach {
        fn process_orders_observed(
            &self,
            orders: &[Order],
            observer: &mut dyn PackingObserver,
        ) -> Vec<OrderResult> {
            orders
                .iter()
                .map(|order| {
                    let mut result = OrderResult::new(order.order_id);
                    for product in &order.products {
                        if product.dimensions.is_positive() {
                            observer.on_box_opened(order.order_id, "Single", product.id);
                            result.boxes.push(PackedBox::new("Single", vec![product.id]));
                        } else {
                            observer.on_diagnostic(&Diagnostic::Unpackable {
                                order_id: order.order_id,
                                product_id: product.id,
                                dimensions: product.dimensions,
                            });
                            result.unpacked.push(product.id);
                        }
                    }
                    result
                })
                .collect()
        }
    }

    #[test]
    fn test_default_process_orders_uses_observed_path() {
        let orders = vec![
            Order::new(1, vec![Product::new(1, 1.0, 1.0, 1.0), Product::new(2, 1.0, 1.0, 1.0)]),
            Order::empty(2),
        ];

        let results = OneBoxEach.process_orders(&orders);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].box_count(), 2);
        assert_eq!(results[1].box_count(), 0);
    }

    #[test]
    fn test_observer_receives_diagnostics() {
        let orders = vec![Order::new(3, vec![Product::new(8, 0.0, 1.0, 1.0)])];
        let mut observer = CollectingObserver::new();

        let results = OneBoxEach.process_orders_observed(&orders, &mut observer);
        assert_eq!(results[0].unpacked, vec![8]);
        assert_eq!(observer.diagnostics.len(), 1);
        assert_eq!(observer.diagnostics[0].order_id(), 3);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_order_result_round_trip_shape() {
        let json = r#"{"orderId": 1, "boxes": [{"boxName": "Box 1", "productIds": [1, 2]}]}"#;
        let result: OrderResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.boxes[0].product_ids, vec![1, 2]);
        assert!(result.unpacked.is_empty());
    }

    #[test]
    fn test_diagnostic_shape() {
        let diagnostic = Diagnostic::Unpackable {
            order_id: 1,
            product_id: 2,
            dimensions: Dimensions::new(60.0, 90.0, 70.0),
        };
        let json = serde_json::to_value(&diagnostic).unwrap();

        assert_eq!(json["kind"], "unpackable");
        assert_eq!(json["orderId"], 1);
        assert_eq!(json["productId"], 2);
        assert_eq!(json["dimensions"]["width"], 90.0);
    }
}
