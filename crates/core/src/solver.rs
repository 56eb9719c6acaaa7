//! Solver trait.

use crate::diagnostic::{NoopObserver, PackingObserver};
use crate::order::Order;
use crate::result::OrderResult;

/// Trait for order packers.
///
/// Implementations must be deterministic and order-preserving: `output[i]`
/// is the result of `orders[i]`, and packing one order never observes state
/// left behind by another.
pub trait Solver {
    /// Packs every order, reporting events to `observer`.
    fn process_orders_observed(
        &self,
        orders: &[Order],
        observer: &mut dyn PackingObserver,
    ) -> Vec<OrderResult>;

    /// Packs every order without observing events.
    fn process_orders(&self, orders: &[Order]) -> Vec<OrderResult> {
        self.process_orders_observed(orders, &mut NoopObserver)
    }
}
