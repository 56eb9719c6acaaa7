//! # Boxpack
//!
//! Assigns the products of each order to the fewest standard boxes a
//! first-fit-decreasing heuristic can find.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxpack::packer::Packer;
//! use boxpack::core::{Order, Product, Solver};
//!
//! let orders = vec![Order::new(1, vec![Product::new(1, 10.0, 10.0, 10.0)])];
//! let results = Packer::standard().process_orders(&orders);
//!
//! assert_eq!(results[0].boxes[0].box_name, "Box 1");
//! assert_eq!(results[0].boxes[0].product_ids, vec![1]);
//! ```
//!
//! ## Feature Flags
//!
//! - `packer` (default): first-fit-decreasing packer and box catalog
//! - `serde`: Serialization support

/// Core types and traits.
pub use boxpack_core as core;

/// Packer and box catalog.
#[cfg(feature = "packer")]
pub use boxpack_packer as packer;

// Re-export commonly used types at root level
pub use boxpack_core::{
    fits, BatchSummary, Diagnostic, Dimensions, Error, Order, OrderResult, PackedBox,
    PackingObserver, Product, Result, Solver,
};

#[cfg(feature = "packer")]
pub use boxpack_packer::{BoxSpec, Catalog, Packer, PackerConfig};
