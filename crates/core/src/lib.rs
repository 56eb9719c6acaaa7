//! # Boxpack Core
//!
//! Core types and traits for the boxpack order packing engine.
//!
//! This crate provides the data model shared by every packing engine and by the
//! bindings built on top of it.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Dimensions`], [`Orientation`] and the fit predicate [`fits`]
//! - **Orders**: [`Product`], [`Order`]
//! - **Results**: [`OrderResult`], [`PackedBox`], [`BatchSummary`]
//! - **Solver trait**: [`Solver`] - common interface for order packers
//! - **Diagnostics**: [`Diagnostic`], [`PackingObserver`]
//!
//! ## Fit rule
//!
//! A product fits a box when, after sorting both dimension triples in
//! descending order, every product dimension is less than or equal to the
//! matching box dimension. This is the same as asking whether one of the six
//! axis-aligned rotations of the product fits.
//!
//! ```rust
//! use boxpack_core::{fits, Dimensions};
//!
//! let product = Dimensions::new(70.0, 20.0, 35.0);
//! let container = Dimensions::new(30.0, 40.0, 80.0);
//! assert!(fits(&product, &container));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support (camelCase wire names)

pub mod diagnostic;
pub mod error;
pub mod geometry;
pub mod order;
pub mod result;
pub mod solver;

// Re-exports
pub use diagnostic::{CollectingObserver, Diagnostic, NoopObserver, PackingObserver};
pub use error::{Error, Result};
pub use geometry::{fits, fitting_orientation, Dimensions, Orientation};
pub use order::{Order, OrderId, Product, ProductId};
pub use result::{BatchSummary, OrderResult, PackedBox};
pub use solver::Solver;
