//! # Boxpack Packer
//!
//! First-fit-decreasing packing of orders into standard boxes.
//!
//! ## Features
//!
//! - Fixed standard catalog shared process-wide ([`Catalog::standard`])
//! - Custom catalogs with validation ([`Catalog::from_specs`], [`CatalogFile`])
//! - Six-orientation fit checks against nominal box size
//! - Unpackable products surfaced in the result and through observers

pub mod catalog;
pub mod config;
pub mod observer;
pub mod packer;

// Re-exports
pub use catalog::{BoxSpec, Catalog};
#[cfg(feature = "serde")]
pub use config::CatalogFile;
pub use config::PackerConfig;
pub use observer::LogObserver;
pub use packer::Packer;
pub use boxpack_core::{
    BatchSummary, Diagnostic, Dimensions, Error, Order, OrderResult, PackedBox, PackingObserver,
    Product, Result, Solver,
};
