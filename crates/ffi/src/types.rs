//! FFI request and response types.

use boxpack_core::{BatchSummary, Diagnostic, Order, OrderResult};
use boxpack_packer::{BoxSpec, PackerConfig};
use serde::{Deserialize, Serialize};

/// API version from Cargo.toml.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Packing request.
///
/// Either a bare array of orders or an envelope with options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackRequest {
    /// `[ { "orderId": 1, "products": [...] }, ... ]`
    Orders(Vec<Order>),
    /// `{ "orders": [...], "catalog": [...], "config": {...}, "strict": true }`
    Envelope(PackEnvelope),
}

impl PackRequest {
    /// Splits the request into its orders and options.
    pub fn into_envelope(self) -> PackEnvelope {
        match self {
            Self::Orders(orders) => PackEnvelope {
                version: None,
                orders,
                catalog: None,
                config: None,
                strict: false,
            },
            Self::Envelope(envelope) => envelope,
        }
    }
}

/// Packing request with options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackEnvelope {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// Orders to pack.
    pub orders: Vec<Order>,

    /// Replacement catalog; the standard catalog is used when absent.
    #[serde(default)]
    pub catalog: Option<Vec<BoxSpec>>,

    /// Packer configuration.
    #[serde(default)]
    pub config: Option<PackerConfig>,

    /// Reject orders with invalid dimensions or duplicate product ids.
    #[serde(default)]
    pub strict: bool,
}

/// Response for pack operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackResponse {
    /// API version.
    pub version: String,

    /// Whether the operation succeeded.
    pub success: bool,

    /// Error message if failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// One result per input order, in input order.
    #[serde(default)]
    pub results: Vec<OrderResult>,

    /// Diagnostics raised while packing.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,

    /// Batch statistics.
    #[serde(default)]
    pub summary: BatchSummary,
}

impl PackResponse {
    /// Builds a successful response.
    pub fn success(results: Vec<OrderResult>, diagnostics: Vec<Diagnostic>) -> Self {
        let summary = BatchSummary::from_results(&results);
        Self {
            version: API_VERSION.to_string(),
            success: true,
            error: None,
            results,
            diagnostics,
            summary,
        }
    }

    /// Builds a failed response.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(error.into()),
            results: Vec::new(),
            diagnostics: Vec::new(),
            summary: BatchSummary::default(),
        }
    }
}

/// Response describing the standard catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// API version.
    pub version: String,

    /// Entries in ascending volume order.
    pub boxes: Vec<BoxSpec>,
}
