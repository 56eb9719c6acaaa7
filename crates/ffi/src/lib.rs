//! # Boxpack FFI
//!
//! JSON and C interface for the boxpack order packer.
//!
//! A request is an array of
//! `{ "orderId", "products": [ { "id", "height", "width", "length" } ] }`,
//! optionally wrapped in an envelope carrying a custom catalog or
//! configuration. Responses list, per order, the boxes used and the product
//! ids in each box.

mod api;
mod types;

pub use api::*;
pub use types::*;

#[cfg(test)]
mod header_tests {
    use std::path::Path;

    #[test]
    fn test_header_declares_entry_points() {
        let path = Path::new(env!("OUT_DIR")).join("boxpack.h");
        let header = std::fs::read_to_string(&path).unwrap();

        assert!(header.contains("BOXPACK_H"));
        for name in [
            "boxpack_pack",
            "boxpack_catalog",
            "boxpack_free_string",
            "boxpack_version",
        ] {
            assert!(header.contains(name), "{} missing from boxpack.h", name);
        }
    }
}
