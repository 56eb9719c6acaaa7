//! Human-readable output.

use boxpack_core::BatchSummary;
use boxpack_packer::Catalog;
use std::fmt::Write;

/// Formats the catalog as a table, smallest box first.
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>8} {:>8} {:>8} {:>12}",
        "name", "height", "width", "length", "volume"
    );
    let _ = writeln!(out, "{:-<52}", "");
    for spec in catalog {
        let dims = spec.dimensions();
        let _ = writeln!(
            out,
            "{:<12} {:>8} {:>8} {:>8} {:>12}",
            spec.name(),
            dims.height(),
            dims.width(),
            dims.length(),
            spec.volume()
        );
    }
    out
}

/// Formats batch statistics.
pub fn format_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Packing Summary:");
    let _ = writeln!(out, "{:-<40}", "");
    let _ = writeln!(out, "  orders:            {}", summary.orders);
    let _ = writeln!(out, "  boxes used:        {}", summary.boxes_used);
    let _ = writeln!(out, "  products packed:   {}", summary.products_packed);
    let _ = writeln!(out, "  products unpacked: {}", summary.products_unpacked);
    for (name, count) in &summary.box_usage {
        let _ = writeln!(out, "    {:<16} x{}", name, count);
    }
    out
}
