//! Observer that forwards packing events to the `log` facade.

use boxpack_core::diagnostic::{Diagnostic, PackingObserver};

/// Logs diagnostics as warnings.
///
/// Box openings and placements are already logged by the packer itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl PackingObserver for LogObserver {
    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}
