//! Reconciliation settings.

#[derive(Clone, Debug)]
pub struct ReconcileConfig {
    /// Whether developer diagnostics reach the sink. DOM decisions are the
    /// same either way.
    pub emit_diagnostics: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            emit_diagnostics: true,
        }
    }
}

impl ReconcileConfig {
    /// Settings for production builds: no diagnostics.
    pub fn production() -> Self {
        Self {
            emit_diagnostics: false,
        }
    }
}
