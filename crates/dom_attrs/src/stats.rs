//! Counters for a reconciler's lifetime.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub writes: u64,
    pub removals: u64,
    /// Attributes whose next value was the same value as the previous one.
    pub skipped: u64,
    pub diagnostics: u64,
}
