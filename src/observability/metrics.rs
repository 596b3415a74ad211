//! Decision metrics.
//!
//! Recording is a few atomic operations when an exporter is installed and a
//! no-op otherwise.

use metrics::counter;

/// Counter of decisions, labeled by outcome.
pub const DECISIONS_TOTAL: &str = "steer_decisions_total";

/// Passed untouched: unsupported address family.
pub const OUTCOME_PASS_FAMILY: &str = "pass_unsupported_family";
/// Passed untouched: destination is not a managed virtual address.
pub const OUTCOME_PASS_UNMANAGED: &str = "pass_unmanaged";
/// Dropped: registered virtual address with no usable backend.
pub const OUTCOME_DROP_EMPTY: &str = "drop_no_backends";
/// Dropped: selected index failed the final bounds check.
pub const OUTCOME_DROP_BOUNDS: &str = "drop_out_of_bounds";
/// Passed with the destination rewritten to a backend.
pub const OUTCOME_REWRITE: &str = "pass_rewritten";

/// Count one decision outcome.
pub fn decision(outcome: &'static str) {
    counter!(DECISIONS_TOTAL, "outcome" => outcome).increment(1);
}
