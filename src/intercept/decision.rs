//! Per-connection decision logic.

use std::sync::Arc;

use rand::RngCore;

use crate::intercept::attempt::{AddrFamily, ConnectAttempt, Verdict};
use crate::observability::metrics;
use crate::selector;
use crate::vip::VipTable;

/// The connection interceptor: one decision per connection attempt.
///
/// Holds a handle to the shared mapping store. Invocations are independent,
/// re-entrant, and idempotent given the same inputs and random draw; many
/// may run concurrently against the same table.
#[derive(Debug, Clone)]
pub struct Interceptor {
    table: Arc<VipTable>,
}

impl Interceptor {
    pub fn new(table: Arc<VipTable>) -> Self {
        Self { table }
    }

    /// The mapping store this interceptor reads.
    pub fn table(&self) -> &VipTable {
        &self.table
    }

    /// Decide one attempt using thread-local randomness.
    pub fn decide(&self, attempt: &mut ConnectAttempt) -> Verdict {
        self.decide_with(attempt, &mut rand::thread_rng())
    }

    /// Decide one attempt with an injected random source.
    pub fn decide_with<R: RngCore>(&self, attempt: &mut ConnectAttempt, rng: &mut R) -> Verdict {
        if attempt.family != AddrFamily::Ipv4 {
            metrics::decision(metrics::OUTCOME_PASS_FAMILY);
            return Verdict::Pass;
        }

        let vip = attempt.dest_addr;
        let Some(set) = self.table.lookup(vip) else {
            // Not a managed address; leave the attempt alone.
            metrics::decision(metrics::OUTCOME_PASS_UNMANAGED);
            return Verdict::Pass;
        };

        let size = set.effective_size();
        if size == 0 {
            // Registered with no usable backend: reject rather than leak
            // the virtual address upstream.
            tracing::debug!(vip = %vip, "No backends for virtual address, dropping");
            metrics::decision(metrics::OUTCOME_DROP_EMPTY);
            return Verdict::Drop;
        }

        let index = selector::select(size, rng);
        // The clamp bounds `index`; the access is still checked here rather
        // than trusted across scopes.
        let Some(endpoint) = set.endpoint(index) else {
            tracing::error!(vip = %vip, index, size, "Selected index out of bounds, dropping");
            metrics::decision(metrics::OUTCOME_DROP_BOUNDS);
            return Verdict::Drop;
        };

        attempt.dest_addr = endpoint.addr;
        if let Some(port) = endpoint.port {
            attempt.dest_port = port;
        }

        tracing::trace!(
            vip = %vip,
            backend = %endpoint.addr,
            index,
            version = set.version(),
            "Rewrote destination"
        );
        metrics::decision(metrics::OUTCOME_REWRITE);
        Verdict::Pass
    }
}
