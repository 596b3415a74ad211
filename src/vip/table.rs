//! Virtual address lookup table.
//!
//! # Responsibilities
//! - Map virtual addresses to their published backend sets
//! - Give concurrent readers torn-free snapshots
//! - Carry the admin surface: upsert, remove, whole-config apply

use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use crate::config::schema::SteerConfig;
use crate::vip::backend_set::{BackendEndpoint, BackendSet, MAX_BACKENDS};

/// The mapping store: virtual address → currently published backend set.
///
/// Every update replaces one key's whole `Arc<BackendSet>`; there is no
/// in-place field mutation. A reader in flight during an update observes
/// either the old set or the new one, never a mix, and a displaced version
/// lives until its last snapshot drops.
#[derive(Debug, Default)]
pub struct VipTable {
    entries: DashMap<Ipv4Addr, Arc<BackendSet>>,
    next_version: AtomicU64,
}

impl VipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the set published for `vip`, if the address is managed.
    ///
    /// A present-but-empty set is a hit, not a miss: the two outcomes drive
    /// different verdicts downstream.
    pub fn lookup(&self, vip: Ipv4Addr) -> Option<Arc<BackendSet>> {
        self.entries.get(&vip).map(|entry| Arc::clone(entry.value()))
    }

    /// Publish a new set for `vip`, replacing the previous one wholesale.
    /// Returns the displaced set, if any.
    pub fn upsert(&self, vip: Ipv4Addr, mut set: BackendSet) -> Option<Arc<BackendSet>> {
        let version = self.next_version.fetch_add(1, Ordering::Relaxed) + 1;
        set.set_version(version);
        self.entries.insert(vip, Arc::new(set))
    }

    /// Unregister `vip`. Subsequent lookups miss and connections pass
    /// through untouched.
    pub fn remove(&self, vip: Ipv4Addr) -> Option<Arc<BackendSet>> {
        self.entries.remove(&vip).map(|(_, set)| set)
    }

    /// Rebuild the table from a validated config: publish one set per
    /// configured VIP, then drop addresses no longer configured.
    ///
    /// Never fails. Non-IPv4 entries are skipped with a warning (validation
    /// rejects them upstream; a stale caller must not poison the table) and
    /// oversized backend lists truncate at [`MAX_BACKENDS`].
    pub fn apply_config(&self, config: &SteerConfig) {
        let mut configured = HashSet::with_capacity(config.vips.len());

        for vip in &config.vips {
            let IpAddr::V4(addr) = vip.address else {
                tracing::warn!(vip = %vip.name, address = %vip.address, "Skipping non-IPv4 virtual address");
                continue;
            };

            let endpoints: Vec<BackendEndpoint> = vip
                .backends
                .iter()
                .filter_map(|backend| match backend.address {
                    IpAddr::V4(v4) => Some(match backend.port {
                        Some(port) => BackendEndpoint::with_port(v4, port),
                        None => BackendEndpoint::new(v4),
                    }),
                    IpAddr::V6(_) => {
                        tracing::warn!(vip = %vip.name, address = %backend.address, "Skipping non-IPv4 backend");
                        None
                    }
                })
                .collect();

            if endpoints.len() > MAX_BACKENDS {
                tracing::warn!(
                    vip = %vip.name,
                    count = endpoints.len(),
                    limit = MAX_BACKENDS,
                    "Backend list exceeds capacity, truncating"
                );
            }

            configured.insert(addr);
            self.upsert(addr, BackendSet::new(endpoints));
        }

        self.entries.retain(|addr, _| configured.contains(addr));
    }

    /// Number of managed virtual addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the managed addresses, for introspection.
    pub fn vips(&self) -> Vec<Ipv4Addr> {
        self.entries.iter().map(|entry| *entry.key()).collect()
    }
}
