//! Virtual address mapping subsystem.
//!
//! # Data Flow
//! ```text
//! Control plane (config apply, admin calls):
//!     BackendSet built → VipTable::upsert (whole-value publish)
//!     stale addresses  → VipTable::remove
//!
//! Decision path:
//!     VipTable::lookup(vip)
//!         → Some(Arc<BackendSet>)  — one consistent snapshot
//!         → None                   — address is not managed
//! ```
//!
//! # Design Decisions
//! - Sets are immutable once published; updates replace the whole value
//! - Readers hold `Arc` snapshots; displaced versions live until the last
//!   snapshot drops
//! - A present-but-empty set is a real state, distinct from an absent key
//! - The claimed backend count is clamped at every read, never trusted

pub mod backend_set;
pub mod table;

pub use backend_set::{BackendEndpoint, BackendSet, MAX_BACKENDS};
pub use table::VipTable;
