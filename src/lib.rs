//! Layer-4 connection steering core.
//!
//! Decides, per outbound IPv4 connection attempt, which concrete backend
//! should receive a connection dialed to a virtual service address, and
//! rewrites the destination in place before the connection is established.
//!
//! ```text
//! ConnectAttempt {family, dest_addr, dest_port}
//!     │
//!     ▼
//! intercept ── lookup ──▶ vip (VipTable: Ipv4Addr → Arc<BackendSet>)
//!     │                        ▲
//!     │ clamp + select         │ upsert / remove / apply_config
//!     ▼                        │
//! selector (uniform)        config (load → validate → apply, hot reload)
//!     │
//!     ▼
//! Verdict::Pass (destination rewritten) / Verdict::Drop
//! ```
//!
//! The decision path is synchronous and bounded: no I/O, no waits, no
//! allocation, every indexed access provably in range at the point of use.
//! The config path is the only writer and publishes whole backend sets
//! atomically per address.

pub mod config;
pub mod intercept;
pub mod observability;
pub mod selector;
pub mod vip;

pub use config::schema::SteerConfig;
pub use intercept::{AddrFamily, ConnectAttempt, Interceptor, Verdict};
pub use selector::select;
pub use vip::{BackendEndpoint, BackendSet, VipTable, MAX_BACKENDS};
