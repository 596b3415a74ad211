//! Connection interception subsystem.
//!
//! # Data Flow
//! ```text
//! ConnectAttempt {family, dest_addr, dest_port}
//!     → family gate (non-IPv4 passes untouched)
//!     → VipTable::lookup(dest_addr)
//!         absent        → Verdict::Pass, untouched
//!         empty set     → Verdict::Drop, untouched
//!         populated set → clamp size → selector::select
//!                       → bounds-checked entry fetch
//!                       → rewrite dest_addr (and dest_port if carried)
//!                       → Verdict::Pass
//! ```
//!
//! # Design Decisions
//! - One decision per attempt; no retry, no error channel
//! - Side effects limited to the attempt's destination fields
//! - Synchronous and bounded: no I/O, no waits, nothing unbounded by
//!   [`MAX_BACKENDS`](crate::vip::MAX_BACKENDS)
//! - Trace/metric emission is best-effort and never shapes the verdict

pub mod attempt;
pub mod decision;

pub use attempt::{AddrFamily, ConnectAttempt, Verdict};
pub use decision::Interceptor;
