//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured events via `tracing`; the embedding application picks the
//!   subscriber (a default initializer is provided)
//! - Counters via the `metrics` facade; installing an exporter is the
//!   embedding application's choice
//! - Emission is best-effort: it never blocks and never shapes a verdict

pub mod logging;
pub mod metrics;
