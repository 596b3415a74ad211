//! Backend index selection.
//!
//! # Design Decisions
//! - Selection is a pure function of (size, one random draw)
//! - Uniform probability is the one supported policy
//! - The random source is injected (`rand::RngCore`), so behavior is
//!   deterministic under test
//! - Callers re-validate the returned index at the point of use

pub mod uniform;

pub use uniform::select;
