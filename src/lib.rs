//! Mortgage eligibility and offer derivation for a batch of bank clients.
//!
//! The library exposes the pipeline core (demographic decoding, screening,
//! rate resolution, offer assembly) plus the tabular adapters that feed and
//! drain it. The binary in `main.rs` is a thin wrapper running one batch per
//! process.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod tables;
pub mod telemetry;
