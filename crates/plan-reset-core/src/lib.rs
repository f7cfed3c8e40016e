//! Plan Reset Core - Shared library for the plan reset maintenance command
//!
//! This crate provides everything the `plan-reset` binary needs:
//! - Backend configuration sourced once at startup
//! - PostgREST request primitives (filter predicates, partial-update bodies)
//! - A transport seam with a reqwest-backed client
//! - The invoker that forces active plans into the abandoned state

pub mod config;
pub mod constants;
pub mod error;
pub mod plan;
pub mod reset;
pub mod rest;

// Re-exports for convenience
pub use config::ResetConfig;
pub use error::ResetError;
pub use plan::PlanStatus;
pub use reset::{PlanResetter, ResetOutcome};
pub use rest::{BulkUpdateTransport, Filter, RestClient, StatusPatch};
