//! PostgREST request primitives
//!
//! The pieces of a conditional bulk update:
//! - `Filter` - server-evaluated predicate selecting the rows to touch
//! - `StatusPatch` - partial-update body applied to every selected row
//! - `BulkUpdateTransport` - the seam that submits both and yields a status
//! - `RestClient` - the reqwest implementation of that seam

pub mod client;
pub mod filter;
pub mod patch;
pub mod transport;

pub use client::RestClient;
pub use filter::Filter;
pub use patch::StatusPatch;
pub use transport::BulkUpdateTransport;
