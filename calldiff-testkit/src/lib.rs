//! # Test fixtures for calldiff
//!
//! Builders for the inputs of diff-algorithm tests:
//!
//! - [`TestCall`] - a plain, immutable [`Call`](calldiff_core::Call) value
//! - [`TestReference`] - an in-memory reference, optionally loaded from FASTA
//! - [`random_calls`] / [`RandomCalls`] - seeded, sorted, duplicate-free random
//!   calls read off a reference

pub mod consts;
pub mod errors;
pub mod random;
pub mod test_call;
pub mod test_reference;

// re-export for cleaner imports
pub use errors::{FixtureError, Result};
pub use random::{RandomCalls, random_calls, random_calls_with_phaseset};
pub use test_call::TestCall;
pub use test_reference::TestReference;
