//! # Core value types for calldiff
//!
//! This crate holds the pieces every calldiff component shares:
//!
//! - [`hash_eq`] - structural equality and hashing built from a list of named
//!   field projections, so value types never hand-write field comparisons
//! - [`models`] - the [`Call`](models::Call) capability and [`Phaseset`](models::Phaseset)
//! - [`reference`] - the read interface of a reference sequence store
//! - [`errors`] - error types for the above

pub mod errors;
pub mod hash_eq;
pub mod models;
pub mod reference;

// re-export for cleaner imports
pub use errors::{CallError, ReferenceError};
pub use hash_eq::{Field, FieldValue, HashCodeAndEquals};
pub use models::{Call, Phaseset};
pub use reference::{ReferenceProvider, ReferenceReader};
