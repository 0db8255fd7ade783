//! Core matching pipeline for GitMatch.
//!
//! Pure domain logic: models, collaborator traits, the concurrent search
//! fan-out, aggregation/dedup, the tag refinement state machine, and the
//! client-side filter. All I/O lives behind the traits and is implemented by
//! the infrastructure and interaction crates.

pub mod analysis;
pub mod error;
pub mod filter;
pub mod issue;
pub mod profile;
pub mod search;
pub mod session;
pub mod tags;

pub use error::{GitmatchError, Result};
