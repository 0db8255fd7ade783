//! Application layer for GitMatch.
//!
//! Wires the core pipeline to its collaborators and exposes the in-process
//! API an interactive front end drives: start a profile search, adjust the
//! tag selection, refine, read the visible issues.

pub mod match_session;

pub use crate::match_session::MatchSession;
