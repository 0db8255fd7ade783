//! GitHub REST collaborators for the GitMatch pipeline.
//!
//! Thin I/O wrappers over the platform's REST endpoints: profile fetch,
//! repository listing, issue search, and handle normalization. All domain
//! decisions live in `gitmatch-core`; this crate only translates wire
//! records into domain models and HTTP failures into the shared error
//! taxonomy.

pub mod dto;
pub mod github_client;
pub mod handle;

pub use crate::github_client::GitHubClient;
pub use crate::handle::parse_handle;
