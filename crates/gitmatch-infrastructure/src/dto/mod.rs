//! Wire DTOs for the GitHub REST API and their domain conversions.

pub mod issue;
pub mod repo;
pub mod user;

pub use issue::{RawIssue, RawLabel, SearchIssuesResponse, repo_full_name_from_api_url};
pub use repo::RawRepo;
pub use user::RawUser;
