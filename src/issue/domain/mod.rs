//! Domain model for issues raised against tasks.

mod change;
mod error;
mod ids;
mod issue;
mod status;

pub use change::{IssueAttribute, IssueChange};
pub use error::{IssueDomainError, ParseIssueStatusError};
pub use ids::{IssueId, ObserverKey};
pub use issue::Issue;
pub use status::IssueStatus;
