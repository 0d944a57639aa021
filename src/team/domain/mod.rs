//! Domain model for teams and their members.

mod error;
mod ids;
mod member;
mod team;

pub use error::TeamDomainError;
pub use ids::{MemberId, TeamId};
pub use member::TeamMember;
pub use team::Team;
