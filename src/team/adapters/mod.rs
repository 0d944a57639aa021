//! Adapter implementations for team ports and member notification.

mod inbox;
pub mod memory;

pub use inbox::MemberInbox;
