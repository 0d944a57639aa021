//! Port contracts for issue notification.

pub mod observer;

#[cfg(test)]
pub use observer::MockIssueObserver;
pub use observer::IssueObserver;
