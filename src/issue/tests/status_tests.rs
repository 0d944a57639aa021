//! Tests for issue status parsing and display.

use crate::issue::domain::{IssueStatus, ParseIssueStatusError};
use rstest::rstest;

#[rstest]
#[case("new", IssueStatus::New)]
#[case("Updated", IssueStatus::Updated)]
#[case("fix_in_progress", IssueStatus::FixInProgress)]
#[case("FixInProgress", IssueStatus::FixInProgress)]
#[case(" RESOLVED ", IssueStatus::Resolved)]
fn status_parses_known_names(#[case] raw: &str, #[case] expected: IssueStatus) {
    assert_eq!(IssueStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_names() {
    assert_eq!(
        IssueStatus::try_from("closed"),
        Err(ParseIssueStatusError("closed".to_owned()))
    );
}

#[rstest]
fn status_displays_notification_names() {
    assert_eq!(IssueStatus::FixInProgress.to_string(), "FixInProgress");
    assert_eq!(IssueStatus::default(), IssueStatus::New);
}
