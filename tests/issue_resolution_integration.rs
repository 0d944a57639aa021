//! Behavioural integration tests for issue notifications across teams.
//!
//! These tests wire the team directory, member inboxes, task-level
//! watchers and meeting decorators together and follow an issue from
//! creation through resolution.

use std::sync::Arc;

use chrono::NaiveTime;
use gropius::{
    config::TrackerConfig,
    issue::{
        adapters::memory::RecordingObserver,
        domain::{Issue, IssueStatus},
        ports::IssueObserver,
    },
    task::domain::{DecoratorCore, NewTask, TaskDecorator, TaskTree},
    team::{
        adapters::{MemberInbox, memory::InMemoryTeamDirectory},
        domain::{Team, TeamMember},
    },
};
use mockable::DefaultClock;

// ============================================================================
// Scenario: Resolution reaches every inbox exactly once
// ============================================================================

/// Watchers registered on a task are subscribed to each new issue, and
/// resolving the issue notifies them before removing them.
#[test]
fn resolution_notifies_watchers_and_direct_subscribers() {
    // Arrange
    let clock = DefaultClock;
    let config = TrackerConfig::default();
    let mut directory = InMemoryTeamDirectory::new();
    let platform = directory
        .add_team(Team::new("Platform").expect("team should be valid"))
        .expect("team should register");
    let ops = directory
        .add_team(Team::new("Ops").expect("team should be valid"))
        .expect("team should register");
    let ada = TeamMember::new("Ada", platform).expect("member should be valid");
    let grace = TeamMember::new("Grace", ops).expect("member should be valid");
    directory
        .add_member(ada.clone())
        .expect("member should register");
    directory
        .add_member(grace.clone())
        .expect("member should register");
    let ada_inbox =
        Arc::new(MemberInbox::new(ada, &directory, &config).expect("inbox should resolve team"));
    let grace_inbox =
        Arc::new(MemberInbox::new(grace, &directory, &config).expect("inbox should resolve team"));

    let mut tree = TaskTree::new(&config).expect("default config should be valid");
    let release = tree
        .create_composite(NewTask::new("Release"))
        .expect("task should be created");
    tree.declare_root(release).expect("root should be declared");
    let rollout = tree
        .create_leaf(NewTask::new("Rollout"))
        .expect("task should be created");
    tree.attach_child(release, rollout)
        .expect("child should attach");
    tree.watch(rollout, platform, Arc::<MemberInbox>::clone(&ada_inbox))
        .expect("watcher should register");

    // Act
    let report = Issue::new("Canary fails", "", &clock).expect("issue should be valid");
    let issue_id = tree.add_issue(rollout, report).expect("issue should attach");
    let issue = tree
        .issue_mut(rollout, issue_id)
        .expect("issue should be found");
    issue.subscribe(Arc::<MemberInbox>::clone(&grace_inbox));
    issue.set_status(IssueStatus::Resolved, &clock);

    // Assert
    assert_eq!(
        ada_inbox.messages(),
        vec!["Ada (Platform): issue 'Canary fails' Status is now Resolved".to_owned()]
    );
    assert_eq!(
        grace_inbox.messages(),
        vec!["Grace (Ops): issue 'Canary fails' Status is now Resolved".to_owned()]
    );
    let resolved = tree.issue(rollout, issue_id).expect("issue should be found");
    assert_eq!(resolved.subscriber_count(), 0);
    assert_eq!(resolved.parent_task(), Some(rollout));
}

// ============================================================================
// Scenario: Sticky observers survive resolution
// ============================================================================

/// An observer that opts out of resolution unsubscription keeps
/// receiving later changes while the others are removed.
#[test]
fn sticky_observer_keeps_receiving_changes_after_resolution() {
    // Arrange
    let clock = DefaultClock;
    let mut tree = TaskTree::default();
    let task = tree
        .create_composite(NewTask::new("Ops review"))
        .expect("task should be created");
    tree.declare_root(task).expect("root should be declared");
    let auditor = Arc::new(RecordingObserver::new().sticky());
    let reviewer = Arc::new(RecordingObserver::new());
    let issue_id = tree
        .add_issue(
            task,
            Issue::new("Disk pressure", "", &clock).expect("issue should be valid"),
        )
        .expect("issue should attach");
    let issue = tree.issue_mut(task, issue_id).expect("issue should be found");
    issue.subscribe(Arc::<RecordingObserver>::clone(&auditor));
    issue.subscribe(Arc::<RecordingObserver>::clone(&reviewer));

    // Act
    issue.set_status(IssueStatus::Resolved, &clock);
    assert!(issue.set_name("Disk pressure on db-2", &clock));

    // Assert
    assert_eq!(auditor.len(), 2, "sticky observer sees the rename");
    assert_eq!(reviewer.len(), 1, "removed observer only sees resolution");
    assert!(issue.is_subscribed(auditor.observer_key()));
    assert!(!issue.is_subscribed(reviewer.observer_key()));
}

// ============================================================================
// Scenario: Meetings expand team membership
// ============================================================================

/// A mass meeting lists every member of each attending team, and an
/// urgency layer around it keeps the meeting details reachable.
#[test]
fn urgent_mass_meeting_lists_attendees_of_every_team() {
    // Arrange
    let mut directory = InMemoryTeamDirectory::new();
    let platform = directory
        .add_team(Team::new("Platform").expect("team should be valid"))
        .expect("team should register");
    let ops = directory
        .add_team(Team::new("Ops").expect("team should be valid"))
        .expect("team should register");
    let ada = directory
        .add_member(TeamMember::new("Ada", platform).expect("member should be valid"))
        .expect("member should register");
    let linus = directory
        .add_member(TeamMember::new("Linus", platform).expect("member should be valid"))
        .expect("member should register");
    let grace = directory
        .add_member(TeamMember::new("Grace", ops).expect("member should be valid"))
        .expect("member should register");

    let mut tree = TaskTree::default();
    let standup = tree
        .create_leaf(NewTask::new("Standup").with_assignee(ada))
        .expect("task should be created");
    tree.declare_root(standup).expect("root should be declared");
    let time = NaiveTime::from_hms_opt(9, 30, 0).expect("valid time");

    // Act
    let meeting = TaskDecorator::mass_meeting(standup, time, [platform, ops]);
    let attendees = meeting
        .attendees(&directory)
        .expect("attendees should resolve");
    let urgent = TaskDecorator::urgent(meeting);

    // Assert
    assert_eq!(attendees, vec![ada, linus, grace]);
    assert!(urgent.is_urgent());
    assert_eq!(urgent.base_node(), standup);
    assert_eq!(urgent.name(&tree).expect("name should resolve"), "Standup");
    assert_eq!(urgent.meeting_time(), None);
    let DecoratorCore::Decorator(inner) = urgent.core() else {
        panic!("urgent layer should wrap the meeting");
    };
    assert_eq!(inner.meeting_time(), Some(time));
}
