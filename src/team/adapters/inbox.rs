//! Issue observer delivering rendered notifications to a team member.

use crate::config::TrackerConfig;
use crate::issue::{
    domain::{IssueChange, ObserverKey},
    ports::IssueObserver,
};
use crate::team::{
    domain::TeamMember,
    ports::{TeamDirectory, TeamDirectoryResult},
};
use minijinja::{Environment, context};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// A member's notification inbox.
///
/// Each change is rendered through the configured notification template
/// with the member's name and home team name. Rendering failures are logged
/// and the notification is dropped.
#[derive(Debug)]
pub struct MemberInbox {
    member: TeamMember,
    team_name: String,
    template: String,
    messages: Mutex<Vec<String>>,
}

impl MemberInbox {
    /// Creates an inbox for `member`, resolving their home team name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::team::ports::TeamDirectoryError::UnknownTeam`] when
    /// the member's home team is not in the directory.
    pub fn new<D>(
        member: TeamMember,
        directory: &D,
        config: &TrackerConfig,
    ) -> TeamDirectoryResult<Self>
    where
        D: TeamDirectory + ?Sized,
    {
        let team_name = directory.team(member.team())?.name().to_owned();
        Ok(Self {
            member,
            team_name,
            template: config.notification_template.clone(),
            messages: Mutex::new(Vec::new()),
        })
    }

    /// Returns the inbox owner.
    #[must_use]
    pub const fn member(&self) -> &TeamMember {
        &self.member
    }

    /// Returns a copy of the delivered messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn render(&self, change: &IssueChange) -> Result<String, minijinja::Error> {
        Environment::new().render_str(
            &self.template,
            context! {
                member => self.member.name(),
                team => &self.team_name,
                issue => change.issue_name(),
                attribute => change.attribute().as_str(),
                value => change.value(),
            },
        )
    }
}

impl IssueObserver for MemberInbox {
    fn observer_key(&self) -> ObserverKey {
        self.member.id().into()
    }

    fn on_issue_changed(&self, change: &IssueChange) {
        match self.render(change) {
            Ok(message) => self
                .messages
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(message),
            Err(err) => warn!(
                member = %self.member.id(),
                issue_id = %change.issue(),
                error = %err,
                "failed to render issue notification"
            ),
        }
    }
}
