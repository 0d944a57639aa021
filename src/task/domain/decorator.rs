//! Decorators layering urgency and meeting metadata over task nodes.

use super::{NodeHandle, TaskId, TaskTree, TaskTreeError, TaskTreeResult, TraversalEntry};
use crate::team::{
    domain::{MemberId, TeamId},
    ports::TeamDirectory,
};
use chrono::NaiveTime;

/// What a decorator wraps: a node directly, or another decorator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorCore {
    /// A task node in a [`TaskTree`].
    Node(NodeHandle),
    /// Another decorator layer.
    Decorator(Box<TaskDecorator>),
}

impl From<NodeHandle> for DecoratorCore {
    fn from(handle: NodeHandle) -> Self {
        Self::Node(handle)
    }
}

impl From<TaskDecorator> for DecoratorCore {
    fn from(decorator: TaskDecorator) -> Self {
        Self::Decorator(Box::new(decorator))
    }
}

/// Capability added by a decorator layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorKind {
    /// Marks the task as urgent.
    Urgent,
    /// Meeting with an explicit attendee list.
    SmallMeeting {
        /// Time of day the meeting starts.
        time: NaiveTime,
        /// Attendees in the order given, duplicates included.
        attendees: Vec<MemberId>,
    },
    /// Meeting attended by whole teams.
    MassMeeting {
        /// Time of day the meeting starts.
        time: NaiveTime,
        /// Attending teams in the order given.
        teams: Vec<TeamId>,
    },
}

/// A view over a task node that adds one capability.
///
/// Decorators never own identity: id, name and traversal all come from the
/// wrapped node. They do not appear in the tree and can be dropped at any
/// time without affecting it.
///
/// [`TaskDecorator::core`] unwraps a single layer. Use
/// [`TaskDecorator::base_node`] to reach the node beneath a stack of
/// decorators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDecorator {
    core: DecoratorCore,
    kind: DecoratorKind,
}

impl TaskDecorator {
    /// Wraps `core` with an urgency marker.
    #[must_use]
    pub fn urgent(core: impl Into<DecoratorCore>) -> Self {
        Self {
            core: core.into(),
            kind: DecoratorKind::Urgent,
        }
    }

    /// Wraps `core` as a meeting with an explicit attendee list.
    #[must_use]
    pub fn small_meeting(
        core: impl Into<DecoratorCore>,
        time: NaiveTime,
        attendees: impl IntoIterator<Item = MemberId>,
    ) -> Self {
        Self {
            core: core.into(),
            kind: DecoratorKind::SmallMeeting {
                time,
                attendees: attendees.into_iter().collect(),
            },
        }
    }

    /// Wraps `core` as a meeting attended by whole teams.
    #[must_use]
    pub fn mass_meeting(
        core: impl Into<DecoratorCore>,
        time: NaiveTime,
        teams: impl IntoIterator<Item = TeamId>,
    ) -> Self {
        Self {
            core: core.into(),
            kind: DecoratorKind::MassMeeting {
                time,
                teams: teams.into_iter().collect(),
            },
        }
    }

    /// Returns the directly wrapped layer.
    #[must_use]
    pub const fn core(&self) -> &DecoratorCore {
        &self.core
    }

    /// Returns this layer's capability.
    #[must_use]
    pub const fn kind(&self) -> &DecoratorKind {
        &self.kind
    }

    /// Returns the node beneath every decorator layer.
    #[must_use]
    pub fn base_node(&self) -> NodeHandle {
        let mut current = self;
        loop {
            match &current.core {
                DecoratorCore::Node(handle) => return *handle,
                DecoratorCore::Decorator(inner) => current = inner.as_ref(),
            }
        }
    }

    /// Returns `true` if this layer or any layer beneath it is urgent.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.layers()
            .any(|layer| matches!(layer.kind, DecoratorKind::Urgent))
    }

    /// Returns the meeting time of this layer, if it is a meeting.
    #[must_use]
    pub const fn meeting_time(&self) -> Option<NaiveTime> {
        match &self.kind {
            DecoratorKind::Urgent => None,
            DecoratorKind::SmallMeeting { time, .. } | DecoratorKind::MassMeeting { time, .. } => {
                Some(*time)
            }
        }
    }

    fn layers(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |layer| match &layer.core {
            DecoratorCore::Node(_) => None,
            DecoratorCore::Decorator(inner) => Some(inner.as_ref()),
        })
    }

    /// Returns the id of the wrapped node.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskTree::id_of`] failures.
    pub fn id(&self, tree: &TaskTree) -> TaskTreeResult<TaskId> {
        tree.id_of(self.base_node())
    }

    /// Returns the name of the wrapped node.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskTree::name_of`] failures.
    pub fn name<'tree>(&self, tree: &'tree TaskTree) -> TaskTreeResult<&'tree str> {
        tree.name_of(self.base_node())
    }

    /// Traverses the wrapped node's subtree.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskTree::traverse`] failures.
    pub fn iterate(&self, tree: &TaskTree) -> TaskTreeResult<Vec<TraversalEntry>> {
        tree.traverse(self.base_node())
    }

    /// Returns the meeting host: the assignee of the wrapped node.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::NotAMeeting`] for urgency layers.
    pub fn host(&self, tree: &TaskTree) -> TaskTreeResult<Option<MemberId>> {
        if self.meeting_time().is_none() {
            return Err(TaskTreeError::NotAMeeting);
        }
        Ok(tree.node(self.base_node())?.assignee())
    }

    /// Resolves the meeting attendees.
    ///
    /// Small meetings return their list verbatim. Mass meetings concatenate
    /// each team's membership in team order, so a member of two attending
    /// teams appears twice.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::NotAMeeting`] for urgency layers or
    /// [`TaskTreeError::Directory`] when a team is unknown.
    pub fn attendees<D>(&self, directory: &D) -> TaskTreeResult<Vec<MemberId>>
    where
        D: TeamDirectory + ?Sized,
    {
        match &self.kind {
            DecoratorKind::Urgent => Err(TaskTreeError::NotAMeeting),
            DecoratorKind::SmallMeeting { attendees, .. } => Ok(attendees.clone()),
            DecoratorKind::MassMeeting { teams, .. } => {
                let mut attendees = Vec::new();
                for team in teams {
                    attendees.extend_from_slice(directory.team(*team)?.members());
                }
                Ok(attendees)
            }
        }
    }
}
