//! Arena-backed task hierarchy.

use super::{
    IdAllocator, NewTask, NodeHandle, ObserverRegistry, Placement, TaskId, TaskKind, TaskNode,
    TaskTreeError, TaskTreeResult,
};
use crate::config::{ConfigError, TrackerConfig};
use crate::issue::{
    domain::{Issue, IssueId, ObserverKey},
    ports::IssueObserver,
};
use crate::team::domain::{MemberId, TeamId};
use chrono::NaiveDate;
use minijinja::{Environment, context};
use std::sync::Arc;
use tracing::debug;

/// Indentation emitted per depth level in rendered traversal lines.
const INDENT: &str = "  ";

/// One step of a depth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalEntry {
    /// Visited node.
    pub node: NodeHandle,
    /// Id of the visited node, absent for unplaced nodes.
    pub id: Option<TaskId>,
    /// Distance from the traversal start.
    pub depth: usize,
    /// Line rendered from the configured line template.
    pub line: String,
}

/// Owns every task node and the identifier allocator.
///
/// Composites refer to their children by [`NodeHandle`] and children refer
/// back to their parent the same way, so the parent/child cycle never
/// involves ownership. Nodes are never removed from the arena; detaching
/// only unlinks them.
#[derive(Debug, Clone)]
pub struct TaskTree {
    nodes: Vec<TaskNode>,
    allocator: IdAllocator,
    line_template: String,
}

impl TaskTree {
    /// Creates an empty tree configured by `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`TrackerConfig::validate`].
    pub fn new(config: &TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &TrackerConfig) -> Self {
        Self {
            nodes: Vec::new(),
            allocator: IdAllocator::from_config(config),
            line_template: config.line_template.clone(),
        }
    }

    /// Returns the identifier allocator.
    #[must_use]
    pub const fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    /// Returns the number of nodes in the arena, placed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates an unplaced leaf task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::EmptyName`] when the name is blank.
    pub fn create_leaf(&mut self, task: NewTask) -> TaskTreeResult<NodeHandle> {
        self.insert(task, TaskKind::Leaf)
    }

    /// Creates an unplaced composite task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::EmptyName`] when the name is blank.
    pub fn create_composite(&mut self, task: NewTask) -> TaskTreeResult<NodeHandle> {
        self.insert(
            task,
            TaskKind::Composite {
                children: Vec::new(),
            },
        )
    }

    fn insert(&mut self, task: NewTask, kind: TaskKind) -> TaskTreeResult<NodeHandle> {
        let handle = NodeHandle::from_index(self.nodes.len());
        self.nodes.push(TaskNode::new(handle, task, kind)?);
        Ok(handle)
    }

    /// Returns the node addressed by `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn node(&self, handle: NodeHandle) -> TaskTreeResult<&TaskNode> {
        self.nodes
            .get(handle.index())
            .ok_or(TaskTreeError::UnknownNode(handle))
    }

    fn node_mut(&mut self, handle: NodeHandle) -> TaskTreeResult<&mut TaskNode> {
        self.nodes
            .get_mut(handle.index())
            .ok_or(TaskTreeError::UnknownNode(handle))
    }

    /// Declares an unplaced node a root and allocates its id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::AlreadyPlaced`] if the node already has an
    /// id, or an allocator error.
    pub fn declare_root(&mut self, handle: NodeHandle) -> TaskTreeResult<TaskId> {
        self.ensure_unplaced(handle)?;
        let id = self.allocator.allocate_root_id()?;
        let node = self.node_mut(handle)?;
        node.set_placement(Placement::Root);
        node.set_id(id);
        debug!(task_id = id.value(), name = node.name(), "declared root task");
        Ok(id)
    }

    /// Attaches an unplaced node under a composite and allocates its id.
    ///
    /// The child is linked and appended first, then its id is computed from
    /// the parent's id. If allocation fails the link is undone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::NotComposite`] for leaf parents,
    /// [`TaskTreeError::ParentUnresolved`] when the parent has no id yet,
    /// [`TaskTreeError::AlreadyPlaced`] when the child already has an id, or
    /// an allocator error such as [`TaskTreeError::ChildCapacityExceeded`].
    pub fn attach_child(&mut self, parent: NodeHandle, child: NodeHandle) -> TaskTreeResult<TaskId> {
        let parent_node = self.node(parent)?;
        if !parent_node.is_composite() {
            return Err(TaskTreeError::NotComposite(parent));
        }
        let parent_id = parent_node
            .id()
            .ok_or(TaskTreeError::ParentUnresolved(parent))?;
        self.ensure_unplaced(child)?;

        self.link(parent, child)?;
        match self.allocator.allocate_child_id(parent_id) {
            Ok(id) => {
                let node = self.node_mut(child)?;
                node.set_id(id);
                debug!(
                    parent_id = parent_id.value(),
                    task_id = id.value(),
                    name = node.name(),
                    "attached child task"
                );
                Ok(id)
            }
            Err(err) => {
                self.unlink(parent, child, Placement::Unplaced)?;
                Err(err)
            }
        }
    }

    /// Removes a child from its parent's children.
    ///
    /// The child keeps its id and its own subtree; ids are never recycled.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::NotAChild`] if `child` is not currently
    /// attached under `parent`.
    pub fn detach_child(&mut self, parent: NodeHandle, child: NodeHandle) -> TaskTreeResult<()> {
        if self.node(child)?.parent() != Some(parent) {
            return Err(TaskTreeError::NotAChild { parent, child });
        }
        self.unlink(parent, child, Placement::Detached)?;
        debug!(%parent, %child, "detached child task");
        Ok(())
    }

    fn ensure_unplaced(&self, handle: NodeHandle) -> TaskTreeResult<()> {
        match self.node(handle)?.placement() {
            Placement::Unplaced => Ok(()),
            Placement::Root | Placement::Child { .. } | Placement::Detached => {
                Err(TaskTreeError::AlreadyPlaced(handle))
            }
        }
    }

    fn link(&mut self, parent: NodeHandle, child: NodeHandle) -> TaskTreeResult<()> {
        self.node_mut(child)?
            .set_placement(Placement::Child { parent });
        self.node_mut(parent)?
            .children_mut()
            .ok_or(TaskTreeError::NotComposite(parent))?
            .push(child);
        Ok(())
    }

    fn unlink(
        &mut self,
        parent: NodeHandle,
        child: NodeHandle,
        placement: Placement,
    ) -> TaskTreeResult<()> {
        let children = self
            .node_mut(parent)?
            .children_mut()
            .ok_or(TaskTreeError::NotComposite(parent))?;
        let position = children
            .iter()
            .position(|candidate| *candidate == child)
            .ok_or(TaskTreeError::NotAChild { parent, child })?;
        children.remove(position);
        self.node_mut(child)?.set_placement(placement);
        Ok(())
    }

    /// Returns the id of a placed node.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::Unplaced`] for unplaced nodes.
    pub fn id_of(&self, handle: NodeHandle) -> TaskTreeResult<TaskId> {
        self.node(handle)?
            .id()
            .ok_or(TaskTreeError::Unplaced(handle))
    }

    /// Returns the name of a node.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn name_of(&self, handle: NodeHandle) -> TaskTreeResult<&str> {
        Ok(self.node(handle)?.name())
    }

    /// Returns the parent of a node, or `None` for roots and unattached
    /// nodes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn parent_of(&self, handle: NodeHandle) -> TaskTreeResult<Option<NodeHandle>> {
        Ok(self.node(handle)?.parent())
    }

    /// Returns the id of a node's parent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::NoParent`] for roots and unattached nodes.
    pub fn parent_id_of(&self, handle: NodeHandle) -> TaskTreeResult<TaskId> {
        let parent = self
            .parent_of(handle)?
            .ok_or(TaskTreeError::NoParent(handle))?;
        self.id_of(parent)
    }

    /// Returns the children of a node in attachment order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn children_of(&self, handle: NodeHandle) -> TaskTreeResult<&[NodeHandle]> {
        Ok(self.node(handle)?.children())
    }

    /// Finds the first node carrying `id`.
    #[must_use]
    pub fn find_by_id(&self, id: TaskId) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find(|node| node.id() == Some(id))
            .map(TaskNode::handle)
    }

    /// Returns every root task in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.is_root())
            .map(TaskNode::handle)
    }

    /// Walks the subtree rooted at `start` depth-first, pre-order.
    ///
    /// Each node is visited before its descendants and siblings are visited
    /// in attachment order. The walk keeps no state between calls.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles or
    /// [`TaskTreeError::TemplateRender`] when the line template is invalid.
    pub fn traverse(&self, start: NodeHandle) -> TaskTreeResult<Vec<TraversalEntry>> {
        let environment = Environment::new();
        let template = environment
            .template_from_str(&self.line_template)
            .map_err(|err| TaskTreeError::TemplateRender(err.to_string()))?;

        let mut entries = Vec::new();
        let mut pending = vec![(start, 0_usize)];
        while let Some((handle, depth)) = pending.pop() {
            let node = self.node(handle)?;
            let id = node.id();
            let line = template
                .render(context! {
                    indent => INDENT.repeat(depth),
                    depth => depth,
                    id => id.map_or_else(|| "-".to_owned(), |value| value.to_string()),
                    name => node.name(),
                })
                .map_err(|err| TaskTreeError::TemplateRender(err.to_string()))?;
            entries.push(TraversalEntry {
                node: handle,
                id,
                depth,
                line,
            });
            let next_depth = depth.saturating_add(1);
            pending.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (*child, next_depth)),
            );
        }
        Ok(entries)
    }

    /// Renames a node.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::EmptyName`] when the name is blank.
    pub fn rename(&mut self, handle: NodeHandle, name: impl Into<String>) -> TaskTreeResult<()> {
        self.node_mut(handle)?.rename(name.into())
    }

    /// Sets or clears a node's due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn set_due_date(
        &mut self,
        handle: NodeHandle,
        due_date: Option<NaiveDate>,
    ) -> TaskTreeResult<()> {
        self.node_mut(handle)?.set_due_date(due_date);
        Ok(())
    }

    /// Sets or clears a node's assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn assign(&mut self, handle: NodeHandle, assignee: Option<MemberId>) -> TaskTreeResult<()> {
        self.node_mut(handle)?.set_assignee(assignee);
        Ok(())
    }

    /// Attaches an issue to a node.
    ///
    /// The issue's parent task is set to `handle` and every watcher
    /// registered on the task is subscribed to it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn add_issue(&mut self, handle: NodeHandle, mut issue: Issue) -> TaskTreeResult<IssueId> {
        let node = self.node_mut(handle)?;
        issue.set_parent_task(Some(handle));
        for watcher in node.watchers().observers() {
            issue.subscribe(Arc::clone(watcher));
        }
        let id = issue.id();
        debug!(%handle, issue_id = %id, "added issue to task");
        node.issues_mut().push(issue);
        Ok(id)
    }

    /// Detaches an issue from a node and returns it with its parent task
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownIssue`] if the issue is not attached.
    pub fn remove_issue(&mut self, handle: NodeHandle, issue: IssueId) -> TaskTreeResult<Issue> {
        let issues = self.node_mut(handle)?.issues_mut();
        let position = issues
            .iter()
            .position(|candidate| candidate.id() == issue)
            .ok_or(TaskTreeError::UnknownIssue {
                node: handle,
                issue,
            })?;
        let mut removed = issues.remove(position);
        removed.set_parent_task(None);
        Ok(removed)
    }

    /// Returns the issues attached to a node. Empty when there are none.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn issues_of(&self, handle: NodeHandle) -> TaskTreeResult<&[Issue]> {
        Ok(self.node(handle)?.issues())
    }

    /// Returns one issue attached to a node.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownIssue`] if the issue is not attached.
    pub fn issue(&self, handle: NodeHandle, issue: IssueId) -> TaskTreeResult<&Issue> {
        self.node(handle)?
            .issues()
            .iter()
            .find(|candidate| candidate.id() == issue)
            .ok_or(TaskTreeError::UnknownIssue {
                node: handle,
                issue,
            })
    }

    /// Returns one issue attached to a node for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownIssue`] if the issue is not attached.
    pub fn issue_mut(&mut self, handle: NodeHandle, issue: IssueId) -> TaskTreeResult<&mut Issue> {
        self.node_mut(handle)?
            .issues_mut()
            .iter_mut()
            .find(|candidate| candidate.id() == issue)
            .ok_or(TaskTreeError::UnknownIssue {
                node: handle,
                issue,
            })
    }

    /// Registers a task-level watcher under `team`.
    ///
    /// Watchers are subscribed to issues added to the task afterwards.
    /// Returns `false` if the observer is already registered for the team.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn watch(
        &mut self,
        handle: NodeHandle,
        team: TeamId,
        observer: Arc<dyn IssueObserver>,
    ) -> TaskTreeResult<bool> {
        Ok(self.node_mut(handle)?.watchers_mut().watch(team, observer))
    }

    /// Removes a task-level watcher from every team.
    ///
    /// Each removed registration also drops one subscription of the watcher
    /// from every issue attached to the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn unwatch(&mut self, handle: NodeHandle, key: ObserverKey) -> TaskTreeResult<bool> {
        let node = self.node_mut(handle)?;
        let removed = node.watchers_mut().unwatch(key);
        for issue in node.issues_mut() {
            for _ in 0..removed {
                issue.unsubscribe(key);
            }
        }
        debug!(%handle, observer = %key, removed, "removed task watcher");
        Ok(removed > 0)
    }

    /// Removes all task-level watchers registered under `team` and drops
    /// their subscriptions from every issue attached to the task.
    ///
    /// Returns the number of watchers removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn unwatch_team(&mut self, handle: NodeHandle, team: TeamId) -> TaskTreeResult<usize> {
        let node = self.node_mut(handle)?;
        let removed = node.watchers_mut().unwatch_team(team);
        for issue in node.issues_mut() {
            for watcher in &removed {
                issue.unsubscribe(watcher.observer_key());
            }
        }
        debug!(%handle, %team, removed = removed.len(), "removed team watchers");
        Ok(removed.len())
    }

    /// Returns the task-level watcher registry of a node.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTreeError::UnknownNode`] for foreign handles.
    pub fn watchers_of(&self, handle: NodeHandle) -> TaskTreeResult<&ObserverRegistry> {
        Ok(self.node(handle)?.watchers())
    }
}

impl Default for TaskTree {
    fn default() -> Self {
        Self::from_validated(&TrackerConfig::default())
    }
}
