//! Then steps for task tree BDD scenarios.

use super::world::TreeWorld;
use gropius::issue::domain::IssueAttribute;
use gropius::task::domain::TaskTreeError;
use rstest_bdd_macros::then;

#[then(r#"the traversal visits "{order}""#)]
fn traversal_visits(world: &TreeWorld, order: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = order.split(',').map(|name| name.trim().to_owned()).collect();
    if world.last_traversal != expected {
        return Err(eyre::eyre!(
            "expected traversal {expected:?}, found {:?}",
            world.last_traversal
        ));
    }
    Ok(())
}

#[then(r#"task "{name}" has id {id:u64}"#)]
fn task_has_id(world: &TreeWorld, name: String, id: u64) -> Result<(), eyre::Report> {
    let handle = world.task(&name)?;
    let actual = world
        .tree
        .id_of(handle)
        .map_err(|err| eyre::eyre!("task '{name}' has no id: {err}"))?;
    if actual.value() != id {
        return Err(eyre::eyre!("expected task '{name}' to have id {id}, found {actual}"));
    }
    Ok(())
}

#[then(r#"observer "{name}" received one "{attribute}" notification with value "{value}""#)]
fn observer_received_one(
    world: &TreeWorld,
    name: String,
    attribute: String,
    value: String,
) -> Result<(), eyre::Report> {
    let observer = world
        .observers
        .get(&name)
        .ok_or_else(|| eyre::eyre!("unknown observer '{name}' in scenario world"))?;
    let changes = observer.changes();
    let [change] = changes.as_slice() else {
        return Err(eyre::eyre!(
            "expected one notification for '{name}', found {}",
            changes.len()
        ));
    };
    if change.attribute().as_str() != attribute || change.value() != value {
        return Err(eyre::eyre!(
            "expected ({attribute}, {value}), found ({}, {})",
            change.attribute(),
            change.value()
        ));
    }
    if change.attribute() != IssueAttribute::Status {
        return Err(eyre::eyre!("expected a status notification"));
    }
    Ok(())
}

#[then("the issue has no subscribers")]
fn issue_has_no_subscribers(world: &TreeWorld) -> Result<(), eyre::Report> {
    let (handle, issue_id) = world.issue()?;
    let issue = world
        .tree
        .issue(handle, issue_id)
        .map_err(|err| eyre::eyre!("issue lookup failed: {err}"))?;
    if issue.subscriber_count() != 0 {
        return Err(eyre::eyre!(
            "expected no subscribers, found {}",
            issue.subscriber_count()
        ));
    }
    Ok(())
}

#[then("the attachment fails because the allocator capacity is exceeded")]
fn attachment_exceeds_capacity(world: &TreeWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_attach
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing attachment result in scenario world"))?;
    if !matches!(result, Err(TaskTreeError::ChildCapacityExceeded { .. })) {
        return Err(eyre::eyre!("expected a capacity error, got {result:?}"));
    }
    Ok(())
}
