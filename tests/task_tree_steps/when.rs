//! When steps for task tree BDD scenarios.

use std::sync::Arc;

use super::world::TreeWorld;
use eyre::WrapErr;
use gropius::issue::{
    adapters::memory::RecordingObserver,
    domain::{Issue, IssueStatus},
};
use gropius::task::domain::NewTask;
use rstest_bdd_macros::when;

#[when(r#"the tree under "{name}" is traversed"#)]
fn traverse_tree(world: &mut TreeWorld, name: String) -> Result<(), eyre::Report> {
    let start = world.task(&name)?;
    let entries = world.tree.traverse(start).wrap_err("traverse tree")?;
    let names = entries
        .iter()
        .map(|entry| world.tree.name_of(entry.node).map(str::to_owned))
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("resolve traversed names")?;
    world.last_traversal = names;
    Ok(())
}

#[when(r#"an issue "{title}" is raised against "{task}""#)]
fn raise_issue(world: &mut TreeWorld, title: String, task: String) -> Result<(), eyre::Report> {
    let handle = world.task(&task)?;
    let issue = Issue::new(title, "", &world.clock).wrap_err("create issue")?;
    let issue_id = world
        .tree
        .add_issue(handle, issue)
        .wrap_err("attach issue")?;
    world.current_issue = Some((handle, issue_id));
    Ok(())
}

#[when(r#"observers "{first}" and "{second}" subscribe to the issue"#)]
fn observers_subscribe(
    world: &mut TreeWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let (handle, issue_id) = world.issue()?;
    for name in [first, second] {
        let observer = Arc::new(RecordingObserver::new());
        world
            .tree
            .issue_mut(handle, issue_id)
            .wrap_err("find issue")?
            .subscribe(Arc::clone(&observer) as _);
        world.observers.insert(name, observer);
    }
    Ok(())
}

#[when("the issue is resolved")]
fn resolve_issue(world: &mut TreeWorld) -> Result<(), eyre::Report> {
    let (handle, issue_id) = world.issue()?;
    let TreeWorld { tree, clock, .. } = world;
    tree.issue_mut(handle, issue_id)
        .wrap_err("find issue")?
        .set_status(IssueStatus::Resolved, clock);
    Ok(())
}

#[when(r#""{parent}" receives {count:u64} children"#)]
fn attach_many_children(
    world: &mut TreeWorld,
    parent: String,
    count: u64,
) -> Result<(), eyre::Report> {
    let parent_handle = world.task(&parent)?;
    for index in 1..=count {
        let child = world
            .tree
            .create_leaf(NewTask::new(format!("{parent} #{index}")))
            .wrap_err("create child task")?;
        world
            .tree
            .attach_child(parent_handle, child)
            .wrap_err_with(|| format!("attach child {index}"))?;
    }
    Ok(())
}

#[when(r#"another child is attached to "{parent}""#)]
fn attach_another_child(world: &mut TreeWorld, parent: String) -> Result<(), eyre::Report> {
    let parent_handle = world.task(&parent)?;
    let child = world
        .tree
        .create_leaf(NewTask::new(format!("{parent} overflow")))
        .wrap_err("create overflow child")?;
    world.last_attach = Some(world.tree.attach_child(parent_handle, child));
    Ok(())
}
