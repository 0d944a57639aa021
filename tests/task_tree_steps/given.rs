//! Given steps for task tree BDD scenarios.

use super::world::TreeWorld;
use eyre::WrapErr;
use gropius::task::domain::NewTask;
use rstest_bdd_macros::given;

#[given(r#"a root task "{name}""#)]
fn root_task(world: &mut TreeWorld, name: String) -> Result<(), eyre::Report> {
    let handle = world
        .tree
        .create_composite(NewTask::new(name.clone()))
        .wrap_err("create root task")?;
    world.tree.declare_root(handle).wrap_err("declare root")?;
    world.tasks.insert(name, handle);
    Ok(())
}

#[given(r#"a child task "{child}" under "{parent}""#)]
fn child_task(world: &mut TreeWorld, child: String, parent: String) -> Result<(), eyre::Report> {
    let parent_handle = world.task(&parent)?;
    let handle = world
        .tree
        .create_composite(NewTask::new(child.clone()))
        .wrap_err("create child task")?;
    world
        .tree
        .attach_child(parent_handle, handle)
        .wrap_err("attach child task")?;
    world.tasks.insert(child, handle);
    Ok(())
}
