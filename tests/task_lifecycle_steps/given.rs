//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::services::{CreateTaskRequest, TaskPatch};

fn create(world: &mut TaskLifecycleWorld, request: CreateTaskRequest) -> Result<(), eyre::Report> {
    let created = run_async(world.lifecycle.create_task(request)).wrap_err("create task")?;
    world.current_task = Some(created);
    Ok(())
}

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    create(world, CreateTaskRequest::new(title))
}

#[given(r#"a task requested as "{status}" titled "{title}""#)]
fn task_requested_with_status(
    world: &mut TaskLifecycleWorld,
    status: String,
    title: String,
) -> Result<(), eyre::Report> {
    create(world, CreateTaskRequest::new(title).with_status(status))
}

#[given(r#"a task described as "{description}" titled "{title}""#)]
fn task_with_description(
    world: &mut TaskLifecycleWorld,
    description: String,
    title: String,
) -> Result<(), eyre::Report> {
    create(
        world,
        CreateTaskRequest::new(title).with_description(description),
    )
}

fn move_current(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.current()?.id();
    let moved = run_async(
        world
            .lifecycle
            .update_task_partial(id, TaskPatch::new().with_status(status)),
    )
    .wrap_err("move task in scenario setup")?;
    world.current_task = Some(moved);
    Ok(())
}

fn trash_current(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current()?.id();
    let trashed =
        run_async(world.lifecycle.soft_delete_task(id)).wrap_err("trash task in scenario setup")?;
    world.current_task = Some(trashed);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_moved_to(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    move_current(world, status)
}

#[given("the task has been trashed")]
fn task_has_been_trashed(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    trash_current(world)
}

#[given(r#"{count:u64} tasks in status "{status}""#)]
fn tasks_in_status(
    world: &mut TaskLifecycleWorld,
    count: u64,
    status: String,
) -> Result<(), eyre::Report> {
    for index in 0..count {
        create(world, CreateTaskRequest::new(format!("{status} task {index}")))?;
        if status != "pending" {
            move_current(world, status.clone())?;
        }
    }
    Ok(())
}

#[given("1 trashed task")]
fn one_trashed_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    create(world, CreateTaskRequest::new("trashed task"))?;
    trash_current(world)
}
