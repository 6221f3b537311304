//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use tasktrack::task::{
    domain::TaskStatus,
    services::{ErrorKind, TaskListRequest},
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.current()?;
    eyre::ensure!(
        task.status() == expected,
        "expected status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.current()?;
    eyre::ensure!(
        task.title().as_str() == title,
        "expected title {title}, found {}",
        task.title()
    );
    Ok(())
}

#[then("the task has no completion time")]
fn task_has_no_completion_time(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.current()?.completed_at().is_none(),
        "expected completion time to be cleared"
    );
    Ok(())
}

#[then("the update fails with an invalid transition error")]
fn update_fails_with_invalid_transition(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;
    match result {
        Err(err) if err.kind() == ErrorKind::InvalidTransition => Ok(()),
        other => Err(eyre::eyre!(
            "expected invalid transition error, got {other:?}"
        )),
    }
}

fn listing_total(
    world: &TaskLifecycleWorld,
    request: &TaskListRequest,
    trash: bool,
) -> Result<u64, eyre::Report> {
    let result = if trash {
        run_async(world.query.list_trash(request))
    } else {
        run_async(world.query.list_tasks(request))
    };
    let page = result.wrap_err("list tasks")?;
    Ok(page.pagination.total)
}

#[then("the default listing total is {count:u64}")]
fn default_listing_total(world: &TaskLifecycleWorld, count: u64) -> Result<(), eyre::Report> {
    let total = listing_total(world, &TaskListRequest::new(), false)?;
    eyre::ensure!(total == count, "expected {count} listed tasks, found {total}");
    Ok(())
}

#[then("the listing including deleted tasks total is {count:u64}")]
fn full_listing_total(world: &TaskLifecycleWorld, count: u64) -> Result<(), eyre::Report> {
    let total = listing_total(world, &TaskListRequest::new().including_deleted(true), false)?;
    eyre::ensure!(total == count, "expected {count} listed tasks, found {total}");
    Ok(())
}

#[then("the trash listing total is {count:u64}")]
fn trash_listing_total(world: &TaskLifecycleWorld, count: u64) -> Result<(), eyre::Report> {
    let total = listing_total(world, &TaskListRequest::new(), true)?;
    eyre::ensure!(total == count, "expected {count} trashed tasks, found {total}");
    Ok(())
}

#[then(r#"the results are "{titles}""#)]
fn results_are(world: &TaskLifecycleWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    let actual: Vec<&str> = world
        .search_results
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then(
    "the summary counts {pending:u64} pending, {in_progress:u64} in progress, {completed:u64} completed and {total:u64} in total"
)]
fn summary_counts(
    world: &TaskLifecycleWorld,
    pending: u64,
    in_progress: u64,
    completed: u64,
    total: u64,
) -> Result<(), eyre::Report> {
    let summary = run_async(world.query.summary()).wrap_err("summarise tasks")?;
    eyre::ensure!(
        (summary.pending, summary.in_progress, summary.completed, summary.total)
            == (pending, in_progress, completed, total),
        "unexpected summary {summary:?}"
    );
    Ok(())
}
