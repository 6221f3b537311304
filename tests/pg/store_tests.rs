//! Store contract tests against `PostgreSQL`.

use std::sync::Arc;

use super::helpers::{BoxError, prepare_store};
use rstest::rstest;
use tasktrack::{
    config::TaskConfig,
    task::{
        adapters::clock::SteppingClock,
        domain::{TaskId, TaskStatus},
        ports::{TaskStore, TaskStoreError},
        services::{
            CreateTaskRequest, TaskLifecycleService, TaskListRequest, TaskPatch, TaskQueryService,
        },
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_round_trips_through_postgres() -> Result<(), BoxError> {
    let Some(prepared) = prepare_store()? else {
        return Ok(());
    };
    let store = Arc::new(prepared.store.clone());
    let lifecycle =
        TaskLifecycleService::new(Arc::clone(&store), Arc::new(SteppingClock::default()));

    let created = lifecycle
        .create_task(CreateTaskRequest::new("Persist me").with_description("50% done"))
        .await?;
    let completed = lifecycle
        .update_task_partial(created.id(), TaskPatch::new().with_status("completed"))
        .await?;
    let trashed = lifecycle.soft_delete_task(created.id()).await?;

    assert!(completed.completed_at().is_some());
    assert_eq!(lifecycle.get_task(created.id()).await?, trashed);

    lifecycle.hard_delete_task(created.id()).await?;
    assert!(matches!(
        store.delete(created.id()).await,
        Err(TaskStoreError::NotFound(_))
    ));
    assert_eq!(store.find_by_id(TaskId::new()).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ranked_search_and_summary_match_the_in_memory_semantics() -> Result<(), BoxError> {
    let Some(prepared) = prepare_store()? else {
        return Ok(());
    };
    let store = Arc::new(prepared.store.clone());
    let lifecycle =
        TaskLifecycleService::new(Arc::clone(&store), Arc::new(SteppingClock::default()));
    let query = TaskQueryService::new(Arc::clone(&store), TaskConfig::default());

    lifecycle
        .create_task(CreateTaskRequest::new("Dessert").with_description("baked apple"))
        .await?;
    lifecycle.create_task(CreateTaskRequest::new("Pineapple")).await?;
    let pie = lifecycle.create_task(CreateTaskRequest::new("Apple pie")).await?;
    lifecycle.create_task(CreateTaskRequest::new("100%_literal")).await?;
    lifecycle
        .update_task_partial(pie.id(), TaskPatch::new().with_status("in-progress"))
        .await?;

    let page = query
        .list_tasks(&TaskListRequest::new().with_keyword("APPLE"))
        .await?;
    let titles: Vec<&str> = page.items.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, vec!["Apple pie", "Pineapple", "Dessert"]);

    let literal = query
        .list_tasks(&TaskListRequest::new().with_keyword("%_"))
        .await?;
    assert_eq!(literal.pagination.total, 1);

    let summary = query.summary().await?;
    assert_eq!(summary.count(TaskStatus::Pending), 3);
    assert_eq!(summary.count(TaskStatus::InProgress), 1);
    assert_eq!(summary.total, 4);
    Ok(())
}
