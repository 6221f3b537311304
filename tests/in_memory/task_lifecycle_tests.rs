//! In-memory integration tests for task lifecycle operations.

use std::str::FromStr;

use super::helpers::{Harness, harness};
use eyre::Result;
use rstest::rstest;
use tasktrack::task::{
    domain::{TaskId, TaskStatus},
    services::{CreateTaskRequest, ErrorKind, TaskListRequest, TaskPatch, TaskServiceError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_timestamp_tracks_status_through_updates(harness: Harness) -> Result<()> {
    let created = harness
        .lifecycle
        .create_task(CreateTaskRequest::new("Release notes"))
        .await?;
    let id = created.id();

    let steps = [
        ("in-progress", TaskStatus::InProgress),
        ("completed", TaskStatus::Completed),
        ("in-progress", TaskStatus::InProgress),
        ("pending", TaskStatus::Pending),
        ("completed", TaskStatus::Completed),
    ];
    for (raw, expected) in steps {
        let updated = harness
            .lifecycle
            .update_task_partial(id, TaskPatch::new().with_status(raw))
            .await?;
        eyre::ensure!(updated.status() == expected, "status should be {raw}");
        eyre::ensure!(
            updated.completed_at().is_some() == (expected == TaskStatus::Completed),
            "completion time must track status after moving to {raw}"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn partial_update_leaves_omitted_fields(harness: Harness) -> Result<()> {
    let created = harness
        .lifecycle
        .create_task(CreateTaskRequest::new("Draft").with_description("keep me"))
        .await?;

    let updated = harness
        .lifecycle
        .update_task_partial(created.id(), TaskPatch::new().with_title("Final"))
        .await?;

    assert_eq!(updated.title().as_str(), "Final");
    assert_eq!(updated.description().as_str(), "keep me");
    assert_eq!(updated.status(), TaskStatus::Pending);
    assert!(updated.updated_at() > created.updated_at());
    assert_eq!(harness.lifecycle.get_task(created.id()).await?, updated);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn trashed_task_stays_retrievable_until_hard_delete(harness: Harness) -> Result<()> {
    let created = harness
        .lifecycle
        .create_task(CreateTaskRequest::new("Scratch"))
        .await?;
    let id = created.id();

    harness.lifecycle.soft_delete_task(id).await?;
    let fetched = harness.lifecycle.get_task(id).await?;
    assert!(fetched.is_deleted());

    let trash = harness.query.list_trash(&TaskListRequest::new()).await?;
    assert_eq!(trash.pagination.total, 1);

    harness.lifecycle.hard_delete_task(id).await?;
    let everything = harness
        .query
        .list_tasks(&TaskListRequest::new().including_deleted(true))
        .await?;
    assert_eq!(everything.pagination.total, 0);
    assert!(matches!(
        harness.lifecycle.get_task(id).await,
        Err(TaskServiceError::NotFound(_))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_identifier_is_not_found(harness: Harness) {
    let id = TaskId::new();

    let results = [
        harness.lifecycle.get_task(id).await.map(|_| ()),
        harness.lifecycle.soft_delete_task(id).await.map(|_| ()),
        harness.lifecycle.restore_task(id).await.map(|_| ()),
        harness.lifecycle.hard_delete_task(id).await,
        harness
            .lifecycle
            .update_task_full(id, TaskPatch::new().with_title("x"))
            .await
            .map(|_| ()),
    ];

    for result in results {
        assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::NotFound));
    }
}

#[rstest]
fn malformed_identifier_is_reported_as_store_failure() {
    let err = TaskId::from_str("42").map_err(TaskServiceError::from);
    assert_eq!(err.map_err(|err| err.kind()), Err(ErrorKind::Store));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn garbage_paging_values_fall_back_to_defaults(harness: Harness) -> Result<()> {
    for index in 0..12 {
        harness
            .lifecycle
            .create_task(CreateTaskRequest::new(format!("Item {index}")))
            .await?;
    }

    let page = harness
        .query
        .list_tasks(&TaskListRequest::new().with_page("zero").with_limit(-4))
        .await?;

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.pagination.current, 1);
    assert_eq!(page.pagination.pages, 2);
    Ok(())
}
