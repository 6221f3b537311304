//! Query orchestration: listings, trash, suggestions, and summary counts.

use crate::config::TaskConfig;
use crate::task::{
    aggregate::{Page, PageRequest, TaskSummary, Window},
    domain::{Task, TaskStatus},
    ports::{TaskQuery, TaskStore},
    search::{KeywordMatch, SearchTerm, TaskFilter, TaskSort, Visibility},
    services::TaskServiceResult,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Listing parameters as received from a caller.
///
/// Values stay raw so the service applies one set of defaulting rules: an
/// unknown status is ignored and unusable paging values fall back to the
/// configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListRequest {
    keyword: Option<String>,
    status: Option<String>,
    page: Option<String>,
    limit: Option<String>,
    include_deleted: bool,
}

impl TaskListRequest {
    /// Creates a request for the first page of active tasks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the status filter.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the page number.
    #[must_use]
    pub fn with_page(mut self, page: impl ToString) -> Self {
        self.page = Some(page.to_string());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: impl ToString) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    /// Includes trashed tasks in a regular listing.
    #[must_use]
    pub fn including_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = include_deleted;
        self
    }

    fn term(&self) -> Option<SearchTerm> {
        SearchTerm::parse(self.keyword.as_deref())
    }

    fn status(&self) -> Option<TaskStatus> {
        TaskStatus::parse_filter(self.status.as_deref())
    }

    fn page_request(&self, config: &TaskConfig) -> PageRequest {
        PageRequest::parse(self.page.as_deref(), self.limit.as_deref(), config)
    }
}

/// Field that satisfied a suggestion prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionMatch {
    /// The title starts with the query.
    Title,
    /// The description starts with the query.
    Description,
}

/// Type-ahead suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Matching task.
    pub task: Task,
    /// Which field matched; the title wins when both do.
    pub match_type: SuggestionMatch,
}

/// Read-side service for listings and aggregates.
#[derive(Clone)]
pub struct TaskQueryService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    config: TaskConfig,
}

impl<S> TaskQueryService<S>
where
    S: TaskStore,
{
    /// Creates a query service.
    #[must_use]
    pub const fn new(store: Arc<S>, config: TaskConfig) -> Self {
        Self { store, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// Lists tasks, ranked by relevance when a keyword is given and newest
    /// first otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::services::TaskServiceError::Store`] when the
    /// store fails.
    #[instrument(skip_all)]
    pub async fn list_tasks(&self, request: &TaskListRequest) -> TaskServiceResult<Page<Task>> {
        let term = request.term();
        let sort = TaskSort::for_keyword(term.as_ref());
        let filter = TaskFilter::new(Visibility::from_include_deleted(request.include_deleted))
            .with_status(request.status())
            .with_keyword(term, KeywordMatch::Contains);
        self.paged(filter, sort, request.page_request(&self.config))
            .await
    }

    /// Lists trashed tasks, most recently deleted first.
    ///
    /// The `include_deleted` flag of the request is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::services::TaskServiceError::Store`] when the
    /// store fails.
    #[instrument(skip_all)]
    pub async fn list_trash(&self, request: &TaskListRequest) -> TaskServiceResult<Page<Task>> {
        let filter = TaskFilter::new(Visibility::Trashed)
            .with_status(request.status())
            .with_keyword(request.term(), KeywordMatch::Contains);
        self.paged(
            filter,
            TaskSort::DeletedDesc,
            request.page_request(&self.config),
        )
        .await
    }

    /// Suggests active tasks whose title or description starts with `query`.
    ///
    /// A blank query yields no suggestions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::services::TaskServiceError::Store`] when the
    /// store fails.
    #[instrument(skip_all)]
    pub async fn suggest(&self, query: &str) -> TaskServiceResult<Vec<Suggestion>> {
        let Some(term) = SearchTerm::parse(Some(query)) else {
            return Ok(Vec::new());
        };

        let filter = TaskFilter::new(Visibility::Active)
            .with_keyword(Some(term.clone()), KeywordMatch::Prefix);
        let window = Window {
            skip: 0,
            limit: self.config.suggestion_limit,
        };
        let suggestions =
            TaskQuery::new(filter, TaskSort::Relevance(term.clone())).with_window(window);
        let tasks = self.store.find_many(&suggestions).await?;
        debug!(count = tasks.len(), "suggestions found");

        Ok(tasks
            .into_iter()
            .map(|task| {
                let title_match = task
                    .title()
                    .as_str()
                    .to_lowercase()
                    .starts_with(term.folded());
                let match_type = if title_match {
                    SuggestionMatch::Title
                } else {
                    SuggestionMatch::Description
                };
                Suggestion { task, match_type }
            })
            .collect())
    }

    /// Counts active tasks per status.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::services::TaskServiceError::Store`] when the
    /// store fails.
    #[instrument(skip_all)]
    pub async fn summary(&self) -> TaskServiceResult<TaskSummary> {
        let counts = self
            .store
            .count_by_status(&TaskFilter::new(Visibility::Active))
            .await?;
        Ok(TaskSummary::from_counts(counts))
    }

    async fn paged(
        &self,
        filter: TaskFilter,
        sort: TaskSort,
        page: PageRequest,
    ) -> TaskServiceResult<Page<Task>> {
        let total = self.store.count(&filter).await?;
        let query = TaskQuery::new(filter, sort).with_window(page.window());
        let items = self.store.find_many(&query).await?;
        debug!(total, returned = items.len(), page = page.page(), "listing served");
        Ok(Page {
            items,
            pagination: page.page_info(total),
        })
    }
}
