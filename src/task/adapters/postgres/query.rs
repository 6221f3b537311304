//! SQL text and bind parameters for filtered, ranked task reads.
//!
//! Kept free of connections so the generated statements can be checked in
//! unit tests.
//!
//! Keyword patterns carry the trimmed term as typed and are matched with
//! `ILIKE`, so case folding happens once, under the database's rules. For
//! ASCII text this agrees with the in-memory store; for other scripts the
//! outcome follows the server locale rather than Rust's `to_lowercase`.

use crate::task::{
    aggregate::Window,
    ports::TaskQuery,
    search::{KeywordMatch, SearchTerm, TaskFilter, TaskSort, Visibility},
};
use diesel::pg::Pg;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Text};

/// Columns selected for [`super::models::TaskRow`].
const TASK_COLUMNS: &str = "id, title, description, status, is_deleted, deleted_at, \
                            completed_at, created_at, updated_at";

/// Bind parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SqlParam {
    Text(String),
    BigInt(i64),
}

/// Statement text with positional parameters `$1..$n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    fn bind(&mut self, param: SqlParam) -> usize {
        self.params.push(param);
        self.params.len()
    }

    /// Builds a boxed diesel query with every parameter bound in order.
    pub fn into_query(self) -> BoxedSqlQuery<'static, Pg, SqlQuery> {
        self.params.into_iter().fold(
            diesel::sql_query(self.sql).into_boxed::<Pg>(),
            |query, param| match param {
                SqlParam::Text(value) => query.bind::<Text, _>(value),
                SqlParam::BigInt(value) => query.bind::<BigInt, _>(value),
            },
        )
    }
}

/// `SELECT` of matching rows in query order.
pub(super) fn select_tasks(query: &TaskQuery) -> Statement {
    let mut statement = Statement::default();
    let predicate = where_clause(&mut statement, &query.filter);
    let order = order_clause(&mut statement, &query.sort);
    statement.sql = format!("SELECT {TASK_COLUMNS} FROM tasks{predicate} ORDER BY {order}");
    if let Some(window) = query.window {
        let paging = window_clause(&mut statement, window);
        statement.sql.push_str(&paging);
    }
    statement
}

/// `SELECT COUNT(*)` over matching rows.
pub(super) fn count_tasks(filter: &TaskFilter) -> Statement {
    let mut statement = Statement::default();
    let predicate = where_clause(&mut statement, filter);
    statement.sql = format!("SELECT COUNT(*) AS count FROM tasks{predicate}");
    statement
}

/// Per-status `COUNT(*)` over matching rows.
pub(super) fn count_tasks_by_status(filter: &TaskFilter) -> Statement {
    let mut statement = Statement::default();
    let predicate = where_clause(&mut statement, filter);
    statement.sql =
        format!("SELECT status, COUNT(*) AS count FROM tasks{predicate} GROUP BY status");
    statement
}

fn where_clause(statement: &mut Statement, filter: &TaskFilter) -> String {
    let mut conditions = Vec::new();
    match filter.visibility {
        Visibility::Active => conditions.push("is_deleted = FALSE".to_owned()),
        Visibility::Trashed => conditions.push("is_deleted = TRUE".to_owned()),
        Visibility::All => {}
    }
    if let Some(status) = filter.status {
        let index = statement.bind(SqlParam::Text(status.as_str().to_owned()));
        conditions.push(format!("status = ${index}"));
    }
    if let Some(keyword) = &filter.keyword {
        let pattern = match keyword.mode {
            KeywordMatch::Contains => contains_pattern(&keyword.term),
            KeywordMatch::Prefix => prefix_pattern(&keyword.term),
        };
        let index = statement.bind(SqlParam::Text(pattern));
        conditions.push(format!(
            "(title ILIKE ${index} ESCAPE '\\' \
             OR description ILIKE ${index} ESCAPE '\\')"
        ));
    }

    if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    }
}

fn order_clause(statement: &mut Statement, sort: &TaskSort) -> String {
    let primary = match sort {
        TaskSort::CreatedDesc => None,
        TaskSort::DeletedDesc => Some("deleted_at DESC NULLS LAST".to_owned()),
        TaskSort::Relevance(term) => {
            let prefix = statement.bind(SqlParam::Text(prefix_pattern(term)));
            let contains = statement.bind(SqlParam::Text(contains_pattern(term)));
            Some(format!(
                "CASE WHEN title ILIKE ${prefix} ESCAPE '\\' THEN 3 \
                 WHEN description ILIKE ${prefix} ESCAPE '\\' THEN 2 \
                 WHEN title ILIKE ${contains} ESCAPE '\\' THEN 1 \
                 WHEN description ILIKE ${contains} ESCAPE '\\' THEN 0 \
                 ELSE -1 END DESC"
            ))
        }
    };

    let tail = "created_at DESC, id ASC";
    primary.map_or_else(|| tail.to_owned(), |primary| format!("{primary}, {tail}"))
}

fn window_clause(statement: &mut Statement, window: Window) -> String {
    let limit = statement.bind(SqlParam::BigInt(saturating_i64(window.limit)));
    let offset = statement.bind(SqlParam::BigInt(saturating_i64(window.skip)));
    format!(" LIMIT ${limit} OFFSET ${offset}")
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Escapes `LIKE` metacharacters in a search term.
pub(super) fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn prefix_pattern(term: &SearchTerm) -> String {
    format!("{}%", escape_like(term.as_str()))
}

fn contains_pattern(term: &SearchTerm) -> String {
    format!("%{}%", escape_like(term.as_str()))
}
