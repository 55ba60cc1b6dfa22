//! Question store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/delete and the filter primitives over stored questions.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `QuestionDraft::validate()` before SQL mutations.
//! - Every listing read orders rows by `id ASC`, so one snapshot yields a
//!   stable sequence for slice and count computations.

use crate::db::DbError;
use crate::model::category::CategoryId;
use crate::model::question::{Question, QuestionDraft, QuestionId, QuestionValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const QUESTION_SELECT_SQL: &str = "SELECT
    id,
    question,
    answer,
    category_id,
    difficulty
FROM questions";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for question persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(QuestionValidationError),
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<QuestionValidationError> for StoreError {
    fn from(value: QuestionValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store interface for question records.
///
/// `delete` reports a missing ID as `Ok(false)`; mapping that to a
/// not-found outcome is the caller's decision.
pub trait QuestionStore {
    fn create(&self, draft: &QuestionDraft) -> StoreResult<Question>;
    fn delete(&self, id: QuestionId) -> StoreResult<bool>;
    fn list_all(&self) -> StoreResult<Vec<Question>>;
    fn filter_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<Question>>;
    fn filter_by_substring(&self, term: &str) -> StoreResult<Vec<Question>>;
    fn filter_excluding_ids(&self, exclude: &HashSet<QuestionId>) -> StoreResult<Vec<Question>>;
    fn filter_by_category_excluding_ids(
        &self,
        category_id: CategoryId,
        exclude: &HashSet<QuestionId>,
    ) -> StoreResult<Vec<Question>>;
}

/// SQLite-backed question store.
pub struct SqliteQuestionStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn category_exists(&self, category_id: CategoryId) -> StoreResult<bool> {
        let found: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1);",
            params![category_id],
            |row| row.get(0),
        )?;
        Ok(found == 1)
    }

    fn query_filtered(
        &self,
        category_id: Option<CategoryId>,
        exclude: &HashSet<QuestionId>,
    ) -> StoreResult<Vec<Question>> {
        let mut sql = format!("{QUESTION_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category_id) = category_id {
            sql.push_str(" AND category_id = ?");
            bind_values.push(Value::Integer(category_id));
        }

        if !exclude.is_empty() {
            // Sorted for a deterministic statement text and bind order.
            let mut excluded_ids: Vec<QuestionId> = exclude.iter().copied().collect();
            excluded_ids.sort_unstable();

            let placeholders = vec!["?"; excluded_ids.len()].join(", ");
            sql.push_str(&format!(" AND id NOT IN ({placeholders})"));
            bind_values.extend(excluded_ids.into_iter().map(Value::Integer));
        }

        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut questions = Vec::new();

        while let Some(row) = rows.next()? {
            questions.push(parse_question_row(row)?);
        }

        Ok(questions)
    }
}

impl QuestionStore for SqliteQuestionStore<'_> {
    fn create(&self, draft: &QuestionDraft) -> StoreResult<Question> {
        draft.validate()?;

        if !self.category_exists(draft.category_id)? {
            return Err(QuestionValidationError::UnknownCategory(draft.category_id).into());
        }

        // Single-statement insert: the write is atomic, a failure leaves no
        // partial record behind.
        self.conn.execute(
            "INSERT INTO questions (question, answer, category_id, difficulty)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.text.as_str(),
                draft.answer.as_str(),
                draft.category_id,
                draft.difficulty,
            ],
        )?;

        Ok(Question {
            id: self.conn.last_insert_rowid(),
            text: draft.text.clone(),
            answer: draft.answer.clone(),
            category_id: draft.category_id,
            difficulty: draft.difficulty,
        })
    }

    fn delete(&self, id: QuestionId) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1;", params![id])?;
        Ok(changed > 0)
    }

    fn list_all(&self) -> StoreResult<Vec<Question>> {
        self.query_filtered(None, &HashSet::new())
    }

    fn filter_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<Question>> {
        self.query_filtered(Some(category_id), &HashSet::new())
    }

    fn filter_by_substring(&self, term: &str) -> StoreResult<Vec<Question>> {
        // Containment match on the question text only, never the answer.
        // `instr` over lowered text keeps `%`/`_` in the term literal.
        let mut stmt = self.conn.prepare(&format!(
            "{QUESTION_SELECT_SQL}
             WHERE instr(lower(question), lower(?1)) > 0
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query(params![term])?;
        let mut questions = Vec::new();

        while let Some(row) = rows.next()? {
            questions.push(parse_question_row(row)?);
        }

        Ok(questions)
    }

    fn filter_excluding_ids(&self, exclude: &HashSet<QuestionId>) -> StoreResult<Vec<Question>> {
        self.query_filtered(None, exclude)
    }

    fn filter_by_category_excluding_ids(
        &self,
        category_id: CategoryId,
        exclude: &HashSet<QuestionId>,
    ) -> StoreResult<Vec<Question>> {
        self.query_filtered(Some(category_id), exclude)
    }
}

fn parse_question_row(row: &Row<'_>) -> StoreResult<Question> {
    Ok(Question {
        id: row.get("id")?,
        text: row.get("question")?,
        answer: row.get("answer")?,
        category_id: row.get("category_id")?,
        difficulty: row.get("difficulty")?,
    })
}
