//! Trivia query engine.
//!
//! # Responsibility
//! - Compose catalog and store primitives into list, search, category and
//!   quiz-draw operations with one consistent empty-result policy each.
//! - Map store outcomes onto the service error taxonomy.
//!
//! # Invariants
//! - `list_questions` computes slice and total from the same snapshot.
//! - Empty-result policy differs by operation on purpose: full listing and
//!   search treat "nothing" as `NotFound`, category listing treats it as a
//!   valid empty page once the category itself exists.
//! - `draw_quiz_question` never returns a question whose ID is in the
//!   caller's exclusion set.

use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use crate::model::question::{Question, QuestionDraft, QuestionId, QuestionValidationError};
use crate::repo::category_repo::CategoryCatalog;
use crate::repo::question_repo::{QuestionStore, StoreError};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Page size applied by [`TriviaService::list_questions`].
pub const QUESTIONS_PER_PAGE: usize = 10;

// Fixed labels reported when no single category scopes the result.
const ALL_QUESTIONS_CURRENT_CATEGORY: &str = "entertainment";
const SEARCH_CURRENT_CATEGORY: &str = "a";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error taxonomy exposed to the transport boundary.
#[derive(Debug)]
pub enum ServiceError {
    /// Requested data is absent where presence was expected.
    NotFound,
    /// Write input is malformed or references a missing category.
    Validation(QuestionValidationError),
    /// Reserved for concurrent-write conflicts; no current operation
    /// raises it.
    Conflict,
    /// Storage transport failure.
    Db(DbError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "requested resource not found"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict => write!(f, "conflicting concurrent modification"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound | Self::Conflict => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Validation(err) => Self::Validation(err),
            StoreError::Db(err) => Self::Db(err),
        }
    }
}

impl From<DbError> for ServiceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Candidate scope for a quiz draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Draw from every stored question.
    All,
    /// Draw from one category, which must exist in the catalog.
    Category(CategoryId),
}

/// Source of the index chosen by a quiz draw.
///
/// Injected so tests can substitute a deterministic picker while the
/// production path stays uniformly random.
pub trait IndexPicker {
    /// Returns an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformIndexPicker;

impl IndexPicker for UniformIndexPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// One page of the full question listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Count of all stored questions, not just this page.
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: String,
}

/// Result of a free-text search over question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatches {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Fixed placeholder; a free-text search has no single scoping
    /// category.
    pub current_category: String,
}

/// Questions belonging to one existing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryQuestions {
    /// May be empty; category existence was already verified.
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: String,
}

/// Query engine over a question store and a category catalog.
///
/// Stateless between calls; all record state lives behind the injected
/// repositories.
pub struct TriviaService<S: QuestionStore, C: CategoryCatalog, P: IndexPicker = UniformIndexPicker>
{
    store: S,
    catalog: C,
    picker: P,
}

impl<S: QuestionStore, C: CategoryCatalog> TriviaService<S, C> {
    /// Creates a service drawing quiz questions uniformly at random.
    pub fn new(store: S, catalog: C) -> Self {
        Self::with_picker(store, catalog, UniformIndexPicker)
    }
}

impl<S: QuestionStore, C: CategoryCatalog, P: IndexPicker> TriviaService<S, C, P> {
    /// Creates a service with a caller-provided draw picker.
    pub fn with_picker(store: S, catalog: C, picker: P) -> Self {
        Self {
            store,
            catalog,
            picker,
        }
    }

    /// Lists every category in insertion order.
    ///
    /// # Contract
    /// - An empty catalog is `NotFound`, so clients can distinguish "no
    ///   categories configured" from a transient failure.
    pub fn list_categories(&self) -> ServiceResult<Vec<Category>> {
        let categories = self.catalog.list_all()?;
        if categories.is_empty() {
            return Err(ServiceError::NotFound);
        }
        Ok(categories)
    }

    /// Returns one page of the full question listing.
    ///
    /// # Contract
    /// - Pages are 1-based; values below 1 are treated as the first page.
    /// - `total_questions` counts the whole store, independent of `page`.
    /// - A page past the end of the data is `NotFound`, never an empty
    ///   success page.
    pub fn list_questions(&self, page: u32) -> ServiceResult<QuestionPage> {
        let page = page.max(1) as usize;
        let all = self.store.list_all()?;

        let start = (page - 1) * QUESTIONS_PER_PAGE;
        if start >= all.len() {
            return Err(ServiceError::NotFound);
        }
        let end = (start + QUESTIONS_PER_PAGE).min(all.len());

        Ok(QuestionPage {
            total_questions: all.len(),
            questions: all[start..end].to_vec(),
            categories: self.catalog.list_all()?,
            current_category: ALL_QUESTIONS_CURRENT_CATEGORY.to_string(),
        })
    }

    /// Searches question text by case-insensitive containment.
    ///
    /// # Contract
    /// - Matches question text only, never answers.
    /// - No match is `NotFound`.
    pub fn search(&self, term: &str) -> ServiceResult<SearchMatches> {
        let questions = self.store.filter_by_substring(term)?;
        if questions.is_empty() {
            return Err(ServiceError::NotFound);
        }
        Ok(SearchMatches {
            total_questions: questions.len(),
            questions,
            current_category: SEARCH_CURRENT_CATEGORY.to_string(),
        })
    }

    /// Lists the questions of one existing category.
    ///
    /// # Contract
    /// - A category ID absent from the catalog is `NotFound`.
    /// - An existing category with zero questions is a valid empty result.
    pub fn list_by_category(&self, category_id: CategoryId) -> ServiceResult<CategoryQuestions> {
        let Some(category) = self.catalog.get(category_id)? else {
            return Err(ServiceError::NotFound);
        };

        let questions = self.store.filter_by_category(category_id)?;
        Ok(CategoryQuestions {
            total_questions: questions.len(),
            questions,
            categories: self.catalog.list_all()?,
            current_category: category.label,
        })
    }

    /// Draws one question outside the caller's already-asked set.
    ///
    /// # Contract
    /// - `QuizScope::Category` requires the category to exist; the all
    ///   scope applies no existence check.
    /// - An exhausted candidate set is `Ok(None)`, so the caller can tell
    ///   end-of-quiz from failure.
    /// - Read-only: recording the drawn ID into the exclusion set is the
    ///   caller's job on the next call.
    pub fn draw_quiz_question(
        &mut self,
        scope: QuizScope,
        previous: &HashSet<QuestionId>,
    ) -> ServiceResult<Option<Question>> {
        let mut candidates = match scope {
            QuizScope::All => self.store.filter_excluding_ids(previous)?,
            QuizScope::Category(category_id) => {
                if !self.catalog.exists(category_id)? {
                    return Err(ServiceError::NotFound);
                }
                self.store
                    .filter_by_category_excluding_ids(category_id, previous)?
            }
        };

        if candidates.is_empty() {
            return Ok(None);
        }

        let index = self.picker.pick_index(candidates.len());
        Ok(Some(candidates.swap_remove(index)))
    }

    /// Creates a question after store-side validation.
    pub fn create_question(&self, draft: &QuestionDraft) -> ServiceResult<Question> {
        Ok(self.store.create(draft)?)
    }

    /// Deletes a question by ID, returning the ID on success.
    ///
    /// # Contract
    /// - A missing ID is `NotFound`; the store itself reports it as a
    ///   no-op.
    pub fn delete_question(&self, id: QuestionId) -> ServiceResult<QuestionId> {
        if self.store.delete(id)? {
            Ok(id)
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
