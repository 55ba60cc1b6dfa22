//! Question domain model and write-input validation.
//!
//! # Responsibility
//! - Define the canonical question record and its draft (pre-insert) shape.
//! - Reject malformed write input before it reaches persistence.
//!
//! # Invariants
//! - `id` is assigned by the store on creation and never reused.
//! - A persisted question always references a category that existed at
//!   creation time.

use crate::model::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a question record.
pub type QuestionId = i64;

/// Canonical question record.
///
/// Serialized field names match the external wire schema: `text` travels
/// as `question` and `category_id` as `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned stable ID.
    pub id: QuestionId,
    /// The question prompt shown to players.
    #[serde(rename = "question")]
    pub text: String,
    /// The accepted answer.
    pub answer: String,
    /// Category the question belongs to.
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    /// Difficulty rating, 1 is easiest.
    pub difficulty: i64,
}

/// Write input for creating a question, before an ID exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    pub difficulty: i64,
}

impl QuestionDraft {
    pub fn new(
        text: impl Into<String>,
        answer: impl Into<String>,
        category_id: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            category_id,
            difficulty,
        }
    }

    /// Checks the field-level rules that do not require catalog access.
    ///
    /// # Contract
    /// - `text` and `answer` must contain non-whitespace content.
    /// - `difficulty` must be at least 1.
    /// - Category existence is checked by the store, which owns catalog
    ///   access; see [`QuestionValidationError::UnknownCategory`].
    pub fn validate(&self) -> Result<(), QuestionValidationError> {
        if self.text.trim().is_empty() {
            return Err(QuestionValidationError::EmptyText);
        }
        if self.answer.trim().is_empty() {
            return Err(QuestionValidationError::EmptyAnswer);
        }
        if self.difficulty < 1 {
            return Err(QuestionValidationError::NonPositiveDifficulty(
                self.difficulty,
            ));
        }
        Ok(())
    }
}

/// Validation failure for question write input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    /// Question text is empty or whitespace-only.
    EmptyText,
    /// Answer is empty or whitespace-only.
    EmptyAnswer,
    /// Difficulty below the minimum rating of 1.
    NonPositiveDifficulty(i64),
    /// Referenced category does not exist in the catalog.
    UnknownCategory(CategoryId),
}

impl Display for QuestionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "question text must not be empty"),
            Self::EmptyAnswer => write!(f, "answer must not be empty"),
            Self::NonPositiveDifficulty(value) => {
                write!(f, "difficulty must be at least 1, got {value}")
            }
            Self::UnknownCategory(id) => write!(f, "unknown category: {id}"),
        }
    }
}

impl Error for QuestionValidationError {}

#[cfg(test)]
mod tests {
    use super::{QuestionDraft, QuestionValidationError};

    #[test]
    fn valid_draft_passes() {
        let draft = QuestionDraft::new("Who painted the Mona Lisa?", "Da Vinci", 2, 1);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_text_is_rejected() {
        let draft = QuestionDraft::new("   ", "Da Vinci", 2, 1);
        assert_eq!(draft.validate(), Err(QuestionValidationError::EmptyText));
    }

    #[test]
    fn blank_answer_is_rejected() {
        let draft = QuestionDraft::new("Who painted the Mona Lisa?", "", 2, 1);
        assert_eq!(draft.validate(), Err(QuestionValidationError::EmptyAnswer));
    }

    #[test]
    fn non_positive_difficulty_is_rejected() {
        let draft = QuestionDraft::new("Who painted the Mona Lisa?", "Da Vinci", 2, 0);
        assert_eq!(
            draft.validate(),
            Err(QuestionValidationError::NonPositiveDifficulty(0))
        );
    }
}
