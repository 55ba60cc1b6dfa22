//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Question writes must pass `QuestionDraft::validate()` before SQL
//!   mutations.
//! - The category catalog contract is read-only; seeding lives on the
//!   concrete implementation only.

pub mod category_repo;
pub mod question_repo;
