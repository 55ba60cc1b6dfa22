//! Category domain model.
//!
//! Categories are seeded once at store initialization and read-only
//! afterwards; there is no update or delete lifecycle.

use serde::{Deserialize, Serialize};

/// Stable identifier for a category record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CategoryId = i64;

/// A question category as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned stable ID.
    pub id: CategoryId,
    /// Human-readable category name, unique within one catalog.
    pub label: String,
}
