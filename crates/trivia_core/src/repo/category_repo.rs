//! Category catalog contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide read access to the fixed category set.
//! - Keep initialization-time seeding off the read-only contract.
//!
//! # Invariants
//! - `list_all` returns categories in insertion order.
//! - Absence is reported as `None`/`false`, never as an error.

use crate::db::DbError;
use crate::model::category::{Category, CategoryId};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};

/// Result type for catalog operations. Catalog reads can only fail at the
/// storage transport layer.
pub type CatalogResult<T> = Result<T, DbError>;

/// Read-only catalog of question categories.
pub trait CategoryCatalog {
    fn list_all(&self) -> CatalogResult<Vec<Category>>;
    fn exists(&self, id: CategoryId) -> CatalogResult<bool>;
    fn get(&self, id: CategoryId) -> CatalogResult<Option<Category>>;
}

/// SQLite-backed category catalog.
pub struct SqliteCategoryCatalog<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryCatalog<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts one category and returns it with its assigned ID.
    ///
    /// Not part of [`CategoryCatalog`]: the catalog is read-only after
    /// initialization, so only bootstrap code reaches this.
    pub fn insert(&self, label: &str) -> CatalogResult<Category> {
        self.conn.execute(
            "INSERT INTO categories (label) VALUES (?1);",
            params![label],
        )?;
        Ok(Category {
            id: self.conn.last_insert_rowid(),
            label: label.to_string(),
        })
    }

    /// Seeds the catalog with the given labels in order.
    ///
    /// # Side effects
    /// - Emits a `catalog_seed` logging event with the inserted count.
    pub fn seed(&self, labels: &[&str]) -> CatalogResult<Vec<Category>> {
        let mut categories = Vec::with_capacity(labels.len());
        for label in labels {
            categories.push(self.insert(label)?);
        }
        info!(
            "event=catalog_seed module=repo status=ok count={}",
            categories.len()
        );
        Ok(categories)
    }
}

impl CategoryCatalog for SqliteCategoryCatalog<'_> {
    fn list_all(&self) -> CatalogResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, label FROM categories ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();

        while let Some(row) = rows.next()? {
            categories.push(Category {
                id: row.get("id")?,
                label: row.get("label")?,
            });
        }

        Ok(categories)
    }

    fn exists(&self, id: CategoryId) -> CatalogResult<bool> {
        let found: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1);",
            params![id],
            |row| row.get(0),
        )?;
        Ok(found == 1)
    }

    fn get(&self, id: CategoryId) -> CatalogResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, label FROM categories WHERE id = ?1;",
                params![id],
                |row| {
                    Ok(Category {
                        id: row.get("id")?,
                        label: row.get("label")?,
                    })
                },
            )
            .optional()?;
        Ok(category)
    }
}

/// Category labels shipped with a fresh installation.
pub const DEFAULT_CATEGORY_LABELS: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];
