//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `trivia_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use trivia_core::db::open_db_in_memory;
use trivia_core::{CategoryCatalog, SqliteCategoryCatalog, DEFAULT_CATEGORY_LABELS};

fn main() {
    println!("trivia_core version={}", trivia_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("database bootstrap failed: {err}");
            std::process::exit(1);
        }
    };

    let catalog = SqliteCategoryCatalog::new(&conn);
    let seeded = catalog
        .seed(DEFAULT_CATEGORY_LABELS)
        .and_then(|_| catalog.list_all());

    match seeded {
        Ok(categories) => println!("seeded categories={}", categories.len()),
        Err(err) => {
            eprintln!("catalog seed failed: {err}");
            std::process::exit(1);
        }
    }
}
