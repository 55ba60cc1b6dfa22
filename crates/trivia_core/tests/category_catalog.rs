use trivia_core::db::open_db_in_memory;
use trivia_core::{CategoryCatalog, SqliteCategoryCatalog, DEFAULT_CATEGORY_LABELS};

#[test]
fn list_all_preserves_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let catalog = SqliteCategoryCatalog::new(&conn);

    catalog.seed(&["Science", "Art", "Geography"]).unwrap();

    let categories = catalog.list_all().unwrap();
    let labels: Vec<&str> = categories
        .iter()
        .map(|category| category.label.as_str())
        .collect();
    assert_eq!(labels, ["Science", "Art", "Geography"]);
}

#[test]
fn seed_assigns_sequential_ids() {
    let conn = open_db_in_memory().unwrap();
    let catalog = SqliteCategoryCatalog::new(&conn);

    let seeded = catalog.seed(DEFAULT_CATEGORY_LABELS).unwrap();

    assert_eq!(seeded.len(), DEFAULT_CATEGORY_LABELS.len());
    for (index, category) in seeded.iter().enumerate() {
        assert_eq!(category.id, index as i64 + 1);
    }
}

#[test]
fn exists_reports_presence_and_absence() {
    let conn = open_db_in_memory().unwrap();
    let catalog = SqliteCategoryCatalog::new(&conn);

    let science = catalog.insert("Science").unwrap();

    assert!(catalog.exists(science.id).unwrap());
    assert!(!catalog.exists(science.id + 1).unwrap());
}

#[test]
fn get_returns_record_or_none() {
    let conn = open_db_in_memory().unwrap();
    let catalog = SqliteCategoryCatalog::new(&conn);

    let art = catalog.insert("Art").unwrap();

    let loaded = catalog.get(art.id).unwrap().unwrap();
    assert_eq!(loaded.label, "Art");

    assert!(catalog.get(999).unwrap().is_none());
}

#[test]
fn empty_catalog_lists_no_categories() {
    let conn = open_db_in_memory().unwrap();
    let catalog = SqliteCategoryCatalog::new(&conn);

    assert!(catalog.list_all().unwrap().is_empty());
}
