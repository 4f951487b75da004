//! End-to-end catalog tests: operations plus snapshot persistence.

use bookshelf::{
    add_book, borrow_book, list_overdue, load_catalog, return_book, save_catalog, search_books,
    AppError, Book, CreateBook,
};
use chrono::NaiveDate;
use tempfile::tempdir;

fn create(title: &str, author: &str) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        author: author.to_string(),
    }
}

/// Three-book fixture with one active loan, mirroring a realistic catalog.
fn seed_catalog() -> Vec<Book> {
    let mut books = Vec::new();
    add_book(&mut books, create("Dune", "Frank Herbert")).unwrap();
    add_book(&mut books, create("Kürk Mantolu Madonna", "Sabahattin Ali")).unwrap();
    add_book(&mut books, create("1984", "George Orwell")).unwrap();
    assert!(borrow_book(&mut books, 3, "ayse", 14).is_success());
    books
}

#[test]
fn test_round_trip_preserves_every_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let books = seed_catalog();
    save_catalog(&path, &books).unwrap();
    let loaded = load_catalog(&path).unwrap();

    assert_eq!(loaded, books);
}

#[test]
fn test_save_writes_non_ascii_literally() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    save_catalog(&path, &seed_catalog()).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();

    assert!(raw.contains("Kürk Mantolu Madonna"));
    assert!(raw.contains("Sabahattin Ali"));
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    save_catalog(&path, &seed_catalog()).unwrap();

    let mut smaller = Vec::new();
    add_book(&mut smaller, create("Animal Farm", "George Orwell")).unwrap();
    save_catalog(&path, &smaller).unwrap();

    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Animal Farm");
}

#[test]
fn test_load_missing_file_returns_empty_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nothing-here.json");

    let loaded = load_catalog(&path).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_load_malformed_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"id\": 1,").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
}

#[test]
fn test_full_borrow_and_return_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let mut books = seed_catalog();

    // "an" hits both Frank Herbert and Kürk Mantolu Madonna / Sabahattin Ali
    let hits = search_books(&books, "an");
    assert_eq!(hits.len(), 2);

    assert!(borrow_book(&mut books, 1, "mehmet", 7).is_success());
    save_catalog(&path, &books).unwrap();

    let mut reloaded = load_catalog(&path).unwrap();
    assert_eq!(reloaded[0].borrower.as_deref(), Some("mehmet"));

    // with a far-future reference date every open loan is overdue
    let far_future = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
    let overdue_ids: Vec<i32> = list_overdue(&reloaded, Some(far_future))
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(overdue_ids, [1, 3]);

    assert!(return_book(&mut reloaded, 1));
    assert!(return_book(&mut reloaded, 3));
    assert!(list_overdue(&reloaded, Some(far_future)).is_empty());
}
