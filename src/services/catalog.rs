//! Catalog management: adding and searching books

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

/// Allocate the next free book id.
///
/// Scans the whole collection for the maximum id; the maximum is a property
/// of the id set, not of list position, so reordering the catalog or seeding
/// it with non-sequential ids cannot produce a collision.
pub fn next_book_id(books: &[Book]) -> i32 {
    books.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
}

/// Append a new book to the catalog and return the stored record.
///
/// Validates before mutating: a blank title or author leaves the catalog
/// untouched. Title and author are stored trimmed.
pub fn add_book(books: &mut Vec<Book>, request: CreateBook) -> AppResult<&mut Book> {
    request
        .validate()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

    let book = Book {
        id: next_book_id(books),
        title: request.title.trim().to_string(),
        author: request.author.trim().to_string(),
        available: true,
        borrower: None,
        due_date: None,
    };

    tracing::debug!(id = book.id, title = %book.title, "adding book to catalog");

    let idx = books.len();
    books.push(book);
    Ok(&mut books[idx])
}

/// Return the books whose title or author contains `query`,
/// case-insensitively, in catalog order.
///
/// An empty or all-whitespace query matches nothing rather than everything.
pub fn search_books<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    books
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
        })
        .collect()
}
