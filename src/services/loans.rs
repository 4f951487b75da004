//! Loan management: borrowing, returning and overdue listing

use chrono::NaiveDate;

use crate::{dates, models::book::Book};

/// Loan period applied when the caller does not choose one, in days.
pub const DEFAULT_LOAN_DAYS: i64 = 14;

/// Outcome of a borrow attempt.
///
/// Collapses to the plain success/failure contract through
/// [`BorrowOutcome::is_success`]; the failure variants tell the caller why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum BorrowOutcome {
    Borrowed,
    NotFound,
    Unavailable,
}

impl BorrowOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, BorrowOutcome::Borrowed)
    }
}

/// Put the book with `book_id` on loan to `username` for `days` days.
///
/// Fails without mutating anything when the id is unknown or the book is
/// already out.
pub fn borrow_book(books: &mut [Book], book_id: i32, username: &str, days: i64) -> BorrowOutcome {
    let Some(book) = books.iter_mut().find(|b| b.id == book_id) else {
        return BorrowOutcome::NotFound;
    };
    if !book.available {
        return BorrowOutcome::Unavailable;
    }

    book.check_out(username, dates::due_in_days(days));
    tracing::debug!(id = book_id, borrower = username, days, "book checked out");
    BorrowOutcome::Borrowed
}

/// Put the book with `book_id` back on the shelf.
///
/// Returns `false` only when the id is unknown; returning a book that is
/// already available is a no-op success.
pub fn return_book(books: &mut [Book], book_id: i32) -> bool {
    match books.iter_mut().find(|b| b.id == book_id) {
        Some(book) => {
            book.check_in();
            tracing::debug!(id = book_id, "book checked in");
            true
        }
        None => false,
    }
}

/// Return the books on loan with a due date strictly before `today`, in
/// catalog order. `today` defaults to the current local date.
pub fn list_overdue(books: &[Book], today: Option<NaiveDate>) -> Vec<&Book> {
    let today = today.unwrap_or_else(dates::today);
    books.iter().filter(|b| b.is_overdue(today)).collect()
}
