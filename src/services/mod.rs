//! Business logic services.
//!
//! Every operation is a stateless function over a caller-supplied
//! collection of [`Book`](crate::models::Book) records; the caller owns the
//! collection and schedules persistence.

pub mod catalog;
pub mod loans;

pub use catalog::{add_book, next_book_id, search_books};
pub use loans::{borrow_book, list_overdue, return_book, BorrowOutcome, DEFAULT_LOAN_DAYS};
