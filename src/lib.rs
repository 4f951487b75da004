//! Bookshelf - a small library catalog manager
//!
//! An in-memory book catalog with borrowing, searching, overdue listing and
//! JSON snapshot persistence. The operations are stateless functions over a
//! collection of [`Book`](models::Book) records owned by the caller, who
//! decides when to [`load_catalog`] and [`save_catalog`].

pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use models::{Book, CreateBook};
pub use repository::{load_catalog, save_catalog};
pub use services::{
    add_book, borrow_book, list_overdue, next_book_id, return_book, search_books, BorrowOutcome,
    DEFAULT_LOAN_DAYS,
};
