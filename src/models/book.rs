//! Book (catalog record) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A single catalog record.
///
/// Loan state spans three fields: an available book has `borrower` and
/// `due_date` both `None`, a borrowed one has both set. [`Book::check_out`]
/// and [`Book::check_in`] are the only mutators, so the fields never drift
/// into a partial state.
///
/// Records read from externally produced files may omit keys; missing text
/// fields read as empty, a missing `available` reads as `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub borrower: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

fn default_available() -> bool {
    true
}

impl Book {
    /// Put the book on loan to `borrower` until `due_date`.
    pub fn check_out(&mut self, borrower: &str, due_date: NaiveDate) {
        self.available = false;
        self.borrower = Some(borrower.to_string());
        self.due_date = Some(due_date);
    }

    /// Put the book back on the shelf, clearing the loan fields.
    pub fn check_in(&mut self) {
        self.available = true;
        self.borrower = None;
        self.due_date = None;
    }

    /// Whether the book is out on loan with a due date strictly before
    /// `today`. A stale due date on an available book never counts.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) if !self.available => due < today,
            _ => false,
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(custom(function = "not_blank", message = "Title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Author must not be empty"))]
    pub author: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}
