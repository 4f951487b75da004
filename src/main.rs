//! Bookshelf - library catalog manager
//!
//! Command-line wrapper around the catalog operations: it owns the
//! collection for the duration of one invocation, loading the snapshot
//! before the operation and saving it again after a mutation.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::{
    add_book, borrow_book, list_overdue, load_catalog, return_book, save_catalog, search_books,
    AppConfig, Book, BorrowOutcome, CreateBook,
};

#[derive(Parser)]
#[command(name = "bookshelf", version, about = "Bookshelf - a small library catalog manager")]
struct Cli {
    /// Catalog file to operate on (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a book to the catalog
    Add { title: String, author: String },
    /// Search books by title or author
    Search { query: String },
    /// Borrow a book
    Borrow {
        id: i32,
        username: String,
        /// Loan period in days (defaults to the configured period)
        #[arg(long)]
        days: Option<i64>,
    },
    /// Return a borrowed book
    Return { id: i32 },
    /// List books whose due date has passed
    Overdue {
        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List the whole catalog
    List,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);

    let cli = Cli::parse();
    let path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.catalog.path.clone());

    tracing::debug!(path = %path.display(), "opening catalog");
    let mut books = load_catalog(&path)?;

    match cli.command {
        Command::Add { title, author } => {
            let book = add_book(&mut books, CreateBook { title, author })?;
            let line = format!("Added book #{}: {} by {}", book.id, book.title, book.author);
            save_catalog(&path, &books)?;
            println!("{line}");
        }
        Command::Search { query } => {
            print_books(&search_books(&books, &query), "No matching books");
        }
        Command::Borrow { id, username, days } => {
            let days = days.unwrap_or(config.loans.default_days);
            match borrow_book(&mut books, id, &username, days) {
                BorrowOutcome::Borrowed => {
                    save_catalog(&path, &books)?;
                    println!("Book #{id} borrowed by {username} for {days} days");
                }
                BorrowOutcome::NotFound => bail!("No book with id {id}"),
                BorrowOutcome::Unavailable => bail!("Book #{id} is already on loan"),
            }
        }
        Command::Return { id } => {
            if !return_book(&mut books, id) {
                bail!("No book with id {id}");
            }
            save_catalog(&path, &books)?;
            println!("Book #{id} returned");
        }
        Command::Overdue { today } => {
            print_books(&list_overdue(&books, today), "No overdue books");
        }
        Command::List => {
            let all: Vec<&Book> = books.iter().collect();
            print_books(&all, "Catalog is empty");
        }
    }

    Ok(())
}

/// Initialize tracing on stderr, keeping stdout for command output
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookshelf={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Table row for displaying a book
#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Borrower")]
    borrower: String,
    #[tabled(rename = "Due date")]
    due_date: String,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            status: if book.available {
                "available".to_string()
            } else {
                "on loan".to_string()
            },
            borrower: book.borrower.clone().unwrap_or_default(),
            due_date: book.due_date.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}

fn print_books(books: &[&Book], empty_message: &str) {
    if books.is_empty() {
        println!("{empty_message}");
        return;
    }

    let rows: Vec<BookRow> = books.iter().map(|b| BookRow::from(*b)).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");
}
