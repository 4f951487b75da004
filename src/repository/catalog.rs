//! Catalog snapshot persistence.
//!
//! The whole collection is written and read as one JSON array; there is no
//! incremental or automatic persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::{error::AppResult, models::book::Book};

/// Write the catalog to `path` as a pretty-printed UTF-8 JSON array,
/// replacing any previous content. Non-ASCII text is written literally.
pub fn save_catalog(path: &Path, books: &[Book]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(books)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), count = books.len(), "catalog saved");
    Ok(())
}

/// Read the catalog back from `path`.
///
/// An absent file yields an empty catalog; a present but unparseable file is
/// an error. The two cases must not be conflated.
pub fn load_catalog(path: &Path) -> AppResult<Vec<Book>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "catalog file absent, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let books: Vec<Book> = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.display(), count = books.len(), "catalog loaded");
    Ok(books)
}
