//! Write operations for books and authors.

use rusqlite::{Connection, ErrorCode, params};
use shelf_track_catalog::{
    Author, AuthorId, BookId, BookUpdate, NewBook, ValidationError, validate_text,
};
use thiserror::Error;

use crate::queries::{count_books_by_author, find_author, resolve_author_for_book};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Author ID {0} does not exist in the author table")]
    AuthorNotFound(AuthorId),
    #[error("Book ID {0} not found")]
    BookNotFound(BookId),
    #[error("Book ID {0} already exists")]
    BookExists(BookId),
    #[error("Author ID {0} already exists")]
    AuthorExists(AuthorId),
    #[error("Author ID {id} is still referenced by {books} book(s)")]
    AuthorInUse { id: AuthorId, books: u32 },
}

/// True when `err` is a primary key or unique constraint failure.
fn is_duplicate_key(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && matches!(
                    e.extended_code,
                    rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                        | rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}

// ── Book Operations ─────────────────────────────────────────────────────────

/// Insert a new book.
///
/// The referenced author must already exist, and the book id must be unused.
/// Nothing is written when either check fails.
pub fn add_book(conn: &Connection, book: &NewBook) -> Result<(), OperationError> {
    let title = validate_text("Book title", &book.title)?;

    if find_author(conn, book.author_id)?.is_none() {
        log::warn!(
            "Rejected book {}: author {} does not exist",
            book.id,
            book.author_id
        );
        return Err(OperationError::AuthorNotFound(book.author_id));
    }

    conn.execute(
        "INSERT INTO book (id, title, authorID, qty) VALUES (?1, ?2, ?3, ?4)",
        params![book.id.value(), title, book.author_id.value(), book.quantity],
    )
    .map_err(|e| {
        if is_duplicate_key(&e) {
            OperationError::BookExists(book.id)
        } else {
            e.into()
        }
    })?;

    log::debug!("Inserted book {} ({})", book.id, title);
    Ok(())
}

/// Apply a single-field update to a book.
///
/// Title and quantity change the book row. Author name and country change
/// the row of the author the book references.
pub fn update_book(
    conn: &Connection,
    id: BookId,
    update: &BookUpdate,
) -> Result<(), OperationError> {
    match update {
        BookUpdate::Title(title) => {
            let title = validate_text("Book title", title)?;
            let changed = conn.execute(
                "UPDATE book SET title = ?2 WHERE id = ?1",
                params![id.value(), title],
            )?;
            if changed == 0 {
                return Err(OperationError::BookNotFound(id));
            }
        }
        BookUpdate::Quantity(qty) => {
            let changed = conn.execute(
                "UPDATE book SET qty = ?2 WHERE id = ?1",
                params![id.value(), qty],
            )?;
            if changed == 0 {
                return Err(OperationError::BookNotFound(id));
            }
        }
        BookUpdate::AuthorName(name) => {
            let name = validate_text("Author name", name)?;
            let author = resolve_author_for_book(conn, id)?
                .ok_or(OperationError::BookNotFound(id))?;
            let changed = conn.execute(
                "UPDATE author SET name = ?2 WHERE id = ?1",
                params![author.value(), name],
            )?;
            if changed == 0 {
                return Err(OperationError::AuthorNotFound(author));
            }
        }
        BookUpdate::AuthorCountry(country) => {
            let country = validate_text("Author country", country)?;
            let author = resolve_author_for_book(conn, id)?
                .ok_or(OperationError::BookNotFound(id))?;
            let changed = conn.execute(
                "UPDATE author SET country = ?2 WHERE id = ?1",
                params![author.value(), country],
            )?;
            if changed == 0 {
                return Err(OperationError::AuthorNotFound(author));
            }
        }
    }

    log::debug!("Updated {} of book {}", update.field().label(), id);
    Ok(())
}

/// Delete a book. Returns whether a row was removed; deleting a missing
/// book is not an error.
pub fn delete_book(conn: &Connection, id: BookId) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM book WHERE id = ?1", params![id.value()])?;
    if changed == 0 {
        log::debug!("Delete of book {} matched no rows", id);
    } else {
        log::debug!("Deleted book {}", id);
    }
    Ok(changed > 0)
}

// ── Author Operations ───────────────────────────────────────────────────────

/// Insert a new author.
pub fn insert_author(conn: &Connection, author: &Author) -> Result<(), OperationError> {
    let name = validate_text("Author name", &author.name)?;
    let country = validate_text("Author country", &author.country)?;

    conn.execute(
        "INSERT INTO author (id, name, country) VALUES (?1, ?2, ?3)",
        params![author.id.value(), name, country],
    )
    .map_err(|e| {
        if is_duplicate_key(&e) {
            OperationError::AuthorExists(author.id)
        } else {
            e.into()
        }
    })?;

    log::debug!("Inserted author {} ({})", author.id, name);
    Ok(())
}

/// Delete an author that no book references.
///
/// Authors with books are never removed; the caller must delete or reassign
/// those books first.
pub fn delete_author(conn: &Connection, id: AuthorId) -> Result<(), OperationError> {
    let books = count_books_by_author(conn, id)?;
    if books > 0 {
        return Err(OperationError::AuthorInUse { id, books });
    }

    let changed = conn.execute("DELETE FROM author WHERE id = ?1", params![id.value()])?;
    if changed == 0 {
        return Err(OperationError::AuthorNotFound(id));
    }

    log::debug!("Deleted author {}", id);
    Ok(())
}
