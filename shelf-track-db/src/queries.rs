//! Read queries for the catalog database.
//!
//! Provides lookup by id, title search, the joined catalog listing, and
//! summary counts.

use rusqlite::{Connection, OptionalExtension, Row, params};
use shelf_track_catalog::{Author, AuthorId, Book, BookDetails, BookId};

use crate::operations::OperationError;

// ── Row Mapping ─────────────────────────────────────────────────────────────

fn book_id_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<BookId> {
    let raw: u16 = row.get(idx)?;
    BookId::new(raw).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, raw.into()))
}

fn author_id_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<AuthorId> {
    let raw: u16 = row.get(idx)?;
    AuthorId::new(raw).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, raw.into()))
}

fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: book_id_at(row, 0)?,
        title: row.get(1)?,
        author_id: author_id_at(row, 2)?,
        quantity: row.get(3)?,
    })
}

fn row_to_details(row: &Row<'_>) -> rusqlite::Result<BookDetails> {
    Ok(BookDetails {
        id: book_id_at(row, 0)?,
        title: row.get(1)?,
        author_name: row.get(2)?,
        author_country: row.get(3)?,
        quantity: row.get(4)?,
    })
}

// ── Author Lookups ──────────────────────────────────────────────────────────

/// Find an author by id.
pub fn find_author(conn: &Connection, id: AuthorId) -> Result<Option<Author>, OperationError> {
    conn.query_row(
        "SELECT id, name, country FROM author WHERE id = ?1",
        params![id.value()],
        |row| {
            Ok(Author {
                id: author_id_at(row, 0)?,
                name: row.get(1)?,
                country: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(Into::into)
}

/// The author a book references, or `None` if the book does not exist
/// (or carries no author reference).
pub fn resolve_author_for_book(
    conn: &Connection,
    book_id: BookId,
) -> Result<Option<AuthorId>, OperationError> {
    let raw: Option<Option<u16>> = conn
        .query_row(
            "SELECT authorID FROM book WHERE id = ?1",
            params![book_id.value()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(raw.flatten().and_then(AuthorId::new))
}

pub(crate) fn count_books_by_author(
    conn: &Connection,
    author_id: AuthorId,
) -> Result<u32, OperationError> {
    let count: u32 = conn.query_row(
        "SELECT COUNT(*) FROM book WHERE authorID = ?1",
        params![author_id.value()],
        |row| row.get(0),
    )?;
    Ok(count)
}

// ── Book Lookups ────────────────────────────────────────────────────────────

/// Find a book by id.
pub fn find_book(conn: &Connection, id: BookId) -> Result<Option<Book>, OperationError> {
    conn.query_row(
        "SELECT id, title, authorID, qty FROM book WHERE id = ?1",
        params![id.value()],
        row_to_book,
    )
    .optional()
    .map_err(Into::into)
}

/// A single book joined with its author, as shown before an update.
pub fn book_details(
    conn: &Connection,
    id: BookId,
) -> Result<Option<BookDetails>, OperationError> {
    conn.query_row(
        "SELECT book.id, book.title, author.name, author.country, book.qty
         FROM book
         INNER JOIN author ON book.authorID = author.id
         WHERE book.id = ?1",
        params![id.value()],
        row_to_details,
    )
    .optional()
    .map_err(Into::into)
}

/// Escape `%`, `_` and the escape character itself for a `LIKE ... ESCAPE '\'`.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Search books by title substring.
///
/// Matching is case-insensitive (ASCII case folding, as SQLite's `LIKE`
/// does). An empty fragment matches every book. No matches is an empty
/// vector, not an error.
pub fn search_books(conn: &Connection, fragment: &str) -> Result<Vec<Book>, OperationError> {
    let pattern = format!("%{}%", escape_like(fragment));
    let mut stmt = conn.prepare(
        r"SELECT id, title, authorID, qty
          FROM book WHERE title LIKE ?1 ESCAPE '\' ORDER BY id",
    )?;
    let rows = stmt.query_map(params![pattern], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Every book joined with its author's name and country.
pub fn list_all(conn: &Connection) -> Result<Vec<BookDetails>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT book.id, book.title, author.name, author.country, book.qty
         FROM book
         INNER JOIN author ON book.authorID = author.id
         ORDER BY book.id",
    )?;
    let rows = stmt.query_map([], row_to_details)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Stats ───────────────────────────────────────────────────────────────────

/// Summary counts for the catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub authors: u32,
    pub books: u32,
    /// Sum of `qty` over all books.
    pub total_quantity: i64,
}

/// Get summary counts for the catalog.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let authors: u32 = conn.query_row("SELECT COUNT(*) FROM author", [], |row| row.get(0))?;
    let books: u32 = conn.query_row("SELECT COUNT(*) FROM book", [], |row| row.get(0))?;
    let total_quantity: i64 =
        conn.query_row("SELECT COALESCE(SUM(qty), 0) FROM book", [], |row| row.get(0))?;

    Ok(CatalogStats {
        authors,
        books,
        total_quantity,
    })
}
