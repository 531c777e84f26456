//! Initial catalog contents.
//!
//! Seeding uses `INSERT OR IGNORE`, so running it on every start-up leaves
//! existing rows (including operator edits) untouched.

use rusqlite::{Connection, params};

use crate::operations::OperationError;

/// `(id, name, country)` for each seeded author.
pub const SEED_AUTHORS: [(u16, &str, &str); 5] = [
    (1290, "Charles Dickens", "England"),
    (8937, "J.K. Rowling", "England"),
    (2356, "C.S. Lewis", "Ireland"),
    (6380, "J.R.R. Tolkien", "South Africa"),
    (5620, "Lewis Carroll", "England"),
];

/// `(id, title, author id, quantity)` for each seeded book.
pub const SEED_BOOKS: [(u16, &str, u16, u32); 5] = [
    (3001, "A Tale of Two Cities", 1290, 30),
    (3002, "Harry Potter and the Philosopher's Stone", 8937, 40),
    (3003, "The Lion, the Witch and the Wardrobe", 2356, 25),
    (3004, "The Lord of the Rings", 6380, 37),
    (3005, "Alice's Adventures in Wonderland", 5620, 12),
];

/// Rows newly written by [`seed_initial_data`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedStats {
    pub authors: usize,
    pub books: usize,
}

/// Insert the starter authors and books, skipping any id already present.
pub fn seed_initial_data(conn: &Connection) -> Result<SeedStats, OperationError> {
    let mut stats = SeedStats::default();

    let mut stmt =
        conn.prepare("INSERT OR IGNORE INTO author (id, name, country) VALUES (?1, ?2, ?3)")?;
    for (id, name, country) in SEED_AUTHORS {
        stats.authors += stmt.execute(params![id, name, country])?;
    }

    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO book (id, title, authorID, qty) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for (id, title, author_id, qty) in SEED_BOOKS {
        stats.books += stmt.execute(params![id, title, author_id, qty])?;
    }

    if stats.authors > 0 || stats.books > 0 {
        log::info!(
            "Seeded catalog with {} author(s) and {} book(s)",
            stats.authors,
            stats.books
        );
    }
    Ok(stats)
}
