//! SQLite persistence layer for the bookstore catalog.
//!
//! Provides schema creation, seeding, CRUD operations and query APIs backed
//! by SQLite (via rusqlite with the bundled feature). Every function takes
//! the connection explicitly; there is no global handle.

pub mod operations;
pub mod queries;
pub mod schema;
pub mod seed;

pub use operations::{
    OperationError, add_book, delete_author, delete_book, insert_author, update_book,
};
pub use queries::{
    CatalogStats, book_details, catalog_stats, find_author, find_book, list_all,
    resolve_author_for_book, search_books,
};
pub use schema::{DEFAULT_DATABASE_FILE, SchemaError, open_database, open_memory};
pub use seed::{SeedStats, seed_initial_data};
