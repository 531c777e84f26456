//! Bookstore catalog data model.
//!
//! Defines authors, books, typed 4-digit identifiers, and the validation
//! rules applied to operator input before anything reaches storage.

pub mod types;
pub mod validate;

pub use types::{Author, Book, BookDetails, BookField, BookUpdate, NewBook};
pub use validate::{AuthorId, BookId, ValidationError, parse_quantity, validate_text};
