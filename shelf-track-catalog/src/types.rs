//! Data model types for the bookstore catalog.
//!
//! These mirror the two persisted tables (`author`, `book`) plus the joined
//! row shown when listing the whole catalog.

use std::fmt;

use crate::validate::{AuthorId, BookId, ValidationError, parse_quantity, validate_text};

// ── Author ──────────────────────────────────────────────────────────────────

/// A book author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub country: String,
}

impl Author {
    pub fn new(id: AuthorId, name: &str, country: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: validate_text("Author name", name)?,
            country: validate_text("Author country", country)?,
        })
    }
}

// ── Book ────────────────────────────────────────────────────────────────────

/// A stored book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub quantity: u32,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {}, Title: {}, Author ID: {}, Quantity: {}",
            self.id, self.title, self.author_id, self.quantity
        )
    }
}

/// A book joined with its author's name and country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub id: BookId,
    pub title: String,
    pub author_name: String,
    pub author_country: String,
    pub quantity: u32,
}

impl fmt::Display for BookDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {}, Title: {}, Author: {}, Country: {}, Quantity: {}",
            self.id, self.title, self.author_name, self.author_country, self.quantity
        )
    }
}

/// A validated request to insert a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub quantity: u32,
}

impl NewBook {
    /// Validate raw operator input, field by field in prompt order.
    pub fn parse(
        id: &str,
        title: &str,
        author_id: &str,
        quantity: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: BookId::parse(id)?,
            title: validate_text("Book title", title)?,
            author_id: AuthorId::parse(author_id)?,
            quantity: parse_quantity(quantity)?,
        })
    }
}

// ── Updates ─────────────────────────────────────────────────────────────────

/// Which field of a book (or of its author) an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Quantity,
    AuthorName,
    AuthorCountry,
}

impl BookField {
    pub const ALL: [BookField; 4] = [
        BookField::Title,
        BookField::Quantity,
        BookField::AuthorName,
        BookField::AuthorCountry,
    ];

    /// Map a 1-based menu choice to a field.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Title),
            "2" => Some(Self::Quantity),
            "3" => Some(Self::AuthorName),
            "4" => Some(Self::AuthorCountry),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Quantity => "Quantity",
            Self::AuthorName => "Author Name",
            Self::AuthorCountry => "Author Country",
        }
    }

    /// True when the update writes to the author row rather than the book row.
    pub fn targets_author(self) -> bool {
        matches!(self, Self::AuthorName | Self::AuthorCountry)
    }
}

/// A single-field update carrying an already validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookUpdate {
    Title(String),
    Quantity(u32),
    AuthorName(String),
    AuthorCountry(String),
}

impl BookUpdate {
    pub fn parse(field: BookField, raw: &str) -> Result<Self, ValidationError> {
        Ok(match field {
            BookField::Title => Self::Title(validate_text("Book title", raw)?),
            BookField::Quantity => Self::Quantity(parse_quantity(raw)?),
            BookField::AuthorName => Self::AuthorName(validate_text("Author name", raw)?),
            BookField::AuthorCountry => {
                Self::AuthorCountry(validate_text("Author country", raw)?)
            }
        })
    }

    pub fn field(&self) -> BookField {
        match self {
            Self::Title(_) => BookField::Title,
            Self::Quantity(_) => BookField::Quantity,
            Self::AuthorName(_) => BookField::AuthorName,
            Self::AuthorCountry(_) => BookField::AuthorCountry,
        }
    }
}
