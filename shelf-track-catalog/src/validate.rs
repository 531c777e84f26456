//! Identifier types and input validation.
//!
//! Every value the operator types is checked here before it is handed to the
//! store: identifiers must be exactly four ASCII digits, text fields must be
//! non-empty, and quantities must be non-negative integers.

use std::fmt;

use thiserror::Error;

/// Number of digits in a book or author identifier.
pub const ID_DIGITS: usize = 4;

/// Largest value a 4-digit identifier can hold.
pub const MAX_ID: u16 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid {kind} ID '{value}': it must be a 4-digit number")]
    InvalidId { kind: &'static str, value: String },
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("Invalid quantity '{value}': it must be a non-negative whole number")]
    InvalidQuantity { value: String },
}

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u16);

        impl $name {
            /// Parse operator input. Exactly four ASCII digits are accepted;
            /// surrounding whitespace is ignored.
            pub fn parse(input: &str) -> Result<Self, ValidationError> {
                let trimmed = input.trim();
                if trimmed.len() != ID_DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ValidationError::InvalidId {
                        kind: $kind,
                        value: input.to_string(),
                    });
                }
                trimmed
                    .parse()
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidId {
                        kind: $kind,
                        value: input.to_string(),
                    })
            }

            /// Wrap a stored integer key. Returns `None` above 9999.
            pub fn new(value: u16) -> Option<Self> {
                (value <= MAX_ID).then_some(Self(value))
            }

            pub fn value(self) -> u16 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:04}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

catalog_id!(
    /// Primary key of a book row.
    BookId,
    "Book"
);

catalog_id!(
    /// Primary key of an author row.
    AuthorId,
    "Author"
);

/// Parse a stock quantity. Only unsigned decimal digits are accepted, so
/// negative numbers and anything non-numeric are rejected.
pub fn parse_quantity(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidQuantity {
        value: input.to_string(),
    };
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed.parse().map_err(|_| invalid())
}

/// Trim a free-text field and reject it if nothing is left.
pub fn validate_text(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}
