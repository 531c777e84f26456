use std::io::{BufRead, Write};

use shelf_track_catalog::{AuthorId, BookId, NewBook, parse_quantity, validate_text};

use crate::error::CliError;
use crate::menu::Menu;

/// Prompt for a new book and insert it.
///
/// Each answer is checked as soon as it is given, so the first bad value
/// ends the flow without asking for the rest.
pub(crate) fn run_add<R: BufRead, W: Write>(menu: &mut Menu<'_, R, W>) -> Result<(), CliError> {
    let id = BookId::parse(&menu.prompt("Enter Book ID (4-digit number): ")?)?;
    let title = validate_text("Book title", &menu.prompt("Enter Book Title: ")?)?;
    let author_id = AuthorId::parse(&menu.prompt("Enter Author ID (4-digit number): ")?)?;
    let quantity = parse_quantity(&menu.prompt("Enter Quantity: ")?)?;

    let book = NewBook {
        id,
        title,
        author_id,
        quantity,
    };
    shelf_track_db::add_book(menu.conn, &book)?;
    menu.success("Book added successfully.")
}
