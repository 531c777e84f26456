use std::io::{BufRead, Write};

use shelf_track_catalog::BookId;

use crate::error::CliError;
use crate::menu::Menu;

/// Delete a book by id. Deleting an id that isn't stored still reports
/// success, since the book is absent either way.
pub(crate) fn run_delete<R: BufRead, W: Write>(
    menu: &mut Menu<'_, R, W>,
) -> Result<(), CliError> {
    let id = BookId::parse(&menu.prompt("Enter Book ID to delete: ")?)?;
    shelf_track_db::delete_book(menu.conn, id)?;
    menu.success("Book deleted successfully.")
}
