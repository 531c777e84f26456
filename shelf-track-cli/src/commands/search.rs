use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::menu::Menu;

pub(crate) fn run_search<R: BufRead, W: Write>(
    menu: &mut Menu<'_, R, W>,
) -> Result<(), CliError> {
    let fragment = menu.prompt("Enter book title to search: ")?;
    let books = shelf_track_db::search_books(menu.conn, fragment.trim())?;

    if books.is_empty() {
        return menu.warn("No books found.");
    }
    for book in &books {
        menu.say(book)?;
    }
    Ok(())
}
