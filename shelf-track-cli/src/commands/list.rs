use std::io::{BufRead, Write};

use crate::error::CliError;
use crate::menu::Menu;

/// Print every book with its author's name and country.
pub(crate) fn run_list<R: BufRead, W: Write>(menu: &mut Menu<'_, R, W>) -> Result<(), CliError> {
    let rows = shelf_track_db::list_all(menu.conn)?;

    if rows.is_empty() {
        return menu.warn("No books found.");
    }
    for row in &rows {
        menu.say(row)?;
    }
    Ok(())
}
