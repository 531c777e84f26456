use std::io::{BufRead, Write};

use shelf_track_catalog::{BookField, BookId, BookUpdate};
use shelf_track_db::OperationError;

use crate::error::CliError;
use crate::menu::Menu;

/// Show a book's current details, ask which field to change, and apply it.
pub(crate) fn run_update<R: BufRead, W: Write>(
    menu: &mut Menu<'_, R, W>,
) -> Result<(), CliError> {
    let id = BookId::parse(&menu.prompt("Enter Book ID to update: ")?)?;

    let details = shelf_track_db::book_details(menu.conn, id)?
        .ok_or(OperationError::BookNotFound(id))?;
    menu.say(format_args!("Current Title: {}", details.title))?;
    menu.say(format_args!("Author: {}", details.author_name))?;
    menu.say(format_args!("Country: {}", details.author_country))?;
    menu.say(format_args!("Quantity: {}", details.quantity))?;

    menu.say("What would you like to update?")?;
    for (n, field) in BookField::ALL.iter().enumerate() {
        menu.say(format_args!("{}. {}", n + 1, field.label()))?;
    }
    let choice = menu.prompt("Enter choice: ")?;
    let field = BookField::from_choice(&choice)
        .ok_or_else(|| CliError::invalid_choice(choice.trim()))?;

    let raw = menu.prompt(&format!("Enter new {}: ", field.label().to_lowercase()))?;
    let update = BookUpdate::parse(field, &raw)?;
    shelf_track_db::update_book(menu.conn, id, &update)?;
    menu.success("Update successful.")
}
