//! CLI type definitions: command-line flags and the menu command enum.

use std::str::FromStr;

use clap::Parser;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "shelf-track")]
#[command(about = "Manage a bookstore's book and author catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors in the log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,
}

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    AddBook,
    UpdateBook,
    DeleteBook,
    SearchBooks,
    ViewAll,
    Exit,
}

impl Command {
    /// Menu order, paired with the option number shown to the operator.
    pub(crate) const MENU: [(&'static str, Command); 6] = [
        ("1", Command::AddBook),
        ("2", Command::UpdateBook),
        ("3", Command::DeleteBook),
        ("4", Command::SearchBooks),
        ("5", Command::ViewAll),
        ("0", Command::Exit),
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::AddBook => "Enter book",
            Self::UpdateBook => "Update book",
            Self::DeleteBook => "Delete book",
            Self::SearchBooks => "Search books",
            Self::ViewAll => "View details of all books",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        Self::MENU
            .iter()
            .find(|(key, _)| *key == choice)
            .map(|(_, command)| *command)
            .ok_or_else(|| CliError::invalid_choice(choice))
    }
}
