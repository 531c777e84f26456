//! Interactive menu session.
//!
//! A `Menu` owns the terminal streams and borrows the catalog connection for
//! its whole lifetime. Each numbered option runs one command to completion;
//! any recoverable error is printed and the menu is shown again.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::cli_types::Command;
use crate::commands;
use crate::error::CliError;

pub(crate) struct Menu<'a, R, W> {
    pub(crate) conn: &'a Connection,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub(crate) fn new(conn: &'a Connection, input: R, output: W) -> Self {
        Self {
            conn,
            input,
            output,
        }
    }

    /// Run until the operator picks Exit or input ends.
    pub(crate) fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.show_menu()?;
            let choice = match self.prompt("Enter option: ") {
                Ok(choice) => choice,
                Err(CliError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let command = match choice.parse::<Command>() {
                Ok(command) => command,
                Err(_) => {
                    self.warn("Invalid option. Try again.")?;
                    continue;
                }
            };

            if command == Command::Exit {
                break;
            }

            match self.dispatch(command) {
                Ok(()) => {}
                Err(CliError::EndOfInput) => break,
                Err(e) if e.is_recoverable() => {
                    log::debug!("{:?} failed: {:?}", command, e);
                    self.failure(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), CliError> {
        match command {
            Command::AddBook => commands::add::run_add(self),
            Command::UpdateBook => commands::update::run_update(self),
            Command::DeleteBook => commands::delete::run_delete(self),
            Command::SearchBooks => commands::search::run_search(self),
            Command::ViewAll => commands::list::run_list(self),
            Command::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> Result<(), CliError> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            "Menu".if_supports_color(Stdout, |t| t.bold())
        )?;
        for (key, command) in Command::MENU {
            writeln!(self.output, "  {}. {}", key, command.label())?;
        }
        Ok(())
    }

    /// Print `prompt` and read one line, without its line ending.
    pub(crate) fn prompt(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print a plain line.
    pub(crate) fn say(&mut self, line: impl std::fmt::Display) -> Result<(), CliError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub(crate) fn success(&mut self, message: &str) -> Result<(), CliError> {
        writeln!(
            self.output,
            "{}",
            message.if_supports_color(Stdout, |t| t.green())
        )?;
        Ok(())
    }

    pub(crate) fn warn(&mut self, message: &str) -> Result<(), CliError> {
        writeln!(
            self.output,
            "{}",
            message.if_supports_color(Stdout, |t| t.yellow())
        )?;
        Ok(())
    }

    pub(crate) fn failure(&mut self, message: &str) -> Result<(), CliError> {
        writeln!(
            self.output,
            "{}",
            message.if_supports_color(Stdout, |t| t.red())
        )?;
        Ok(())
    }
}
