//! Text-to-command parsing.
//!
//! # Responsibility
//! - Split user input into a command word and its arguments.
//! - Build typed, validated command values; never touch the model.
//!
//! # Invariants
//! - Parsing is all-or-nothing: any invalid argument fails the whole input.
//! - Every failure is a `ParseError` whose message is fit for display.

pub mod attendance;
pub mod lookup;
pub mod person;
pub mod sort;
pub mod tokenizer;
pub mod util;

use crate::logic::commands::add::AddCommand;
use crate::logic::commands::attendance::{MarkAttendanceCommand, UnmarkAttendanceCommand};
use crate::logic::commands::delete::DeleteCommand;
use crate::logic::commands::edit::EditCommand;
use crate::logic::commands::find::FindCommand;
use crate::logic::commands::sort::SortCommand;
use crate::logic::commands::{Command, CLEAR_COMMAND_WORD, EXIT_COMMAND_WORD, HELP_COMMAND_WORD, HELP_USAGE, LIST_COMMAND_WORD};
use crate::logic::messages::{invalid_command_format, MESSAGE_UNKNOWN_COMMAND};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use attendance::{MarkAttendanceCommandParser, UnmarkAttendanceCommandParser};
pub use lookup::{DeleteCommandParser, FindCommandParser};
pub use person::{AddCommandParser, EditCommandParser};
pub use sort::SortCommandParser;

pub type ParseResult<T> = Result<T, ParseError>;

/// Input that does not form a valid command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `Invalid command format!` error carrying a command's usage text.
    pub fn invalid_format(usage: &str) -> Self {
        Self::new(invalid_command_format(usage))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ParseError {}

/// Parses the argument text of one command kind.
pub trait Parser {
    type Output;

    fn parse(&self, args: &str) -> ParseResult<Self::Output>;
}

/// Top-level parser: dispatches on the first word of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressBookParser;

impl AddressBookParser {
    /// Parses one line of user input into a command.
    ///
    /// Arguments are passed to per-command parsers with their leading
    /// whitespace, so prefixes right after the command word are recognised.
    pub fn parse_command(&self, input: &str) -> ParseResult<Command> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::invalid_format(HELP_USAGE));
        }

        let split_at = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let (command_word, args) = trimmed.split_at(split_at);

        match command_word {
            AddCommand::COMMAND_WORD => AddCommandParser.parse(args).map(Command::Add),
            EditCommand::COMMAND_WORD => EditCommandParser.parse(args).map(Command::Edit),
            DeleteCommand::COMMAND_WORD => DeleteCommandParser.parse(args).map(Command::Delete),
            FindCommand::COMMAND_WORD => FindCommandParser.parse(args).map(Command::Find),
            SortCommand::COMMAND_WORD => SortCommandParser.parse(args).map(Command::Sort),
            MarkAttendanceCommand::COMMAND_WORD => MarkAttendanceCommandParser
                .parse(args)
                .map(Command::MarkAttendance),
            UnmarkAttendanceCommand::COMMAND_WORD => UnmarkAttendanceCommandParser
                .parse(args)
                .map(Command::UnmarkAttendance),
            LIST_COMMAND_WORD => Ok(Command::List),
            CLEAR_COMMAND_WORD => Ok(Command::Clear),
            HELP_COMMAND_WORD => Ok(Command::Help),
            EXIT_COMMAND_WORD => Ok(Command::Exit),
            _ => Err(ParseError::new(MESSAGE_UNKNOWN_COMMAND)),
        }
    }
}
