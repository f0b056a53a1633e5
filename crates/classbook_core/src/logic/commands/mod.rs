//! Executable commands.
//!
//! # Responsibility
//! - Encapsulate one user action each, applied to an explicit `&mut Model`.
//! - Report the outcome as a `CommandResult` or a `CommandError`.
//!
//! # Invariants
//! - A failed command leaves the model unchanged.
//! - Indexes always refer to the visible list at execution time.

pub mod add;
pub mod attendance;
pub mod delete;
pub mod edit;
pub mod find;
pub mod sort;

use crate::logic::messages::MESSAGE_DUPLICATE_PERSON;
use crate::model::address_book::AddressBookError;
use crate::model::model::Model;
use add::AddCommand;
use attendance::{MarkAttendanceCommand, UnmarkAttendanceCommand};
use delete::DeleteCommand;
use edit::EditCommand;
use find::FindCommand;
use sort::SortCommand;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const LIST_COMMAND_WORD: &str = "list";
pub const CLEAR_COMMAND_WORD: &str = "clear";
pub const HELP_COMMAND_WORD: &str = "help";
pub const EXIT_COMMAND_WORD: &str = "exit";

pub const LIST_SUCCESS: &str = "Listed all persons";
pub const CLEAR_SUCCESS: &str = "Address book has been cleared!";
pub const EXIT_ACKNOWLEDGEMENT: &str = "Exiting Classbook as requested ...";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

/// Failure while executing a well-formed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CommandError {}

impl From<AddressBookError> for CommandError {
    fn from(value: AddressBookError) -> Self {
        match value {
            AddressBookError::DuplicatePerson(_) => Self::new(MESSAGE_DUPLICATE_PERSON),
            other => Self::new(other.to_string()),
        }
    }
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// The caller should display the command summary.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// The caller should end the session.
    pub fn exit(&self) -> bool {
        self.exit
    }
}

/// Every command the parser can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    Sort(SortCommand),
    MarkAttendance(MarkAttendanceCommand),
    UnmarkAttendance(UnmarkAttendanceCommand),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn command_word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Edit(_) => EditCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::Sort(_) => SortCommand::COMMAND_WORD,
            Self::MarkAttendance(_) => MarkAttendanceCommand::COMMAND_WORD,
            Self::UnmarkAttendance(_) => UnmarkAttendanceCommand::COMMAND_WORD,
            Self::List => LIST_COMMAND_WORD,
            Self::Clear => CLEAR_COMMAND_WORD,
            Self::Help => HELP_COMMAND_WORD,
            Self::Exit => EXIT_COMMAND_WORD,
        }
    }

    /// Whether a successful run changes the stored address book
    /// (content or order).
    pub fn modifies_address_book(&self) -> bool {
        matches!(
            self,
            Self::Add(_)
                | Self::Edit(_)
                | Self::Delete(_)
                | Self::Sort(_)
                | Self::MarkAttendance(_)
                | Self::UnmarkAttendance(_)
                | Self::Clear
        )
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Delete(command) => command.execute(model),
            Self::Find(command) => command.execute(model),
            Self::Sort(command) => command.execute(model),
            Self::MarkAttendance(command) => command.execute(model),
            Self::UnmarkAttendance(command) => command.execute(model),
            Self::List => {
                model.show_all_persons();
                Ok(CommandResult::new(LIST_SUCCESS))
            }
            Self::Clear => {
                model.set_address_book(Default::default());
                Ok(CommandResult::new(CLEAR_SUCCESS))
            }
            Self::Help => Ok(CommandResult {
                feedback: help_summary(),
                show_help: true,
                exit: false,
            }),
            Self::Exit => Ok(CommandResult {
                feedback: EXIT_ACKNOWLEDGEMENT.to_string(),
                show_help: false,
                exit: true,
            }),
        }
    }
}

/// Usage text of every command, one block per command.
pub fn help_summary() -> String {
    [
        AddCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        FindCommand::MESSAGE_USAGE,
        SortCommand::MESSAGE_USAGE,
        MarkAttendanceCommand::MESSAGE_USAGE,
        UnmarkAttendanceCommand::MESSAGE_USAGE,
        "list: Lists all persons.",
        "clear: Deletes every person.",
        HELP_USAGE,
        "exit: Exits the program.",
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data::sample_address_book;

    #[test]
    fn clear_empties_the_book() {
        let mut model = Model::new(sample_address_book());
        let result = Command::Clear.execute(&mut model).unwrap();
        assert_eq!(result.feedback(), CLEAR_SUCCESS);
        assert!(model.address_book().is_empty());
    }

    #[test]
    fn list_resets_a_filtered_view() {
        let mut model = Model::new(sample_address_book());
        model.update_filtered_person_list(Box::new(|_: &crate::model::person::Person| false));
        Command::List.execute(&mut model).unwrap();
        assert_eq!(
            model.filtered_person_list().len(),
            model.address_book().len()
        );
    }

    #[test]
    fn help_and_exit_set_their_flags() {
        let mut model = Model::default();
        let help = Command::Help.execute(&mut model).unwrap();
        assert!(help.show_help() && !help.exit());
        assert!(help.feedback().contains(SortCommand::MESSAGE_USAGE));
        let exit = Command::Exit.execute(&mut model).unwrap();
        assert!(exit.exit() && !exit.show_help());
    }

    #[test]
    fn read_only_commands_do_not_modify_the_book() {
        assert!(!Command::List.modifies_address_book());
        assert!(!Command::Help.modifies_address_book());
        assert!(Command::Clear.modifies_address_book());
    }
}
