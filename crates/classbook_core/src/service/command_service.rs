//! Command execution service.
//!
//! # Responsibility
//! - Turn one line of user input into a parsed command, run it against the
//!   in-memory model and persist the address book when it changed.
//! - Emit metadata-only `command_execute` log events.
//!
//! # Invariants
//! - If persisting fails, the model is rolled back to its previous book, so
//!   memory never runs ahead of storage.
//! - Log lines carry the command word only, never person data.

use crate::logic::commands::{CommandError, CommandResult};
use crate::logic::parser::{AddressBookParser, ParseError};
use crate::model::model::Model;
use crate::model::person::Person;
use crate::model::sample_data::sample_address_book;
use crate::repo::person_repo::{PersonRepository, RepoError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    Parse(ParseError),
    Command(CommandError),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "could not save address book: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ParseError> for ServiceError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for ServiceError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Runs user commands against a model backed by a repository.
pub struct CommandService<R: PersonRepository> {
    repo: R,
    model: Model,
    parser: AddressBookParser,
}

impl<R: PersonRepository> CommandService<R> {
    /// Loads the stored address book, or the sample book when nothing has
    /// been saved yet.
    pub fn load(repo: R) -> ServiceResult<Self> {
        let address_book = match repo.load_address_book()? {
            Some(book) => {
                info!(
                    "event=address_book_load module=service status=ok source=storage persons={}",
                    book.len()
                );
                book
            }
            None => {
                info!("event=address_book_load module=service status=ok source=sample");
                sample_address_book()
            }
        };
        Ok(Self::with_model(repo, Model::new(address_book)))
    }

    pub fn with_model(repo: R, model: Model) -> Self {
        Self {
            repo,
            model,
            parser: AddressBookParser,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.model.filtered_person_list()
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Parses and executes one line of input.
    ///
    /// # Errors
    /// - `ServiceError::Parse` for malformed input.
    /// - `ServiceError::Command` when the command cannot run; the model is
    ///   unchanged.
    /// - `ServiceError::Repo` when saving fails; the model is rolled back.
    pub fn execute(&mut self, input: &str) -> ServiceResult<CommandResult> {
        let started_at = Instant::now();
        let command = self.parser.parse_command(input).map_err(|err| {
            warn!(
                "event=command_parse module=service status=error duration_ms={}",
                started_at.elapsed().as_millis()
            );
            err
        })?;
        let word = command.command_word();

        let snapshot = command
            .modifies_address_book()
            .then(|| self.model.address_book().clone());

        let result = command.execute(&mut self.model).map_err(|err| {
            warn!(
                "event=command_execute module=service status=error command={word} duration_ms={} error_code=command_failed",
                started_at.elapsed().as_millis()
            );
            err
        })?;

        if let Some(previous) = snapshot {
            if let Err(err) = self.repo.save_address_book(self.model.address_book()) {
                error!(
                    "event=command_execute module=service status=error command={word} duration_ms={} error_code=save_failed error={err}",
                    started_at.elapsed().as_millis()
                );
                self.model.set_address_book(previous);
                return Err(err.into());
            }
        }

        info!(
            "event=command_execute module=service status=ok command={word} duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(result)
    }
}
