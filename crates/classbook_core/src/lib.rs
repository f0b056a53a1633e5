//! Core domain logic for Classbook, an address book of students and
//! teachers driven by text commands.

pub mod config;
pub mod db;
pub mod logging;
pub mod logic;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use db::{open_db, open_db_in_memory, DbError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use logic::commands::{help_summary, Command, CommandError, CommandResult};
pub use logic::index::Index;
pub use logic::parser::{AddressBookParser, ParseError};
pub use model::address_book::{AddressBook, AddressBookError};
pub use model::model::Model;
pub use model::person::{Person, PersonDetails, Role};
pub use model::student::Student;
pub use model::teacher::Teacher;
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use service::command_service::{CommandService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
