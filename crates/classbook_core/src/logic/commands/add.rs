//! `add` command.

use crate::logic::commands::{CommandError, CommandResult};
use crate::logic::messages::{format_person, MESSAGE_DUPLICATE_PERSON};
use crate::model::model::Model;
use crate::model::person::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a student or teacher to the address book.\n\
         Parameters: r/ROLE n/NAME g/GENDER p/PHONE e/EMAIL a/ADDRESS s/SUBJECT [c/CLASS]... [t/TAG]...\n\
         Example: add r/student n/John Doe g/male p/98765432 e/johnd@example.com \
         a/311, Clementi Ave 2, #02-25 s/Mathematics c/3A t/monitor";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_PERSON));
        }
        model.add_person(self.person.clone())?;
        Ok(CommandResult::new(format!(
            "New person added: {}",
            format_person(&self.person)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data::{sample_student, sample_teacher};

    #[test]
    fn adds_new_person_and_rejects_same_name() {
        let mut model = Model::default();
        let command = AddCommand::new(sample_student("Amy Bee", "Physics", 0));
        let result = command.execute(&mut model).unwrap();
        assert!(result.feedback().starts_with("New person added: Amy Bee;"));

        let clash = AddCommand::new(sample_teacher("Amy Bee", "History"));
        assert_eq!(
            clash.execute(&mut model).unwrap_err().message(),
            MESSAGE_DUPLICATE_PERSON
        );
        assert_eq!(model.address_book().len(), 1);
    }
}
