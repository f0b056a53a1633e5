//! `edit` command.

use crate::logic::commands::{CommandError, CommandResult};
use crate::logic::index::Index;
use crate::logic::messages::{
    format_person, MESSAGE_DUPLICATE_PERSON, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
};
use crate::model::fields::{Address, ClassName, Email, Gender, Name, Phone, Subject, Tag};
use crate::model::model::Model;
use crate::model::person::{Person, PersonDetails};
use crate::model::student::Student;
use crate::model::teacher::Teacher;
use std::collections::BTreeSet;

/// Replacement values for an edit; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub gender: Option<Gender>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub subject: Option<Subject>,
    pub classes: Option<BTreeSet<ClassName>>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.gender.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.subject.is_some()
            || self.classes.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited person. Role and attendance never change.
    pub fn apply_to(&self, person: &Person) -> Person {
        let details = PersonDetails::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address.clone().unwrap_or_else(|| person.address().clone()),
            self.tags.clone().unwrap_or_else(|| person.tags().clone()),
        );
        let gender = self.gender.unwrap_or_else(|| person.gender());
        let subject = self.subject.clone().unwrap_or_else(|| person.subject().clone());
        let classes = self.classes.clone().unwrap_or_else(|| person.classes().clone());

        match person {
            Person::Student(student) => {
                Student::new(details, gender, subject, classes, student.attendance()).into()
            }
            Person::Teacher(_) => Teacher::new(details, gender, subject, classes).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified by \
         the index number used in the displayed person list. Existing values will be overwritten \
         by the input values.\n\
         Parameters: INDEX (must be a positive integer) [n/NAME] [g/GENDER] [p/PHONE] [e/EMAIL] \
         [a/ADDRESS] [s/SUBJECT] [c/CLASS]... [t/TAG]...\n\
         Example: edit 1 p/91234567 e/johndoe@example.com";
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditPersonDescriptor {
        &self.descriptor
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_person_list()
            .get(self.index.zero_based())
            .map(|person| (*person).clone())
            .ok_or_else(|| CommandError::new(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX))?;

        let edited = self.descriptor.apply_to(&target);
        if !target.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_PERSON));
        }

        model.set_person(&target, edited.clone())?;
        model.show_all_persons();
        Ok(CommandResult::new(format!(
            "Edited Person: {}",
            format_person(&edited)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::address_book::AddressBook;
    use crate::model::fields::Attendance;
    use crate::model::sample_data::{sample_student, sample_teacher};

    fn model() -> Model {
        Model::new(
            AddressBook::from_persons(vec![
                sample_student("Amy Bee", "Physics", 3),
                sample_teacher("Bob Choo", "History"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn keeps_role_and_attendance() {
        let mut model = model();
        let descriptor = EditPersonDescriptor {
            subject: Some(Subject::parse("Chemistry").unwrap()),
            tags: Some(BTreeSet::new()),
            ..EditPersonDescriptor::default()
        };
        EditCommand::new(Index::from_one_based(1).unwrap(), descriptor)
            .execute(&mut model)
            .unwrap();

        let edited = &model.address_book().persons()[0];
        assert_eq!(edited.subject().as_str(), "Chemistry");
        assert_eq!(edited.attendance(), Some(Attendance::new(3)));
    }

    #[test]
    fn rejects_renaming_onto_another_person() {
        let mut model = model();
        let descriptor = EditPersonDescriptor {
            name: Some(Name::parse("Bob Choo").unwrap()),
            ..EditPersonDescriptor::default()
        };
        let err = EditCommand::new(Index::from_one_based(1).unwrap(), descriptor)
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.message(), MESSAGE_DUPLICATE_PERSON);
    }

    #[test]
    fn rejects_index_outside_visible_list() {
        let mut model = model();
        model.update_filtered_person_list(Box::new(|p: &Person| p.name().as_str() == "Amy Bee"));
        let descriptor = EditPersonDescriptor {
            phone: Some(Phone::parse("999").unwrap()),
            ..EditPersonDescriptor::default()
        };
        let err = EditCommand::new(Index::from_one_based(2).unwrap(), descriptor)
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.message(), MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);
    }
}
