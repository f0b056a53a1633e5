//! Ordered person collection with unique identities.
//!
//! # Invariants
//! - No two entries satisfy `Person::is_same_person`.
//! - Insertion order is preserved until an explicit reorder.

use crate::model::fields::Name;
use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Another entry already has this name.
    DuplicatePerson(Name),
    /// Target entry is not in the book.
    PersonNotFound(Name),
}

impl Display for AddressBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(name) => write!(f, "person already exists: {name}"),
            Self::PersonNotFound(name) => write!(f, "person not found: {name}"),
        }
    }
}

impl Error for AddressBookError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `persons`, rejecting duplicate identities.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, AddressBookError> {
        let mut book = Self::new();
        book.set_persons(persons)?;
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), AddressBookError> {
        if self.has_person(&person) {
            return Err(AddressBookError::DuplicatePerson(person.name().clone()));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may keep the target's name; it must not take another entry's name.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError> {
        let position = self
            .position_of(target)
            .ok_or_else(|| AddressBookError::PersonNotFound(target.name().clone()))?;

        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(idx, p)| idx != position && p.is_same_person(&edited));
        if clashes {
            return Err(AddressBookError::DuplicatePerson(edited.name().clone()));
        }

        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, AddressBookError> {
        let position = self
            .position_of(target)
            .ok_or_else(|| AddressBookError::PersonNotFound(target.name().clone()))?;
        Ok(self.persons.remove(position))
    }

    /// Replaces the whole content.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> Result<(), AddressBookError> {
        for (idx, person) in persons.iter().enumerate() {
            if persons[..idx].iter().any(|p| p.is_same_person(person)) {
                return Err(AddressBookError::DuplicatePerson(person.name().clone()));
            }
        }
        self.persons = persons;
        Ok(())
    }

    /// Moves the given entries to the front in the given order.
    ///
    /// Entries not named in `order` keep their relative order after them.
    /// Every entry of `order` must already be in the book.
    pub fn reorder(&mut self, order: &[Person]) -> Result<(), AddressBookError> {
        let mut remaining = self.persons.clone();
        let mut reordered = Vec::with_capacity(remaining.len());
        for person in order {
            let position = remaining
                .iter()
                .position(|p| p == person)
                .ok_or_else(|| AddressBookError::PersonNotFound(person.name().clone()))?;
            reordered.push(remaining.remove(position));
        }
        reordered.extend(remaining);
        self.persons = reordered;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    fn position_of(&self, target: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data::{sample_student, sample_teacher};

    #[test]
    fn add_rejects_same_name_even_with_other_fields() {
        let mut book = AddressBook::new();
        book.add_person(sample_student("Alex Yeoh", "Physics", 0)).unwrap();
        let err = book
            .add_person(sample_teacher("Alex Yeoh", "Biology"))
            .unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson(_)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn set_person_allows_same_name_but_not_clash() {
        let alex = sample_student("Alex Yeoh", "Physics", 0);
        let bernice = sample_teacher("Bernice Yu", "Biology");
        let mut book = AddressBook::from_persons(vec![alex.clone(), bernice.clone()]).unwrap();

        book.set_person(&alex, sample_student("Alex Yeoh", "Chemistry", 2))
            .unwrap();
        assert_eq!(book.persons()[0].subject().as_str(), "Chemistry");

        let err = book
            .set_person(&bernice, sample_teacher("Alex Yeoh", "Biology"))
            .unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson(_)));
    }

    #[test]
    fn reorder_moves_named_entries_first() {
        let a = sample_student("Alex Yeoh", "Physics", 0);
        let b = sample_student("Bernice Yu", "Physics", 0);
        let c = sample_teacher("Charlotte Oliveiro", "Biology");
        let mut book =
            AddressBook::from_persons(vec![a.clone(), b.clone(), c.clone()]).unwrap();

        book.reorder(&[c.clone(), a.clone()]).unwrap();
        assert_eq!(book.persons(), &[c, a, b]);
    }

    #[test]
    fn from_persons_rejects_duplicates() {
        let a = sample_student("Alex Yeoh", "Physics", 0);
        let err = AddressBook::from_persons(vec![a.clone(), a]).unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicatePerson(_)));
    }
}
