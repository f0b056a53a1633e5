//! In-memory application state handed to commands.
//!
//! # Responsibility
//! - Own the `AddressBook` for the session.
//! - Maintain the visible (filtered, ordered) view that command indexes
//!   refer to.
//!
//! # Invariants
//! - The visible list is always derived from the current book, so it never
//!   holds stale entries after a mutation.
//! - Visible order is the book order; sorting reorders the book itself.

use crate::model::address_book::{AddressBook, AddressBookError};
use crate::model::fields::Name;
use crate::model::person::Person;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

/// Filter over persons used for the visible list.
pub type PersonPredicate = Box<dyn Fn(&Person) -> bool>;

/// Predicate that keeps every person.
pub fn show_all() -> PersonPredicate {
    Box::new(|_: &Person| true)
}

pub struct Model {
    address_book: AddressBook,
    predicate: PersonPredicate,
}

impl Model {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            predicate: show_all(),
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replaces the whole book and resets the view.
    pub fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book = address_book;
        self.predicate = show_all();
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    /// Adds a person and resets the view so the new entry is visible.
    pub fn add_person(&mut self, person: Person) -> Result<(), AddressBookError> {
        self.address_book.add_person(person)?;
        self.show_all_persons();
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError> {
        self.address_book.set_person(target, edited)
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<Person, AddressBookError> {
        self.address_book.remove_person(target)
    }

    /// Returns the visible persons in display order.
    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|person| (self.predicate)(person))
            .collect()
    }

    pub fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        self.predicate = predicate;
    }

    pub fn show_all_persons(&mut self) {
        self.predicate = show_all();
    }

    /// Makes `persons` the visible list, in the given order.
    ///
    /// The book adopts that order (persons outside the list keep their
    /// relative order behind it), and the view is limited to the list.
    pub fn set_filtered_person_list(&mut self, persons: Vec<Person>) -> Result<(), AddressBookError> {
        self.address_book.reorder(&persons)?;
        let visible: HashSet<Name> = persons.into_iter().map(|p| p.name().clone()).collect();
        self.predicate = Box::new(move |person: &Person| visible.contains(person.name()));
        Ok(())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl Debug for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("address_book", &self.address_book)
            .field("visible", &self.filtered_person_list().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data::{sample_student, sample_teacher};

    fn model() -> Model {
        let book = AddressBook::from_persons(vec![
            sample_student("Carl Kurz", "Physics", 1),
            sample_teacher("Alice Pauline", "Biology"),
            sample_student("Benson Meier", "Physics", 3),
        ])
        .unwrap();
        Model::new(book)
    }

    #[test]
    fn predicate_filters_visible_list_only() {
        let mut model = model();
        model.update_filtered_person_list(Box::new(|p: &Person| p.subject().as_str() == "Physics"));
        let visible: Vec<&str> = model
            .filtered_person_list()
            .into_iter()
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(visible, vec!["Carl Kurz", "Benson Meier"]);
        assert_eq!(model.address_book().len(), 3);
    }

    #[test]
    fn visible_list_tracks_deletions() {
        let mut model = model();
        let target = model.filtered_person_list()[0].clone();
        model.delete_person(&target).unwrap();
        assert_eq!(model.filtered_person_list().len(), 2);
        assert!(!model.has_person(&target));
    }

    #[test]
    fn set_filtered_person_list_reorders_and_restricts() {
        let mut model = model();
        let alice = model.address_book().persons()[1].clone();
        let carl = model.address_book().persons()[0].clone();
        model
            .set_filtered_person_list(vec![alice.clone(), carl.clone()])
            .unwrap();

        let visible: Vec<Person> = model.filtered_person_list().into_iter().cloned().collect();
        assert_eq!(visible, vec![alice.clone(), carl.clone()]);
        assert_eq!(model.address_book().persons()[0], alice);
        assert_eq!(model.address_book().persons()[1], carl);

        model.show_all_persons();
        assert_eq!(model.filtered_person_list().len(), 3);
    }

    #[test]
    fn add_person_resets_view() {
        let mut model = model();
        model.update_filtered_person_list(Box::new(|_: &Person| false));
        model
            .add_person(sample_teacher("Daniel Meier", "History"))
            .unwrap();
        assert_eq!(model.filtered_person_list().len(), 4);
    }
}
