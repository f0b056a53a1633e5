//! Teacher entity.
//!
//! # Invariants
//! - All fields are present and validated by their value types.
//! - Immutable after construction; only accessors are exposed.
//! - Equality and hashing cover every field, including subject and classes.

use crate::model::fields::{Address, ClassName, Email, Gender, Name, Phone, Subject, Tag};
use crate::model::person::{join_set, PersonDetails};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// A teacher: shared person details plus teaching-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Teacher {
    details: PersonDetails,
    gender: Gender,
    subject: Subject,
    classes: BTreeSet<ClassName>,
}

impl Teacher {
    pub fn new(
        details: PersonDetails,
        gender: Gender,
        subject: Subject,
        classes: impl IntoIterator<Item = ClassName>,
    ) -> Self {
        Self {
            details,
            gender,
            subject,
            classes: classes.into_iter().collect(),
        }
    }

    pub fn details(&self) -> &PersonDetails {
        &self.details
    }

    pub fn name(&self) -> &Name {
        self.details.name()
    }

    pub fn phone(&self) -> &Phone {
        self.details.phone()
    }

    pub fn email(&self) -> &Email {
        self.details.email()
    }

    pub fn address(&self) -> &Address {
        self.details.address()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        self.details.tags()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn classes(&self) -> &BTreeSet<ClassName> {
        &self.classes
    }

    /// Weaker notion of equality: both teachers have the same name.
    pub fn is_same_teacher(&self, other: &Teacher) -> bool {
        self.details.is_same_person(&other.details)
    }
}

impl Display for Teacher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Teacher{{role=Teacher, name={}, gender={}, phone={}, email={}, address={}, tags={}, subject={}, classes={}}}",
            self.name(),
            self.gender,
            self.phone(),
            self.email(),
            self.address(),
            join_set(self.tags()),
            self.subject,
            join_set(&self.classes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn details(name: &str) -> PersonDetails {
        PersonDetails::new(
            Name::parse(name).unwrap(),
            Phone::parse("98765432").unwrap(),
            Email::parse("teacher@school.edu").unwrap(),
            Address::parse("1 School Road").unwrap(),
            [Tag::parse("mentor").unwrap()],
        )
    }

    fn teacher(name: &str, subject: &str, classes: &[&str]) -> Teacher {
        Teacher::new(
            details(name),
            Gender::Female,
            Subject::parse(subject).unwrap(),
            classes.iter().map(|c| ClassName::parse(c).unwrap()),
        )
    }

    fn hash_of(value: &Teacher) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_teachers_hash_equally() {
        let first = teacher("Amy Tan", "Mathematics", &["7A", "8B"]);
        let second = teacher("Amy Tan", "Mathematics", &["8B", "7A"]);
        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn equality_requires_subject_and_classes() {
        let base = teacher("Amy Tan", "Mathematics", &["7A"]);
        assert_ne!(base, teacher("Amy Tan", "Physics", &["7A"]));
        assert_ne!(base, teacher("Amy Tan", "Mathematics", &["7A", "7B"]));
        assert!(base.is_same_teacher(&teacher("Amy Tan", "Physics", &[])));
        assert!(!base.is_same_teacher(&teacher("Amy Lim", "Mathematics", &["7A"])));
    }

    #[test]
    fn display_lists_every_field() {
        let rendered = teacher("Amy Tan", "Mathematics", &["8B", "7A"]).to_string();
        assert_eq!(
            rendered,
            "Teacher{role=Teacher, name=Amy Tan, gender=female, phone=98765432, \
             email=teacher@school.edu, address=1 School Road, tags=[mentor], \
             subject=Mathematics, classes=[7A, 8B]}"
        );
    }
}
