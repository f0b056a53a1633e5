//! Person domain model.
//!
//! # Responsibility
//! - Hold the contact fields shared by every role (`PersonDetails`).
//! - Expose students and teachers through one tagged variant (`Person`).
//!
//! # Invariants
//! - Identity ("same person") is decided by `Name` alone.
//! - Full equality and hashing cover every field of the variant.
//! - Tags and classes have unique membership and deterministic order.

use crate::model::fields::{Address, Attendance, ClassName, Email, Gender, Name, Phone, Subject, Tag};
use crate::model::student::Student;
use crate::model::teacher::Teacher;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Contact fields common to all roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonDetails {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl PersonDetails {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true if both records refer to the same person (same name).
    pub fn is_same_person(&self, other: &PersonDetails) -> bool {
        self.name == other.name
    }
}

/// Role discriminator used by the `r/` command prefix and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub const CONSTRAINTS: &'static str = "Role should be either student or teacher";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry of the address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Person {
    Student(Student),
    Teacher(Teacher),
}

impl Person {
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Teacher(_) => Role::Teacher,
        }
    }

    pub fn details(&self) -> &PersonDetails {
        match self {
            Self::Student(student) => student.details(),
            Self::Teacher(teacher) => teacher.details(),
        }
    }

    pub fn name(&self) -> &Name {
        self.details().name()
    }

    pub fn phone(&self) -> &Phone {
        self.details().phone()
    }

    pub fn email(&self) -> &Email {
        self.details().email()
    }

    pub fn address(&self) -> &Address {
        self.details().address()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        self.details().tags()
    }

    pub fn gender(&self) -> Gender {
        match self {
            Self::Student(student) => student.gender(),
            Self::Teacher(teacher) => teacher.gender(),
        }
    }

    pub fn subject(&self) -> &Subject {
        match self {
            Self::Student(student) => student.subject(),
            Self::Teacher(teacher) => teacher.subject(),
        }
    }

    pub fn classes(&self) -> &BTreeSet<ClassName> {
        match self {
            Self::Student(student) => student.classes(),
            Self::Teacher(teacher) => teacher.classes(),
        }
    }

    /// Attendance count; only students track attendance.
    pub fn attendance(&self) -> Option<Attendance> {
        match self {
            Self::Student(student) => Some(student.attendance()),
            Self::Teacher(_) => None,
        }
    }

    /// Returns true if both entries have the same name, regardless of role.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.details().is_same_person(other.details())
    }
}

impl From<Student> for Person {
    fn from(value: Student) -> Self {
        Self::Student(value)
    }
}

impl From<Teacher> for Person {
    fn from(value: Teacher) -> Self {
        Self::Teacher(value)
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student(student) => Display::fmt(student, f),
            Self::Teacher(teacher) => Display::fmt(teacher, f),
        }
    }
}

/// Renders a set as `[a, b]` for diagnostic strings.
pub(crate) fn join_set<T: Display>(values: &BTreeSet<T>) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
