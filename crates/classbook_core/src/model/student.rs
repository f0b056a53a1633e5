//! Student entity.
//!
//! Same shape as a teacher plus an attendance count. Attendance changes
//! produce a new value; a student is never mutated in place.

use crate::model::fields::{Attendance, ClassName, Gender, Name, Subject};
use crate::model::person::{join_set, PersonDetails};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    details: PersonDetails,
    gender: Gender,
    subject: Subject,
    classes: BTreeSet<ClassName>,
    attendance: Attendance,
}

impl Student {
    pub fn new(
        details: PersonDetails,
        gender: Gender,
        subject: Subject,
        classes: impl IntoIterator<Item = ClassName>,
        attendance: Attendance,
    ) -> Self {
        Self {
            details,
            gender,
            subject,
            classes: classes.into_iter().collect(),
            attendance,
        }
    }

    pub fn details(&self) -> &PersonDetails {
        &self.details
    }

    pub fn name(&self) -> &Name {
        self.details.name()
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

    pub fn attendance(&self) -> Attendance {
        self.attendance
    }

    /// Returns a copy of this student with a different attendance count.
    pub fn with_attendance(&self, attendance: Attendance) -> Self {
        Self {
            attendance,
            ..self.clone()
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let details = &self.details;
        write!(
            f,
            "Student{{role=Student, name={}, gender={}, phone={}, email={}, address={}, tags={}, subject={}, classes={}, attendance={}}}",
            details.name(),
            self.gender,
            details.phone(),
            details.email(),
            details.address(),
            join_set(details.tags()),
            self.subject,
            join_set(&self.classes),
            self.attendance
        )
    }
}
