//! Person builders shared by the integration tests.

#![allow(dead_code)]

use classbook_core::model::fields::{
    Address, Attendance, ClassName, Email, Gender, Name, Phone, Subject, Tag,
};
use classbook_core::{Person, PersonDetails, Student, Teacher};

fn details(name: &str) -> PersonDetails {
    let handle = name.to_ascii_lowercase().replace(' ', "");
    PersonDetails::new(
        Name::parse(name).unwrap(),
        Phone::parse("87654321").unwrap(),
        Email::parse(format!("{handle}@school.edu")).unwrap(),
        Address::parse("Blk 7 Clementi Ave 2").unwrap(),
        Vec::<Tag>::new(),
    )
}

fn classes(names: &[&str]) -> Vec<ClassName> {
    names.iter().map(|name| ClassName::parse(name).unwrap()).collect()
}

pub fn student(name: &str, subject: &str, attendance: u32) -> Person {
    student_in(name, subject, &["1A"], attendance)
}

pub fn student_in(name: &str, subject: &str, class_names: &[&str], attendance: u32) -> Person {
    Student::new(
        details(name),
        Gender::Other,
        Subject::parse(subject).unwrap(),
        classes(class_names),
        Attendance::new(attendance),
    )
    .into()
}

pub fn teacher(name: &str, subject: &str) -> Person {
    Teacher::new(
        details(name),
        Gender::Other,
        Subject::parse(subject).unwrap(),
        classes(&["1A"]),
    )
    .into()
}
