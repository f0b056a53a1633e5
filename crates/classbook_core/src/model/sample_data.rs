//! Seed content for a fresh address book.
//!
//! Used when no stored address book exists yet. Every value here satisfies
//! the field validators, so construction goes through `expect` on literals
//! only. The compact builders at the bottom exist for unit tests.

use crate::model::address_book::AddressBook;
use crate::model::fields::{Address, Attendance, ClassName, Email, Gender, Name, Phone, Subject, Tag};
use crate::model::person::{Person, PersonDetails};
use crate::model::student::Student;
use crate::model::teacher::Teacher;

/// Returns the default seed persons.
pub fn sample_persons() -> Vec<Person> {
    vec![
        student(
            "Alex Yeoh",
            Gender::Male,
            "Mathematics",
            &["3A"],
            &["monitor"],
            4,
        ),
        student(
            "Bernice Yu",
            Gender::Female,
            "Chemistry",
            &["3A", "3B"],
            &[],
            6,
        ),
        teacher("Charlotte Oliveiro", Gender::Female, "Physics", &["3A", "4C"], &["formteacher"]),
        student("David Li", Gender::Male, "Biology", &["4C"], &["choir"], 2),
        teacher("Irfan Ibrahim", Gender::Male, "Mathematics", &["3B"], &[]),
        student("Roy Balakrishnan", Gender::Male, "Literature", &["1A"], &[], 0),
    ]
}

pub fn sample_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in sample_persons() {
        // Seed names are distinct; a duplicate would only be skipped.
        let _ = book.add_person(person);
    }
    book
}

fn student(
    name: &str,
    gender: Gender,
    subject: &str,
    classes: &[&str],
    tags: &[&str],
    attendance: u32,
) -> Person {
    Student::new(
        sample_details(name, tags),
        gender,
        Subject::parse(subject).expect("sample subject must be valid"),
        sample_classes(classes),
        Attendance::new(attendance),
    )
    .into()
}

fn teacher(name: &str, gender: Gender, subject: &str, classes: &[&str], tags: &[&str]) -> Person {
    Teacher::new(
        sample_details(name, tags),
        gender,
        Subject::parse(subject).expect("sample subject must be valid"),
        sample_classes(classes),
    )
    .into()
}

fn sample_details(name: &str, tags: &[&str]) -> PersonDetails {
    let handle = name.to_ascii_lowercase().replace(' ', "");
    let phone_suffix = handle.len() * 1_111 % 10_000;
    PersonDetails::new(
        Name::parse(name).expect("sample name must be valid"),
        Phone::parse(format!("8765{phone_suffix:04}")).expect("sample phone must be valid"),
        Email::parse(format!("{handle}@school.edu")).expect("sample email must be valid"),
        Address::parse(format!("Blk {} Clementi Ave 2", handle.len() * 7))
            .expect("sample address must be valid"),
        tags.iter()
            .map(|tag| Tag::parse(tag).expect("sample tag must be valid")),
    )
}

fn sample_classes(classes: &[&str]) -> Vec<ClassName> {
    classes
        .iter()
        .map(|class| ClassName::parse(class).expect("sample class must be valid"))
        .collect()
}

/// Student with contact fields derived from `name`, in class `1A`.
#[cfg(test)]
pub(crate) fn sample_student(name: &str, subject: &str, attendance: u32) -> Person {
    student(name, Gender::Other, subject, &["1A"], &[], attendance)
}

#[cfg(test)]
pub(crate) fn sample_student_in(name: &str, classes: &[&str]) -> Person {
    student(name, Gender::Other, "Art", classes, &[], 0)
}

/// Teacher with contact fields derived from `name`, in class `1A`.
#[cfg(test)]
pub(crate) fn sample_teacher(name: &str, subject: &str) -> Person {
    teacher(name, Gender::Other, subject, &["1A"], &[])
}
