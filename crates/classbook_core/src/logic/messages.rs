//! User-facing message text shared across parsers and commands.

use crate::logic::parser::tokenizer::Prefix;
use crate::model::person::{join_set, Person};

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";

/// `Invalid command format! \n<usage>`.
pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{usage}")
}

pub fn persons_listed_overview(count: usize) -> String {
    format!("{count} persons listed!")
}

/// Error text for single-valued prefixes given more than once.
pub fn duplicate_prefixes(prefixes: &[Prefix]) -> String {
    let joined = prefixes
        .iter()
        .map(Prefix::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{MESSAGE_DUPLICATE_FIELDS}{joined}")
}

/// One-line summary of a person for command feedback and list output.
pub fn format_person(person: &Person) -> String {
    let mut line = format!(
        "{}; Role: {}; Gender: {}; Phone: {}; Email: {}; Address: {}; Subject: {}; Classes: {}",
        person.name(),
        person.role(),
        person.gender(),
        person.phone(),
        person.email(),
        person.address(),
        person.subject(),
        join_set(person.classes())
    );
    if let Some(attendance) = person.attendance() {
        line.push_str(&format!("; Attendance: {attendance}"));
    }
    line.push_str(&format!("; Tags: {}", join_set(person.tags())));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::parser::tokenizer::{PREFIX_NAME, PREFIX_PHONE};
    use crate::model::sample_data::{sample_student, sample_teacher};

    #[test]
    fn format_person_shows_attendance_for_students_only() {
        let student = format_person(&sample_student("Alex Yeoh", "Physics", 2));
        assert!(student.starts_with("Alex Yeoh; Role: student;"));
        assert!(student.contains("; Attendance: 2; Tags: []"));

        let teacher = format_person(&sample_teacher("Amy Tan", "Physics"));
        assert!(!teacher.contains("Attendance"));
    }

    #[test]
    fn duplicate_prefixes_lists_each_prefix() {
        assert_eq!(
            duplicate_prefixes(&[PREFIX_NAME, PREFIX_PHONE]),
            format!("{MESSAGE_DUPLICATE_FIELDS}n/ p/")
        );
    }
}
