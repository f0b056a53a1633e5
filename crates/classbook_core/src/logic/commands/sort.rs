//! `sort` command.

use crate::logic::commands::{CommandError, CommandResult};
use crate::model::model::Model;
use crate::model::person::Person;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Ordering criterion for `sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Name, case-insensitive.
    Name,
    /// Subject, case-insensitive.
    Subject,
    /// Smallest class name; persons without classes last.
    Class,
    /// Highest attendance first; teachers after every student.
    Attendance,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "subject" => Some(Self::Subject),
            "class" => Some(Self::Class),
            "attendance" => Some(Self::Attendance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Subject => "subject",
            Self::Class => "class",
            Self::Attendance => "attendance",
        }
    }

    /// Comparator over persons for this key.
    pub fn compare(&self, left: &Person, right: &Person) -> Ordering {
        match self {
            Self::Name => compare_text(left.name().as_str(), right.name().as_str()),
            Self::Subject => compare_text(left.subject().as_str(), right.subject().as_str()),
            Self::Class => match (smallest_class(left), smallest_class(right)) {
                (Some(l), Some(r)) => l.cmp(&r),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Attendance => match (left.attendance(), right.attendance()) {
                (Some(l), Some(r)) => r.cmp(&l),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

/// Lowercased minimum, so selection and comparison use the same order.
fn smallest_class(person: &Person) -> Option<String> {
    person
        .classes()
        .iter()
        .map(|class| class.as_str().to_lowercase())
        .min()
}

/// Sorts the whole address book and shows every person in the new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCommand {
    key: SortKey,
}

impl SortCommand {
    pub const COMMAND_WORD: &'static str = "sort";
    pub const MESSAGE_USAGE: &'static str = "sort: Sorts all persons by the specified parameter.\n\
         Parameters: name / subject / class / attendance\n\
         Example: sort name";
    pub const MESSAGE_SUCCESS: &'static str = "List sorted successfully.";

    pub fn new(key: SortKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    /// Resets the view, stable-sorts a copy of it, and installs the copy as
    /// the visible list.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.show_all_persons();
        let mut sorted: Vec<Person> = model.filtered_person_list().into_iter().cloned().collect();
        sorted.sort_by(|left, right| self.key.compare(left, right));
        model.set_filtered_person_list(sorted)?;
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::address_book::AddressBook;
    use crate::model::sample_data::{sample_student, sample_student_in, sample_teacher};

    fn names(model: &Model) -> Vec<String> {
        model
            .filtered_person_list()
            .into_iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn attendance_sort_puts_teachers_last_and_is_stable() {
        let book = AddressBook::from_persons(vec![
            sample_teacher("Tina", "Art"),
            sample_student("Sam", "Art", 1),
            sample_student("Ria", "Art", 5),
            sample_student("Pam", "Art", 1),
        ])
        .unwrap();
        let mut model = Model::new(book);

        SortCommand::new(SortKey::Attendance)
            .execute(&mut model)
            .unwrap();
        assert_eq!(names(&model), vec!["Ria", "Sam", "Pam", "Tina"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let book = AddressBook::from_persons(vec![
            sample_student("bob", "Art", 0),
            sample_student("Alice", "Art", 0),
            sample_student("Carol", "Art", 0),
        ])
        .unwrap();
        let mut model = Model::new(book);
        let result = SortCommand::new(SortKey::Name).execute(&mut model).unwrap();
        assert_eq!(result.feedback(), SortCommand::MESSAGE_SUCCESS);
        assert_eq!(names(&model), vec!["Alice", "bob", "Carol"]);
    }

    #[test]
    fn class_sort_uses_smallest_class_ignoring_case() {
        let book = AddressBook::from_persons(vec![
            sample_student_in("Yan", &["a5"]),
            sample_student_in("Xin", &["a1", "B0"]),
        ])
        .unwrap();
        let mut model = Model::new(book);

        SortCommand::new(SortKey::Class).execute(&mut model).unwrap();
        assert_eq!(names(&model), vec!["Xin", "Yan"]);
    }

    #[test]
    fn class_sort_puts_classless_last_and_keeps_ties_in_order() {
        let book = AddressBook::from_persons(vec![
            sample_student_in("Nobody", &[]),
            sample_student_in("Uma", &["2b"]),
            sample_student_in("Vic", &["3C"]),
            sample_student_in("Wes", &["2B", "9Z"]),
        ])
        .unwrap();
        let mut model = Model::new(book);

        SortCommand::new(SortKey::Class).execute(&mut model).unwrap();
        assert_eq!(names(&model), vec!["Uma", "Wes", "Vic", "Nobody"]);
    }

    #[test]
    fn parse_accepts_known_keys_only() {
        assert_eq!(SortKey::parse(" Subject "), Some(SortKey::Subject));
        assert_eq!(SortKey::parse("class"), Some(SortKey::Class));
        assert_eq!(SortKey::parse("age"), None);
    }
}
