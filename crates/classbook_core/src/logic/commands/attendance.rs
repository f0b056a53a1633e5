//! `mark` and `unmark` attendance commands.
//!
//! # Invariants
//! - Every index is resolved and checked before any student changes.
//! - A repeated index is applied once.

use crate::logic::commands::{CommandError, CommandResult};
use crate::logic::index::Index;
use crate::logic::messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX;
use crate::model::fields::Attendance;
use crate::model::model::Model;
use crate::model::person::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAttendanceCommand {
    indexes: Vec<Index>,
}

impl MarkAttendanceCommand {
    pub const COMMAND_WORD: &'static str = "mark";
    pub const MESSAGE_USAGE: &'static str = "mark: Records one attended session for each student \
         identified by the index numbers used in the displayed person list.\n\
         Parameters: INDEX [MORE_INDEXES]... (each must be a positive integer)\n\
         Example: mark 1 3 4";

    pub fn new(indexes: Vec<Index>) -> Self {
        Self { indexes }
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let names = update_attendance(model, &self.indexes, |_, attendance| {
            Ok(attendance.incremented())
        })?;
        Ok(CommandResult::new(format!(
            "Marked attendance for: {}",
            names.join(", ")
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmarkAttendanceCommand {
    indexes: Vec<Index>,
}

impl UnmarkAttendanceCommand {
    pub const COMMAND_WORD: &'static str = "unmark";
    pub const MESSAGE_USAGE: &'static str = "unmark: Removes one attended session from each \
         student identified by the index numbers used in the displayed person list.\n\
         Parameters: INDEX [MORE_INDEXES]... (each must be a positive integer)\n\
         Example: unmark 1 3 4";

    pub fn new(indexes: Vec<Index>) -> Self {
        Self { indexes }
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let names = update_attendance(model, &self.indexes, |person, attendance| {
            attendance
                .decremented()
                .ok_or_else(|| CommandError::new(format!("{person} has no attendance to unmark")))
        })?;
        Ok(CommandResult::new(format!(
            "Unmarked attendance for: {}",
            names.join(", ")
        )))
    }
}

/// Resolves every index, computes every new attendance, then applies them.
/// Returns the names of the updated students in index order.
fn update_attendance(
    model: &mut Model,
    indexes: &[Index],
    change: impl Fn(&str, Attendance) -> Result<Attendance, CommandError>,
) -> Result<Vec<String>, CommandError> {
    let visible: Vec<Person> = model.filtered_person_list().into_iter().cloned().collect();

    let mut seen: Vec<Index> = Vec::with_capacity(indexes.len());
    let mut updates: Vec<(Person, Person)> = Vec::with_capacity(indexes.len());
    for index in indexes {
        if seen.contains(index) {
            continue;
        }
        seen.push(*index);

        let target = visible
            .get(index.zero_based())
            .ok_or_else(|| CommandError::new(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX))?;
        let Person::Student(student) = target else {
            return Err(CommandError::new(format!(
                "{} is a teacher; attendance is only tracked for students",
                target.name()
            )));
        };
        let attendance = change(student.name().as_str(), student.attendance())?;
        updates.push((target.clone(), student.with_attendance(attendance).into()));
    }

    let mut names = Vec::with_capacity(updates.len());
    for (target, updated) in updates {
        names.push(updated.name().to_string());
        model.set_person(&target, updated)?;
    }
    Ok(names)
}
