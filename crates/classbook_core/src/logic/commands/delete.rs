//! `delete` command.

use crate::logic::commands::{CommandError, CommandResult};
use crate::logic::index::Index;
use crate::logic::messages::{format_person, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX};
use crate::model::model::Model;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index \
         number used in the displayed person list.\n\
         Parameters: INDEX (must be a positive integer)\n\
         Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_person_list()
            .get(self.index.zero_based())
            .map(|person| (*person).clone())
            .ok_or_else(|| CommandError::new(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX))?;
        let removed = model.delete_person(&target)?;
        Ok(CommandResult::new(format!(
            "Deleted Person: {}",
            format_person(&removed)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data::sample_address_book;

    #[test]
    fn deletes_by_visible_position() {
        let mut model = Model::new(sample_address_book());
        let before = model.address_book().len();
        let second = model.filtered_person_list()[1].clone();

        DeleteCommand::new(Index::from_one_based(2).unwrap())
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.address_book().len(), before - 1);
        assert!(!model.has_person(&second));
    }

    #[test]
    fn out_of_range_index_fails_without_changes() {
        let mut model = Model::new(sample_address_book());
        let before = model.address_book().clone();
        let err = DeleteCommand::new(Index::from_one_based(before.len() + 1).unwrap())
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.message(), MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);
        assert_eq!(model.address_book(), &before);
    }
}
