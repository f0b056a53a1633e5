//! `find` command and its name predicate.

use crate::logic::commands::{CommandError, CommandResult};
use crate::logic::messages::persons_listed_overview;
use crate::model::model::Model;
use crate::model::person::Person;

/// Matches persons whose name contains any keyword as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn test(&self, person: &Person) -> bool {
        let name = person.name().as_str().to_lowercase();
        let words: Vec<&str> = name.split_whitespace().collect();
        self.keywords
            .iter()
            .any(|keyword| words.contains(&keyword.to_lowercase().as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: NameContainsKeywordsPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names contain any of \
         the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
         Parameters: KEYWORD [MORE_KEYWORDS]...\n\
         Example: find alice bob charlie";

    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let predicate = self.predicate.clone();
        model.update_filtered_person_list(Box::new(move |person: &Person| predicate.test(person)));
        Ok(CommandResult::new(persons_listed_overview(
            model.filtered_person_list().len(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data::sample_address_book;

    fn predicate(keywords: &[&str]) -> NameContainsKeywordsPredicate {
        NameContainsKeywordsPredicate::new(keywords.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn matches_whole_words_ignoring_case() {
        let book = sample_address_book();
        let alex = &book.persons()[0];
        assert!(predicate(&["ALEX"]).test(alex));
        assert!(predicate(&["nobody", "yeoh"]).test(alex));
        assert!(!predicate(&["Ale"]).test(alex));
    }

    #[test]
    fn find_filters_and_counts() {
        let mut model = Model::new(sample_address_book());
        let result = FindCommand::new(predicate(&["Yu", "Li"]))
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback(), "2 persons listed!");
        let names: Vec<&str> = model
            .filtered_person_list()
            .into_iter()
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(names, vec!["Bernice Yu", "David Li"]);
    }
}
