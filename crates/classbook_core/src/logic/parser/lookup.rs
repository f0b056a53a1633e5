//! Parsers for `delete INDEX` and `find KEYWORD...`.

use crate::logic::commands::delete::DeleteCommand;
use crate::logic::commands::find::{FindCommand, NameContainsKeywordsPredicate};
use crate::logic::parser::util::parse_index;
use crate::logic::parser::{ParseError, ParseResult, Parser};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteCommandParser;

impl Parser for DeleteCommandParser {
    type Output = DeleteCommand;

    fn parse(&self, args: &str) -> ParseResult<DeleteCommand> {
        parse_index(args)
            .map(DeleteCommand::new)
            .map_err(|_| ParseError::invalid_format(DeleteCommand::MESSAGE_USAGE))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FindCommandParser;

impl Parser for FindCommandParser {
    type Output = FindCommand;

    fn parse(&self, args: &str) -> ParseResult<FindCommand> {
        let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(ParseError::invalid_format(FindCommand::MESSAGE_USAGE));
        }
        Ok(FindCommand::new(NameContainsKeywordsPredicate::new(keywords)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::index::Index;

    #[test]
    fn delete_parses_single_index() {
        assert_eq!(
            DeleteCommandParser.parse(" 1").unwrap(),
            DeleteCommand::new(Index::from_one_based(1).unwrap())
        );
        assert_eq!(
            DeleteCommandParser.parse("1 2").unwrap_err(),
            ParseError::invalid_format(DeleteCommand::MESSAGE_USAGE)
        );
    }

    #[test]
    fn find_collapses_whitespace_between_keywords() {
        let expected = FindCommand::new(NameContainsKeywordsPredicate::new(vec![
            "Alice".to_string(),
            "Bob".to_string(),
        ]));
        assert_eq!(FindCommandParser.parse(" \n Alice \n \t Bob  \t").unwrap(), expected);
        assert!(FindCommandParser.parse("   ").is_err());
    }
}
