//! Parser for `sort KEY`.

use crate::logic::commands::sort::{SortCommand, SortKey};
use crate::logic::parser::{ParseError, ParseResult, Parser};

#[derive(Debug, Clone, Copy, Default)]
pub struct SortCommandParser;

impl Parser for SortCommandParser {
    type Output = SortCommand;

    fn parse(&self, args: &str) -> ParseResult<SortCommand> {
        let mut words = args.split_whitespace();
        match (words.next().and_then(SortKey::parse), words.next()) {
            (Some(key), None) => Ok(SortCommand::new(key)),
            _ => Err(ParseError::invalid_format(SortCommand::MESSAGE_USAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_key() {
        assert_eq!(
            SortCommandParser.parse(" attendance ").unwrap(),
            SortCommand::new(SortKey::Attendance)
        );
    }

    #[test]
    fn rejects_missing_unknown_or_extra_keys() {
        let expected = ParseError::invalid_format(SortCommand::MESSAGE_USAGE);
        for args in ["", "age", "name subject"] {
            assert_eq!(SortCommandParser.parse(args).unwrap_err(), expected);
        }
    }
}
