//! Parsers for `mark` and `unmark`.
//!
//! Both take whitespace-separated one-based indexes. The result keeps one
//! index per token in input order; a single bad token fails the whole parse
//! with the command's usage text.

use crate::logic::commands::attendance::{MarkAttendanceCommand, UnmarkAttendanceCommand};
use crate::logic::index::Index;
use crate::logic::parser::util::parse_index;
use crate::logic::parser::{ParseError, ParseResult, Parser};

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkAttendanceCommandParser;

impl Parser for MarkAttendanceCommandParser {
    type Output = MarkAttendanceCommand;

    fn parse(&self, args: &str) -> ParseResult<MarkAttendanceCommand> {
        parse_indexes(args, MarkAttendanceCommand::MESSAGE_USAGE).map(MarkAttendanceCommand::new)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnmarkAttendanceCommandParser;

impl Parser for UnmarkAttendanceCommandParser {
    type Output = UnmarkAttendanceCommand;

    fn parse(&self, args: &str) -> ParseResult<UnmarkAttendanceCommand> {
        parse_indexes(args, UnmarkAttendanceCommand::MESSAGE_USAGE)
            .map(UnmarkAttendanceCommand::new)
    }
}

fn parse_indexes(args: &str, usage: &str) -> ParseResult<Vec<Index>> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ParseError::invalid_format(usage));
    }
    tokens
        .into_iter()
        .map(parse_index)
        .collect::<ParseResult<Vec<Index>>>()
        .map_err(|_| ParseError::invalid_format(usage))
}
