//! Parsers for `add` and `edit`, the two prefix-driven commands.

use crate::logic::commands::add::AddCommand;
use crate::logic::commands::edit::{EditCommand, EditPersonDescriptor};
use crate::logic::parser::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_ADDRESS, PREFIX_CLASS, PREFIX_EMAIL, PREFIX_GENDER,
    PREFIX_NAME, PREFIX_PHONE, PREFIX_ROLE, PREFIX_SUBJECT, PREFIX_TAG,
};
use crate::logic::parser::util::{
    parse_address, parse_classes, parse_email, parse_gender, parse_index, parse_name, parse_phone,
    parse_role, parse_subject, parse_tags,
};
use crate::logic::parser::{ParseError, ParseResult, Parser};
use crate::model::fields::Attendance;
use crate::model::person::{PersonDetails, Role};
use crate::model::student::Student;
use crate::model::teacher::Teacher;
use std::collections::BTreeSet;

const ADD_REQUIRED: [Prefix; 7] = [
    PREFIX_ROLE,
    PREFIX_NAME,
    PREFIX_GENDER,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_SUBJECT,
];
const EDIT_SINGLE_VALUED: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_GENDER,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_SUBJECT,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AddCommandParser;

impl Parser for AddCommandParser {
    type Output = AddCommand;

    fn parse(&self, args: &str) -> ParseResult<AddCommand> {
        let mut prefixes = ADD_REQUIRED.to_vec();
        prefixes.extend([PREFIX_CLASS, PREFIX_TAG]);
        let tokens = tokenize(args, &prefixes);

        let all_present = ADD_REQUIRED.iter().all(|prefix| tokens.contains(*prefix));
        if !all_present || !tokens.preamble().is_empty() {
            return Err(ParseError::invalid_format(AddCommand::MESSAGE_USAGE));
        }
        tokens.verify_no_duplicate_prefixes_for(&ADD_REQUIRED)?;

        let role = parse_role(required(&tokens, PREFIX_ROLE))?;
        let details = PersonDetails::new(
            parse_name(required(&tokens, PREFIX_NAME))?,
            parse_phone(required(&tokens, PREFIX_PHONE))?,
            parse_email(required(&tokens, PREFIX_EMAIL))?,
            parse_address(required(&tokens, PREFIX_ADDRESS))?,
            parse_tags(tokens.all_values(PREFIX_TAG))?,
        );
        let gender = parse_gender(required(&tokens, PREFIX_GENDER))?;
        let subject = parse_subject(required(&tokens, PREFIX_SUBJECT))?;
        let classes = parse_classes(tokens.all_values(PREFIX_CLASS))?;

        let person = match role {
            Role::Student => {
                Student::new(details, gender, subject, classes, Attendance::default()).into()
            }
            Role::Teacher => Teacher::new(details, gender, subject, classes).into(),
        };
        Ok(AddCommand::new(person))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EditCommandParser;

impl Parser for EditCommandParser {
    type Output = EditCommand;

    fn parse(&self, args: &str) -> ParseResult<EditCommand> {
        let mut prefixes = EDIT_SINGLE_VALUED.to_vec();
        prefixes.extend([PREFIX_CLASS, PREFIX_TAG]);
        let tokens = tokenize(args, &prefixes);

        let index = parse_index(tokens.preamble())
            .map_err(|_| ParseError::invalid_format(EditCommand::MESSAGE_USAGE))?;
        tokens.verify_no_duplicate_prefixes_for(&EDIT_SINGLE_VALUED)?;

        let descriptor = EditPersonDescriptor {
            name: tokens.value(PREFIX_NAME).map(parse_name).transpose()?,
            gender: tokens.value(PREFIX_GENDER).map(parse_gender).transpose()?,
            phone: tokens.value(PREFIX_PHONE).map(parse_phone).transpose()?,
            email: tokens.value(PREFIX_EMAIL).map(parse_email).transpose()?,
            address: tokens.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
            subject: tokens.value(PREFIX_SUBJECT).map(parse_subject).transpose()?,
            classes: resettable_set(&tokens, PREFIX_CLASS, parse_classes)?,
            tags: resettable_set(&tokens, PREFIX_TAG, parse_tags)?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::new(EditCommand::MESSAGE_NOT_EDITED));
        }
        Ok(EditCommand::new(index, descriptor))
    }
}

fn required(tokens: &ArgumentMultimap, prefix: Prefix) -> &str {
    tokens.value(prefix).unwrap_or_default()
}

/// `None` when the prefix is absent; a lone empty value clears the set.
fn resettable_set<T: Ord>(
    tokens: &ArgumentMultimap,
    prefix: Prefix,
    parse: fn(&[String]) -> ParseResult<BTreeSet<T>>,
) -> ParseResult<Option<BTreeSet<T>>> {
    match tokens.all_values(prefix) {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        values => parse(values).map(Some),
    }
}
