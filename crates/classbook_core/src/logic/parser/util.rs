//! Shared conversions from raw argument text to typed values.

use crate::logic::index::Index;
use crate::logic::parser::{ParseError, ParseResult};
use crate::model::fields::{Address, ClassName, Email, FieldError, Gender, Name, Phone, Subject, Tag};
use crate::model::person::Role;
use std::collections::BTreeSet;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        ParseError::new(value.to_string())
    }
}

/// Parses a one-based index. Leading/trailing whitespace is ignored; signs,
/// zero and values beyond `u32::MAX` are rejected.
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(MESSAGE_INVALID_INDEX));
    }
    trimmed
        .parse::<u32>()
        .ok()
        .and_then(|value| Index::from_one_based(value as usize))
        .ok_or_else(|| ParseError::new(MESSAGE_INVALID_INDEX))
}

pub fn parse_role(raw: &str) -> ParseResult<Role> {
    Role::parse(raw).ok_or_else(|| ParseError::new(Role::CONSTRAINTS))
}

pub fn parse_name(raw: &str) -> ParseResult<Name> {
    Ok(Name::parse(raw)?)
}

pub fn parse_phone(raw: &str) -> ParseResult<Phone> {
    Ok(Phone::parse(raw)?)
}

pub fn parse_email(raw: &str) -> ParseResult<Email> {
    Ok(Email::parse(raw)?)
}

pub fn parse_address(raw: &str) -> ParseResult<Address> {
    Ok(Address::parse(raw)?)
}

pub fn parse_gender(raw: &str) -> ParseResult<Gender> {
    Ok(Gender::parse(raw)?)
}

pub fn parse_subject(raw: &str) -> ParseResult<Subject> {
    Ok(Subject::parse(raw)?)
}

pub fn parse_tags(raw: &[String]) -> ParseResult<BTreeSet<Tag>> {
    raw.iter()
        .map(|value| Tag::parse(value).map_err(ParseError::from))
        .collect()
}

pub fn parse_classes(raw: &[String]) -> ParseResult<BTreeSet<ClassName>> {
    raw.iter()
        .map(|value| ClassName::parse(value).map_err(ParseError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_index_accepts_positive_integers() {
        assert_eq!(parse_index("1").unwrap().zero_based(), 0);
        assert_eq!(parse_index("  10 ").unwrap().one_based(), 10);
        assert_eq!(parse_index("007").unwrap().one_based(), 7);
    }

    #[test]
    fn parse_index_rejects_everything_else() {
        for raw in ["", "0", "-1", "+1", "a", "1a", "1 2", "99999999999"] {
            let err = parse_index(raw).unwrap_err();
            assert_eq!(err.message(), MESSAGE_INVALID_INDEX, "input {raw:?}");
        }
    }

    #[test]
    fn field_errors_surface_constraint_text() {
        let err = parse_phone("12").unwrap_err();
        assert_eq!(err.message(), Phone::CONSTRAINTS);
        assert_eq!(parse_role("Teacher").unwrap(), Role::Teacher);
        assert_eq!(parse_role("admin").unwrap_err().message(), Role::CONSTRAINTS);
    }

    #[test]
    fn parse_tags_deduplicates_and_validates() {
        let tags = parse_tags(&["friends".into(), "friends".into(), "tutor".into()]).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(parse_tags(&["two words".into()]).is_err());
        assert!(parse_tags(&[]).unwrap().is_empty());
    }
}
