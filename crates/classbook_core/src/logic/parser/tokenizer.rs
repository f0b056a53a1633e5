//! Prefix-based argument tokenizer.
//!
//! Splits an argument string such as `n/Alex p/9123 t/friend t/colleague`
//! into a preamble and per-prefix values.
//!
//! # Invariants
//! - A prefix is only recognised when preceded by whitespace (or at the start).
//! - Values are trimmed; repeated prefixes keep every value in input order.

use crate::logic::messages::duplicate_prefixes;
use crate::logic::parser::{ParseError, ParseResult};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Marker that introduces one argument, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_ROLE: Prefix = Prefix::new("r/");
pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_GENDER: Prefix = Prefix::new("g/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_SUBJECT: Prefix = Prefix::new("s/");
pub const PREFIX_CLASS: Prefix = Prefix::new("c/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// Tokenized arguments: the preamble plus every value per prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Rejects any of `prefixes` that was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(duplicate_prefixes(&duplicated)))
        }
    }
}

/// Tokenizes `args` using the recognised `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let padded = format!(" {args}");
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        positions.extend(
            padded
                .match_indices(prefix.as_str())
                .filter(|(start, _)| padded[..*start].ends_with(char::is_whitespace))
                .map(|(start, _)| (start, *prefix)),
        );
    }
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(padded.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (idx, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(idx + 1)
            .map_or(padded.len(), |(next_start, _)| *next_start);
        let value = padded[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }

    multimap
}
