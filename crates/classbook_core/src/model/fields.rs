//! Validated field value types shared by students and teachers.
//!
//! # Responsibility
//! - Reject malformed raw values at construction time.
//! - Keep every accepted value immutable afterwards.
//!
//! # Invariants
//! - A value type can only be built through its validating constructor
//!   (or serde, which routes through the same constructor).
//! - `FieldError` display text is the user-facing constraint message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N} ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{Alphabetic}\p{N}]+(?:[+_.\-][\p{Alphabetic}\p{N}]+)*@(?:[\p{Alphabetic}\p{N}](?:[\p{Alphabetic}\p{N}\-]*[\p{Alphabetic}\p{N}])?\.)*[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N}\-]*[\p{Alphabetic}\p{N}]$",
    )
    .expect("valid email regex")
});
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}]+$").expect("valid word regex"));
static SUBJECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Alphabetic}[\p{Alphabetic}\p{N} ]*$").expect("valid subject regex")
});

/// Validation failure for one raw field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Name(String),
    Phone(String),
    Email(String),
    Address(String),
    Tag(String),
    Gender(String),
    Subject(String),
    ClassName(String),
}

impl FieldError {
    /// Returns the rejected raw value.
    pub fn value(&self) -> &str {
        match self {
            Self::Name(value)
            | Self::Phone(value)
            | Self::Email(value)
            | Self::Address(value)
            | Self::Tag(value)
            | Self::Gender(value)
            | Self::Subject(value)
            | Self::ClassName(value) => value,
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let constraints = match self {
            Self::Name(_) => Name::CONSTRAINTS,
            Self::Phone(_) => Phone::CONSTRAINTS,
            Self::Email(_) => Email::CONSTRAINTS,
            Self::Address(_) => Address::CONSTRAINTS,
            Self::Tag(_) => Tag::CONSTRAINTS,
            Self::Gender(_) => Gender::CONSTRAINTS,
            Self::Subject(_) => Subject::CONSTRAINTS,
            Self::ClassName(_) => ClassName::CONSTRAINTS,
        };
        f.write_str(constraints)
    }
}

impl Error for FieldError {}

macro_rules! string_field {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $constraints:expr, $is_valid:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const CONSTRAINTS: &'static str = $constraints;

            /// Validates and wraps a raw value. Surrounding whitespace is trimmed.
            pub fn parse(raw: impl AsRef<str>) -> Result<Self, FieldError> {
                let trimmed = raw.as_ref().trim();
                let is_valid: fn(&str) -> bool = $is_valid;
                if is_valid(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err(FieldError::$variant(raw.as_ref().to_string()))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_field!(
    /// Full name; the identity key of a person.
    Name,
    Name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    |value| NAME_RE.is_match(value)
);

string_field!(
    Phone,
    Phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    |value| PHONE_RE.is_match(value)
);

string_field!(
    Email,
    Email,
    "Emails should be of the format local-part@domain. The local-part should only contain \
     alphanumeric characters separated by single special characters (+_.-), and the domain \
     should be made of labels separated by periods, each label alphanumeric with optional \
     inner hyphens and the last label at least 2 characters long",
    |value| EMAIL_RE.is_match(value)
);

string_field!(
    /// Postal address; free text that must not start with whitespace.
    Address,
    Address,
    "Addresses can take any values, and it should not be blank",
    |value| !value.is_empty()
);

string_field!(
    Tag,
    Tag,
    "Tags names should be alphanumeric",
    |value| WORD_RE.is_match(value)
);

string_field!(
    /// Subject taught or studied, e.g. `Mathematics`.
    Subject,
    Subject,
    "Subjects should start with a letter and only contain alphanumeric characters and spaces",
    |value| SUBJECT_RE.is_match(value)
);

string_field!(
    /// Class label such as `7A`.
    ClassName,
    ClassName,
    "Class names should be a single alphanumeric word, e.g. 7A",
    |value| WORD_RE.is_match(value)
);

/// Gender of a student or teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const CONSTRAINTS: &'static str = "Gender should be one of: male, female, other";

    /// Parses `male|female|other` (or `m|f|o`), case-insensitive.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, FieldError> {
        match raw.as_ref().trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            "o" | "other" => Ok(Self::Other),
            _ => Err(FieldError::Gender(raw.as_ref().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of sessions a student has attended.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Attendance(u32);

impl Attendance {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    /// Returns the count after one more attended session.
    pub fn incremented(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the count after removing one session, or `None` at zero.
    pub fn decremented(&self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl Display for Attendance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
