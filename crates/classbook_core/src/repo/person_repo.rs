//! Address book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full person list, in display order, with tags and classes.
//! - Rebuild a validated `AddressBook` from storage.
//!
//! # Invariants
//! - `save_address_book` is all-or-nothing (one immediate transaction).
//! - `load_address_book` returns `None` only when nothing was ever saved.

use crate::db::DbError;
use crate::model::address_book::AddressBook;
use crate::model::fields::{
    Address, Attendance, ClassName, Email, FieldError, Gender, Name, Phone, Subject, Tag,
};
use crate::model::person::{Person, PersonDetails, Role};
use crate::model::student::Student;
use crate::model::teacher::Teacher;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

const REQUIRED_TABLES: [&str; 4] = ["address_book", "persons", "person_tags", "person_classes"];

const PERSON_SELECT_SQL: &str = "SELECT
    position,
    role,
    name,
    gender,
    phone,
    email,
    address,
    subject,
    attendance
FROM persons
ORDER BY position ASC";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A stored row no longer satisfies the model's validation rules.
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "missing required table: {table}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<FieldError> for RepoError {
    fn from(value: FieldError) -> Self {
        Self::InvalidData(format!("{value} (got `{}`)", value.value()))
    }
}

/// Storage contract for the address book.
pub trait PersonRepository {
    fn load_address_book(&self) -> RepoResult<Option<AddressBook>>;
    fn save_address_book(&mut self, book: &AddressBook) -> RepoResult<()>;
}

/// SQLite-backed address book repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        for table in REQUIRED_TABLES {
            if !table_exists(conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn load_address_book(&self) -> RepoResult<Option<AddressBook>> {
        let saved: Option<i64> = self
            .conn
            .query_row("SELECT saved_at FROM address_book WHERE id = 1;", [], |row| {
                row.get(0)
            })
            .optional()?;
        if saved.is_none() {
            return Ok(None);
        }

        let mut tags = load_sets(self.conn, "SELECT person_position, tag FROM person_tags;")?;
        let mut classes = load_sets(
            self.conn,
            "SELECT person_position, class_name FROM person_classes;",
        )?;

        let mut stmt = self.conn.prepare(PERSON_SELECT_SQL)?;
        let rows = stmt.query_map([], PersonRow::from_row)?;
        let mut persons = Vec::new();
        for row in rows {
            let row = row?;
            let position = row.position;
            persons.push(row.into_person(
                tags.remove(&position).unwrap_or_default(),
                classes.remove(&position).unwrap_or_default(),
            )?);
        }

        AddressBook::from_persons(persons)
            .map(Some)
            .map_err(|err| RepoError::InvalidData(err.to_string()))
    }

    fn save_address_book(&mut self, book: &AddressBook) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute("DELETE FROM person_tags;", [])?;
        tx.execute("DELETE FROM person_classes;", [])?;
        tx.execute("DELETE FROM persons;", [])?;

        for (position, person) in book.persons().iter().enumerate() {
            let position = i64::try_from(position)
                .map_err(|_| RepoError::InvalidData("address book too large".to_string()))?;
            tx.execute(
                "INSERT INTO persons (
                    position,
                    role,
                    name,
                    gender,
                    phone,
                    email,
                    address,
                    subject,
                    attendance
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
                params![
                    position,
                    person.role().as_str(),
                    person.name().as_str(),
                    person.gender().as_str(),
                    person.phone().as_str(),
                    person.email().as_str(),
                    person.address().as_str(),
                    person.subject().as_str(),
                    person.attendance().map(|attendance| attendance.count()),
                ],
            )?;
            for tag in person.tags() {
                tx.execute(
                    "INSERT INTO person_tags (person_position, tag) VALUES (?1, ?2);",
                    params![position, tag.as_str()],
                )?;
            }
            for class in person.classes() {
                tx.execute(
                    "INSERT INTO person_classes (person_position, class_name) VALUES (?1, ?2);",
                    params![position, class.as_str()],
                )?;
            }
        }

        tx.execute(
            "INSERT INTO address_book (id, saved_at) VALUES (1, ?1)
             ON CONFLICT(id) DO UPDATE SET saved_at = excluded.saved_at;",
            [now_epoch_ms()],
        )?;

        tx.commit()?;
        Ok(())
    }
}

struct PersonRow {
    position: i64,
    role: String,
    name: String,
    gender: String,
    phone: String,
    email: String,
    address: String,
    subject: String,
    attendance: Option<i64>,
}

impl PersonRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            position: row.get(0)?,
            role: row.get(1)?,
            name: row.get(2)?,
            gender: row.get(3)?,
            phone: row.get(4)?,
            email: row.get(5)?,
            address: row.get(6)?,
            subject: row.get(7)?,
            attendance: row.get(8)?,
        })
    }

    fn into_person(
        self,
        tags: Vec<String>,
        classes: Vec<String>,
    ) -> RepoResult<Person> {
        let role = Role::parse(&self.role)
            .ok_or_else(|| RepoError::InvalidData(format!("unknown role `{}`", self.role)))?;
        let tags = tags
            .iter()
            .map(Tag::parse)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let details = PersonDetails::new(
            Name::parse(&self.name)?,
            Phone::parse(&self.phone)?,
            Email::parse(&self.email)?,
            Address::parse(&self.address)?,
            tags,
        );
        let gender = Gender::parse(&self.gender)?;
        let subject = Subject::parse(&self.subject)?;
        let classes = classes
            .iter()
            .map(ClassName::parse)
            .collect::<Result<BTreeSet<_>, _>>()?;

        let person = match (role, self.attendance) {
            (Role::Student, Some(count)) => {
                let count = u32::try_from(count).map_err(|_| {
                    RepoError::InvalidData(format!(
                        "attendance out of range for {}: {count}",
                        self.name
                    ))
                })?;
                Student::new(details, gender, subject, classes, Attendance::new(count)).into()
            }
            (Role::Teacher, None) => Teacher::new(details, gender, subject, classes).into(),
            (Role::Student, None) => {
                return Err(RepoError::InvalidData(format!(
                    "student without attendance: {}",
                    self.name
                )))
            }
            (Role::Teacher, Some(_)) => {
                return Err(RepoError::InvalidData(format!(
                    "teacher with attendance: {}",
                    self.name
                )))
            }
        };
        Ok(person)
    }
}

fn load_sets(conn: &Connection, sql: &str) -> RepoResult<BTreeMap<i64, Vec<String>>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut sets: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    while let Some(row) = rows.next()? {
        sets.entry(row.get(0)?).or_default().push(row.get(1)?);
    }
    Ok(sets)
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
