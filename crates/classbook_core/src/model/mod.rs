//! Address book domain model.
//!
//! # Responsibility
//! - Define validated field types and the student/teacher entities.
//! - Hold the person collection and the visible view used by commands.
//!
//! # Invariants
//! - Every entity field is validated at construction.
//! - Person identity is the name; no two entries share a name.

pub mod address_book;
pub mod fields;
#[allow(clippy::module_inception)]
pub mod model;
pub mod person;
pub mod sample_data;
pub mod student;
pub mod teacher;
