//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save contract for the address book.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Persisted rows are re-validated through the field parsers on load;
//!   anything that fails is reported as `RepoError::InvalidData`.
//! - Saves replace the whole book atomically, preserving list order.

pub mod person_repo;
