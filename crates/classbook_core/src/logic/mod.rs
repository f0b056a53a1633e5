//! Command-line logic: parsing user input and executing commands.
//!
//! # Responsibility
//! - Turn one line of text into a typed `Command` (parser layer).
//! - Apply commands to the `Model` and produce user-facing feedback.
//!
//! # Invariants
//! - Parsing never touches the model; execution never re-parses text.
//! - Parse failures (`ParseError`) and execution failures (`CommandError`)
//!   stay distinct error kinds.

pub mod commands;
pub mod index;
pub mod messages;
pub mod parser;
