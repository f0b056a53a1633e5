//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parser, commands and repository into one call per input line.
//! - Keep the CLI decoupled from storage details.

pub mod command_service;
