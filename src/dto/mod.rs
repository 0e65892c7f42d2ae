//! DTO modules that bridge services with templates and the CLI.

pub mod document;
pub mod phase;
