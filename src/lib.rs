//! jielewe - Feelings journal for kids
//!
//! Classifies short journal entries as positive, negative or neutral,
//! suggests activities to match, and keeps a bounded history of entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JieleweError;
