//! Shared types for msgspell.
//!
//! - [`character`] -- Character classes that decide where a word may start or end
//! - [`finding`] -- A word reported as misspelled, with its suggestions

pub mod character;
pub mod finding;

pub use finding::Finding;
