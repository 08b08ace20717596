//! tenlessons-core — Session flow engine, section extraction, and pagination.
//!
//! This crate defines the data model, the `CompletionProvider` trait, and the
//! interactive lesson flow that the rest of the tenlessons system builds on.

pub mod curriculum;
pub mod error;
pub mod output;
pub mod paginate;
pub mod prompt;
pub mod section;
pub mod session;
pub mod traits;
