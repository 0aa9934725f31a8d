//! Shared building blocks for the tower client: the error type, common type
//! aliases, and client-side validation helpers.

pub mod error;
pub mod types;
pub mod validation;
