//! Error types and the diagnostics sink for the front end.
//!
//! This module defines:
//!
//! - Error structures carrying the span of the offending token
//! - Specific error variants with their user-facing messages
//! - The ordered sink that accumulates errors during a parse
//! - Helpful suggestions shown next to rendered errors

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;
