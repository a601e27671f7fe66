//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens for parsing, one token per call. It handles:
//!
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Longest-match selection for two-character operators (`==`, `!=`)
//! - Illegal tokens for unrecognised characters
//! - Token spans for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
