#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. A position at or past the end of the source
/// points just after the last character.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}

/// Renders an error with an excerpt of the offending source line.
///
/// ```text
/// Error: NoPrefixParseFn (no prefix parse function for ILLEGAL found)
/// -> main.monkey
///   |
/// 2 | let a = @;
///   | --------^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n  tip: {}\n",
            error.get_error_name(),
            error,
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
